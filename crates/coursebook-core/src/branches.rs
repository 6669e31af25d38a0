//! Department (branch) codes and the course-structure PDF each one refers to.
//!
//! The PDF names are only referenced here. Nothing in this module opens them.

use crate::error::CoursebookError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// A department code and the file name of its course-structure PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub code: &'static str,
    pub pdf: &'static str,
}

/// All known branches, in declaration order.
#[rustfmt::skip]
pub const BRANCHES: &[Branch] = &[
    Branch { code: "CSE", pdf: "CSE.pdf" },
    Branch { code: "EEE", pdf: "EEE.pdf" },
    Branch { code: "ECE", pdf: "ECE.pdf" },
    Branch { code: "ME", pdf: "ME.pdf" },
    Branch { code: "CE", pdf: "CE.pdf" },
    Branch { code: "CL", pdf: "CL.pdf" },
    Branch { code: "CST", pdf: "CST.pdf" },
    Branch { code: "BSBE", pdf: "BSBE.pdf" },
    Branch { code: "EP", pdf: "EP.pdf" },
    Branch { code: "MnC", pdf: "MnC.pdf" },
    Branch { code: "EN", pdf: "EN.pdf" },
    Branch { code: "DSAI", pdf: "DSAI.pdf" },
];

pub fn all() -> &'static [Branch] {
    BRANCHES
}

pub fn codes() -> impl Iterator<Item = &'static str> {
    BRANCHES.iter().map(|b| b.code)
}

/// Check whether `code` names a known branch (exact match only).
pub fn is_known(code: &str) -> bool {
    BRANCHES.iter().any(|b| b.code == code)
}

/// Find a branch by code.
///
/// An exact match wins; otherwise the code is compared ignoring ASCII case,
/// so `mnc` resolves to `MnC`.
pub fn lookup(code: &str) -> Result<&'static Branch, CoursebookError> {
    let code = code.trim();
    BRANCHES
        .iter()
        .find(|b| b.code == code)
        .or_else(|| BRANCHES.iter().find(|b| b.code.eq_ignore_ascii_case(code)))
        .ok_or_else(|| CoursebookError::UnknownBranch {
            code: code.to_string(),
            available: codes().collect::<Vec<_>>().join(", "),
        })
}

/// Where the branch's PDF would live under `dir`. The file is not touched.
pub fn pdf_path(dir: &Path, code: &str) -> Result<PathBuf, CoursebookError> {
    let branch = lookup(code)?;
    tracing::debug!(branch = branch.code, dir = %dir.display(), "resolved pdf path");
    Ok(dir.join(branch.pdf))
}

/// Code -> PDF file name, serialized as a JSON object in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct BranchMap(&'static [Branch]);

impl BranchMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.0.iter().find(|b| b.code == code).map(|b| b.pdf)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.0.iter().map(|b| (b.code, b.pdf))
    }
}

impl Serialize for BranchMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for branch in self.0 {
            map.serialize_entry(branch.code, branch.pdf)?;
        }
        map.end()
    }
}

pub fn as_map() -> BranchMap {
    BranchMap(BRANCHES)
}
