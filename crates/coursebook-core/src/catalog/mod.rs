pub mod schema;

use crate::branches;
use crate::error::CoursebookError;
use crate::grading::MAX_COURSE_CREDITS;
use rust_decimal::Decimal;
use schema::{BranchCourses, Catalog, Course, Semester};
use std::collections::HashSet;
use std::path::Path;

/// Load a course catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CoursebookError> {
    let content = std::fs::read_to_string(path).map_err(|e| CoursebookError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string, reporting errors against `source`.
pub fn parse_catalog(json: &str, source: &Path) -> Result<Catalog, CoursebookError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(|e| CoursebookError::CatalogLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_catalog(&catalog)?;
    tracing::debug!(
        source = %source.display(),
        branches = catalog.branches.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Catalog, CoursebookError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(CoursebookError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CoursebookError> {
    if catalog.branches.is_empty() {
        return Err(CoursebookError::CatalogInvalid(
            "catalog has no branches".into(),
        ));
    }

    let mut seen_branches = HashSet::new();
    for branch in &catalog.branches {
        if branch.code.trim().is_empty() {
            return Err(CoursebookError::CatalogInvalid(
                "branch code must not be empty".into(),
            ));
        }
        if !seen_branches.insert(branch.code.as_str()) {
            return Err(CoursebookError::CatalogInvalid(format!(
                "branch '{}' appears more than once",
                branch.code
            )));
        }
        if branch.semesters.is_empty() {
            return Err(CoursebookError::CatalogInvalid(format!(
                "branch '{}' has no semesters",
                branch.code
            )));
        }

        let mut seen_semesters = HashSet::new();
        for semester in &branch.semesters {
            if !seen_semesters.insert(semester.label.as_str()) {
                return Err(CoursebookError::CatalogInvalid(format!(
                    "branch '{}' lists semester '{}' more than once",
                    branch.code, semester.label
                )));
            }
            validate_courses(branch, semester)?;
        }
    }

    Ok(())
}

fn validate_courses(branch: &BranchCourses, semester: &Semester) -> Result<(), CoursebookError> {
    let mut seen = HashSet::new();
    for course in &semester.courses {
        if course.code.trim().is_empty() {
            return Err(CoursebookError::CatalogInvalid(format!(
                "branch '{}' semester '{}' has a course with an empty code",
                branch.code, semester.label
            )));
        }
        if !seen.insert(course.code.as_str()) {
            return Err(CoursebookError::CatalogInvalid(format!(
                "course '{}' appears more than once in branch '{}' semester '{}'",
                course.code, branch.code, semester.label
            )));
        }
        if course.credits < Decimal::ZERO {
            return Err(CoursebookError::CatalogInvalid(format!(
                "course '{}' has negative credits ({})",
                course.code, course.credits
            )));
        }
        if course.credits > MAX_COURSE_CREDITS {
            return Err(CoursebookError::CatalogInvalid(format!(
                "course '{}' has {} credits (at most {} allowed)",
                course.code, course.credits, MAX_COURSE_CREDITS
            )));
        }
    }
    Ok(())
}

/// Non-fatal findings worth showing to whoever maintains the catalog.
pub fn catalog_warnings(catalog: &Catalog) -> Vec<String> {
    let mut warnings = Vec::new();
    for branch in &catalog.branches {
        if !branches::is_known(&branch.code) {
            warnings.push(format!(
                "branch '{}' is not a known department code",
                branch.code
            ));
        }
        for semester in &branch.semesters {
            if semester.courses.is_empty() {
                warnings.push(format!(
                    "branch '{}' semester '{}' has no courses",
                    branch.code, semester.label
                ));
            }
            for course in &semester.courses {
                if course.credits.is_zero() {
                    warnings.push(format!(
                        "course '{}' in branch '{}' semester '{}' has zero credits",
                        course.code, branch.code, semester.label
                    ));
                }
            }
        }
    }
    warnings
}

impl Catalog {
    pub fn branches(&self) -> impl Iterator<Item = &str> {
        self.branches.iter().map(|b| b.code.as_str())
    }

    /// Find a branch, ignoring ASCII case when there is no exact match.
    pub fn branch(&self, code: &str) -> Result<&BranchCourses, CoursebookError> {
        let code = code.trim();
        self.branches
            .iter()
            .find(|b| b.code == code)
            .or_else(|| {
                self.branches
                    .iter()
                    .find(|b| b.code.eq_ignore_ascii_case(code))
            })
            .ok_or_else(|| CoursebookError::UnknownBranch {
                code: code.to_string(),
                available: self.branches().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn semesters(&self, branch: &str) -> Result<Vec<&str>, CoursebookError> {
        Ok(self
            .branch(branch)?
            .semesters
            .iter()
            .map(|s| s.label.as_str())
            .collect())
    }

    pub fn courses(&self, branch: &str, semester: &str) -> Result<&[Course], CoursebookError> {
        let b = self.branch(branch)?;
        let semester = semester.trim();
        b.semesters
            .iter()
            .find(|s| s.label == semester)
            .map(|s| s.courses.as_slice())
            .ok_or_else(|| CoursebookError::UnknownSemester {
                branch: b.code.clone(),
                semester: semester.to_string(),
                available: b
                    .semesters
                    .iter()
                    .map(|s| s.label.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
