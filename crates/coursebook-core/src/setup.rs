//! OCR setup notes.
//!
//! Course-structure PDFs are scanned images, so reading them needs an OCR
//! engine. This module only tells the user what to install and can check
//! whether the tools are on `PATH`.

use serde::Serialize;
use std::io::Write;
use std::process::Command;

/// The setup instructions, one entry per output line.
pub const INSTRUCTIONS: &[&str] = &[
    "To extract from PDFs, you need:",
    "1. Install Tesseract OCR: https://github.com/UB-Mannheim/tesseract/wiki",
    "2. pip install pytesseract pdfplumber pillow",
    "3. Run this script with OCR enabled",
];

/// External programs worth probing, with the argument that makes each one
/// print its version and exit.
const TOOLS: &[(&str, &str)] = &[("tesseract", "--version"), ("pdftotext", "-v")];

pub fn instructions() -> &'static [&'static str] {
    INSTRUCTIONS
}

/// Write the instructions, one per line.
pub fn write_instructions<W: Write>(out: &mut W) -> std::io::Result<()> {
    for line in INSTRUCTIONS {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub name: &'static str,
    pub found: bool,
}

/// Check which OCR tools are installed.
pub fn probe_tools() -> Vec<ToolStatus> {
    TOOLS
        .iter()
        .map(|&(name, version_arg)| ToolStatus {
            name,
            found: is_available(name, version_arg),
        })
        .collect()
}

/// Check if a program can be spawned. pdftotext prints its version to
/// stderr and some builds exit non-zero, so either signal counts.
fn is_available(program: &str, version_arg: &str) -> bool {
    let found = Command::new(program)
        .arg(version_arg)
        .output()
        .map(|o| o.status.success() || !o.stderr.is_empty())
        .unwrap_or(false);
    tracing::debug!(program, found, "probed tool");
    found
}
