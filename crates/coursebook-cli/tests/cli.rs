//! End-to-end tests for the `coursebook` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const INSTRUCTIONS: &str = "To extract from PDFs, you need:\n\
1. Install Tesseract OCR: https://github.com/UB-Mannheim/tesseract/wiki\n\
2. pip install pytesseract pdfplumber pillow\n\
3. Run this script with OCR enabled\n";

const CATALOG: &str = r#"{
    "CSE": {
        "1": [
            { "code": "CS101", "name": "Introduction to Computing", "credits": 6 },
            { "code": "MA101", "name": "Mathematics I", "credits": 8 }
        ]
    }
}"#;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coursebook"));
    cmd.env_remove("COURSEBOOK_CATALOG");
    cmd
}

fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

// ============ SETUP ============

#[test]
fn test_no_subcommand_prints_instructions() {
    cli().assert().success().stdout(INSTRUCTIONS);
}

#[test]
fn test_setup_matches_default() {
    cli().arg("setup").assert().success().stdout(INSTRUCTIONS);
}

#[test]
fn test_setup_check_lists_tools() {
    cli()
        .args(["setup", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(INSTRUCTIONS))
        .stdout(predicate::str::contains("tesseract"))
        .stdout(predicate::str::contains("pdftotext"));
}

// ============ BRANCHES ============

#[test]
fn test_branches_json_in_declaration_order() {
    let output = cli()
        .args(["branches", "list", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let cse = stdout.find("\"CSE\"").unwrap();
    let bsbe = stdout.find("\"BSBE\"").unwrap();
    let dsai = stdout.find("\"DSAI\"").unwrap();
    assert!(cse < bsbe && bsbe < dsai);
}

#[test]
fn test_unknown_output_format_rejected() {
    cli()
        .args(["branches", "list", "-o", "yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yml"));
}

#[test]
fn test_unknown_branch_fails() {
    cli()
        .args(["branches", "show", "XYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: unknown branch 'XYZ'"));
}

// ============ SPI ============

#[test]
fn test_spi_table() {
    let file = catalog_file();
    cli()
        .arg("spi")
        .arg("--catalog")
        .arg(file.path())
        .args(["-b", "CSE", "-s", "1", "-g", "CS101=AA", "-g", "MA101=BB"])
        .assert()
        .success()
        // (10*6 + 8*8) / 14
        .stdout(predicate::str::contains("SPI: 8.86"));
}

#[test]
fn test_spi_catalog_from_env() {
    let file = catalog_file();
    cli()
        .env("COURSEBOOK_CATALOG", file.path())
        .args(["spi", "-b", "CSE", "-s", "1", "-g", "CS101=AA", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"branch\": \"CSE\""));
}

#[test]
fn test_spi_without_catalog_fails() {
    cli()
        .args(["spi", "-b", "CSE", "-s", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no catalog given"));
}
