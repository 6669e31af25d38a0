use coursebook_core::branches;
use coursebook_core::error::CoursebookError;
use std::path::PathBuf;

use crate::output;

pub fn list(output_format: &str) -> Result<(), CoursebookError> {
    match output_format {
        "json" => output::json::print(&branches::as_map())?,
        _ => output::table::print_branches(branches::all()),
    }
    Ok(())
}

pub fn show(code: &str, dir: Option<PathBuf>) -> Result<(), CoursebookError> {
    let branch = branches::lookup(code)?;
    match dir {
        Some(dir) => {
            let path = branches::pdf_path(&dir, branch.code)?;
            println!("{:<6} {}", branch.code, path.display());
        }
        None => println!("{:<6} {}", branch.code, branch.pdf),
    }
    Ok(())
}
