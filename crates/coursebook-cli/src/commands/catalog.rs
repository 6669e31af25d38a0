use coursebook_core::catalog;
use coursebook_core::error::CoursebookError;
use std::path::{Path, PathBuf};

use crate::output;

pub fn validate(file: &Path) -> Result<(), CoursebookError> {
    let catalog = catalog::load_catalog(file)?;

    let semesters: usize = catalog.branches.iter().map(|b| b.semesters.len()).sum();
    let courses: usize = catalog
        .branches
        .iter()
        .flat_map(|b| &b.semesters)
        .map(|s| s.courses.len())
        .sum();

    println!("Catalog '{}' is valid.", file.display());
    println!(
        "  Branches: {}",
        catalog.branches().collect::<Vec<_>>().join(", ")
    );
    println!("  Semesters: {}", semesters);
    println!("  Courses: {}", courses);

    let warnings = catalog::catalog_warnings(&catalog);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

pub fn show(
    catalog_file: Option<PathBuf>,
    branch: &str,
    semester: Option<&str>,
) -> Result<(), CoursebookError> {
    let path = super::require_catalog(catalog_file)?;
    let catalog = catalog::load_catalog(&path)?;

    match semester {
        Some(semester) => {
            let courses = catalog.courses(branch, semester)?;
            let code = &catalog.branch(branch)?.code;
            println!("{} semester {}\n", code, semester.trim());
            output::table::print_courses(courses);
        }
        None => {
            let b = catalog.branch(branch)?;
            println!("Semesters for {}:\n", b.code);
            for s in &b.semesters {
                println!("  {:<6} {} course(s)", s.label, s.courses.len());
            }
        }
    }

    Ok(())
}
