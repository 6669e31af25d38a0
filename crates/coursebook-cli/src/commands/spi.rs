use coursebook_core::catalog;
use coursebook_core::error::CoursebookError;
use coursebook_core::grading;
use coursebook_core::grading::report::PreviousRecord;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

use crate::output;

pub struct SpiArgs {
    pub catalog: Option<PathBuf>,
    pub branch: String,
    pub semester: String,
    pub grades: Vec<String>,
    pub prev_spi: Option<String>,
    pub prev_credits: Option<String>,
    pub output: String,
}

pub fn run(args: SpiArgs) -> Result<(), CoursebookError> {
    let path = super::require_catalog(args.catalog)?;
    let catalog = catalog::load_catalog(&path)?;

    let grades = args
        .grades
        .iter()
        .map(|g| grading::parse_assignment(g))
        .collect::<Result<Vec<_>, _>>()?;

    let previous = match (args.prev_spi.as_deref(), args.prev_credits.as_deref()) {
        (Some(spi), Some(credits)) => Some(PreviousRecord {
            spi: parse_decimal("previous SPI", spi)?,
            credits: parse_decimal("previous credits", credits)?,
        }),
        _ => None,
    };

    let report =
        coursebook_core::semester_report(&catalog, &args.branch, &args.semester, &grades, previous)?;

    match args.output.as_str() {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report),
    }

    Ok(())
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, CoursebookError> {
    Decimal::from_str(raw.trim()).map_err(|e| CoursebookError::InvalidInput {
        field,
        reason: format!("'{}': {}", raw, e),
    })
}
