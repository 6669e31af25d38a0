pub mod branches;
pub mod catalog;
pub mod setup;
pub mod spi;

use coursebook_core::error::CoursebookError;
use std::path::PathBuf;

/// The catalog path from `--catalog` or `COURSEBOOK_CATALOG`.
pub(crate) fn require_catalog(catalog: Option<PathBuf>) -> Result<PathBuf, CoursebookError> {
    let path = catalog.ok_or(CoursebookError::CatalogMissing)?;
    tracing::debug!(path = %path.display(), "using catalog");
    Ok(path)
}
