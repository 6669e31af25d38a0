use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoursebookError {
    #[error("unknown branch '{code}'. Available: {available}")]
    UnknownBranch { code: String, available: String },

    #[error("branch '{branch}' has no semester '{semester}'. Available: {available}")]
    UnknownSemester {
        branch: String,
        semester: String,
        available: String,
    },

    #[error("invalid grade '{0}'. Expected one of: AA, AB, BB, BC, CC, CD, DD, FF")]
    InvalidGrade(String),

    #[error("invalid grade assignment '{0}'. Expected COURSE=GRADE (e.g. CS101=AB)")]
    InvalidAssignment(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("no catalog given. Pass --catalog FILE or set COURSEBOOK_CATALOG")]
    CatalogMissing,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
