use crate::grading::grade::Grade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cumulative standing before the semester being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviousRecord {
    pub spi: Decimal,
    pub credits: Decimal,
}

/// One course row of a semester report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseLine {
    pub code: String,
    pub name: String,
    pub credits: Decimal,
    /// Grade entered for the course, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
    /// Grade points times credits. Zero when no grade was entered.
    pub weighted_points: Decimal,
}

/// SPI (and optionally CPI) for one branch and semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterReport {
    pub branch: String,
    pub semester: String,
    pub courses: Vec<CourseLine>,
    pub total_credits: Decimal,
    pub spi: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PreviousRecord>,
    /// Present only when a previous record was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpi: Option<Decimal>,
    /// Course codes that were graded but are not offered in this semester.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored_grades: Vec<String>,
}

impl SemesterReport {
    pub fn graded_count(&self) -> usize {
        self.courses.iter().filter(|c| c.grade.is_some()).count()
    }
}
