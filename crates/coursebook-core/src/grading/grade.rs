use crate::error::CoursebookError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade on the ten-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    AA,
    AB,
    BB,
    BC,
    CC,
    CD,
    DD,
    FF,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 8] = [
        Grade::AA,
        Grade::AB,
        Grade::BB,
        Grade::BC,
        Grade::CC,
        Grade::CD,
        Grade::DD,
        Grade::FF,
    ];

    pub fn points(self) -> Decimal {
        let points: u32 = match self {
            Grade::AA => 10,
            Grade::AB => 9,
            Grade::BB => 8,
            Grade::BC => 7,
            Grade::CC => 6,
            Grade::CD => 5,
            Grade::DD => 4,
            Grade::FF => 0,
        };
        Decimal::from(points)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::AA => "AA",
            Grade::AB => "AB",
            Grade::BB => "BB",
            Grade::BC => "BC",
            Grade::CC => "CC",
            Grade::CD => "CD",
            Grade::DD => "DD",
            Grade::FF => "FF",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = CoursebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == upper)
            .ok_or_else(|| CoursebookError::InvalidGrade(s.trim().to_string()))
    }
}
