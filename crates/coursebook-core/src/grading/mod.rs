pub mod grade;
pub mod report;

use crate::catalog::schema::Course;
use crate::error::CoursebookError;
use grade::Grade;
use report::{CourseLine, PreviousRecord};
use rust_decimal::Decimal;

/// Highest SPI/CPI on the ten-point scale.
pub const MAX_INDEX: Decimal = Decimal::TEN;

/// Largest credit weight accepted for a single course.
pub const MAX_COURSE_CREDITS: Decimal = Decimal::ONE_THOUSAND;

/// Largest accumulated credit total accepted for a previous record.
pub const MAX_PREVIOUS_CREDITS: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Find the grade entered for a course code, ignoring ASCII case when there
/// is no exact match. A course graded twice keeps the last grade.
pub fn grade_for<'a>(grades: &'a [(String, Grade)], code: &str) -> Option<&'a Grade> {
    grades
        .iter()
        .rev()
        .find(|(c, _)| c == code)
        .or_else(|| {
            grades
                .iter()
                .rev()
                .find(|(c, _)| c.eq_ignore_ascii_case(code))
        })
        .map(|(_, g)| g)
}

fn overflow(field: &'static str) -> CoursebookError {
    CoursebookError::InvalidInput {
        field,
        reason: "value too large to compute with".into(),
    }
}

/// Build one line per course. Ungraded courses carry zero points.
pub fn course_lines(
    courses: &[Course],
    grades: &[(String, Grade)],
) -> Result<Vec<CourseLine>, CoursebookError> {
    courses
        .iter()
        .map(|course| -> Result<CourseLine, CoursebookError> {
            let grade = grade_for(grades, &course.code).copied();
            let weighted_points = match grade {
                Some(g) => g
                    .points()
                    .checked_mul(course.credits)
                    .ok_or_else(|| overflow("course credits"))?,
                None => Decimal::ZERO,
            };
            Ok(CourseLine {
                code: course.code.clone(),
                name: course.name.clone(),
                credits: course.credits,
                grade,
                weighted_points,
            })
        })
        .collect()
}

pub fn total_credits(courses: &[Course]) -> Result<Decimal, CoursebookError> {
    courses.iter().try_fold(Decimal::ZERO, |acc, c| {
        acc.checked_add(c.credits)
            .ok_or_else(|| overflow("course credits"))
    })
}

/// Semester performance index: credit-weighted mean of grade points.
///
/// A course without a grade still counts its credits. Zero when there are no
/// credits to divide by.
pub fn spi(courses: &[Course], grades: &[(String, Grade)]) -> Result<Decimal, CoursebookError> {
    let total = total_credits(courses)?;
    if total.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let weighted = course_lines(courses, grades)?
        .iter()
        .try_fold(Decimal::ZERO, |acc, l| {
            acc.checked_add(l.weighted_points)
                .ok_or_else(|| overflow("course credits"))
        })?;
    weighted
        .checked_div(total)
        .ok_or_else(|| overflow("course credits"))
}

/// Cumulative performance index after adding a semester to a previous record.
pub fn cpi(
    previous: &PreviousRecord,
    spi: Decimal,
    current_credits: Decimal,
) -> Result<Decimal, CoursebookError> {
    let total = previous
        .credits
        .checked_add(current_credits)
        .ok_or_else(|| overflow("previous credits"))?;
    if total.is_zero() {
        return Ok(Decimal::ZERO);
    }
    previous
        .spi
        .checked_mul(previous.credits)
        .zip(spi.checked_mul(current_credits))
        .and_then(|(before, now)| before.checked_add(now))
        .and_then(|sum| sum.checked_div(total))
        .ok_or_else(|| overflow("previous credits"))
}

/// Check a previous record before it is used in a CPI calculation.
pub fn validate_previous(previous: &PreviousRecord) -> Result<(), CoursebookError> {
    if previous.credits < Decimal::ZERO {
        return Err(CoursebookError::InvalidInput {
            field: "previous credits",
            reason: format!("{} is negative", previous.credits),
        });
    }
    if previous.credits > MAX_PREVIOUS_CREDITS {
        return Err(CoursebookError::InvalidInput {
            field: "previous credits",
            reason: format!("{} exceeds {}", previous.credits, MAX_PREVIOUS_CREDITS),
        });
    }
    if previous.spi < Decimal::ZERO || previous.spi > MAX_INDEX {
        return Err(CoursebookError::InvalidInput {
            field: "previous SPI",
            reason: format!("{} is outside 0..={}", previous.spi, MAX_INDEX),
        });
    }
    Ok(())
}

/// Parse a `COURSE=GRADE` pair such as `CS101=AB`.
pub fn parse_assignment(s: &str) -> Result<(String, Grade), CoursebookError> {
    let (code, grade) = s
        .split_once('=')
        .ok_or_else(|| CoursebookError::InvalidAssignment(s.to_string()))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(CoursebookError::InvalidAssignment(s.to_string()));
    }
    Ok((code.to_string(), grade.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn course(code: &str, credits: Decimal) -> Course {
        Course {
            code: code.into(),
            name: String::new(),
            credits,
        }
    }

    fn graded(pairs: &[(&str, Grade)]) -> Vec<(String, Grade)> {
        pairs.iter().map(|(c, g)| (c.to_string(), *g)).collect()
    }

    #[test]
    fn test_spi_weighted_mean() {
        let courses = vec![course("CS101", dec!(6)), course("MA101", dec!(8))];
        let grades = graded(&[("CS101", Grade::AA), ("MA101", Grade::BB)]);
        // (10*6 + 8*8) / 14
        assert_eq!(spi(&courses, &grades).unwrap().round_dp(4), dec!(8.8571));
    }

    #[test]
    fn test_spi_ungraded_course_counts_credits() {
        let courses = vec![course("CS101", dec!(5)), course("MA101", dec!(5))];
        let grades = graded(&[("CS101", Grade::AA)]);
        assert_eq!(spi(&courses, &grades).unwrap(), dec!(5));
    }

    #[test]
    fn test_spi_zero_credits() {
        assert_eq!(spi(&[], &[]).unwrap(), Decimal::ZERO);
        let courses = vec![course("ME100", dec!(0))];
        let grades = graded(&[("ME100", Grade::AA)]);
        assert_eq!(spi(&courses, &grades).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_grade_lookup_case_insensitive() {
        let courses = vec![course("CS101", dec!(4))];
        let grades = graded(&[("cs101", Grade::BC)]);
        assert_eq!(spi(&courses, &grades).unwrap(), dec!(7));
    }

    #[test]
    fn test_spi_huge_credits_is_an_error() {
        let courses = vec![course("CS101", Decimal::MAX)];
        let grades = graded(&[("CS101", Grade::AA)]);
        assert!(matches!(
            spi(&courses, &grades),
            Err(CoursebookError::InvalidInput { .. })
        ));

        let courses = vec![course("CS101", Decimal::MAX), course("MA101", dec!(1))];
        assert!(total_credits(&courses).is_err());
    }

    #[test]
    fn test_cpi_huge_previous_credits_is_an_error() {
        let previous = PreviousRecord {
            spi: dec!(10),
            credits: Decimal::MAX,
        };
        assert!(cpi(&previous, dec!(8), dec!(20)).is_err());
    }

    #[test]
    fn test_last_grade_wins() {
        let courses = vec![course("CS101", dec!(6))];
        let grades = graded(&[("CS101", Grade::AA), ("CS101", Grade::FF)]);
        assert_eq!(spi(&courses, &grades).unwrap(), dec!(0));

        let grades = graded(&[("CS101", Grade::AA), ("cs101", Grade::BB)]);
        assert_eq!(grade_for(&grades, "CS101"), Some(&Grade::AA));
        let grades = graded(&[("cs101", Grade::AA), ("Cs101", Grade::BB)]);
        assert_eq!(grade_for(&grades, "CS101"), Some(&Grade::BB));
    }

    #[test]
    fn test_cpi() {
        let previous = PreviousRecord {
            spi: dec!(8),
            credits: dec!(40),
        };
        // (8*40 + 9*20) / 60
        assert_eq!(cpi(&previous, dec!(9), dec!(20)).unwrap().round_dp(4), dec!(8.3333));
    }

    #[test]
    fn test_cpi_no_credits_anywhere() {
        let previous = PreviousRecord {
            spi: dec!(9),
            credits: dec!(0),
        };
        assert_eq!(cpi(&previous, dec!(0), dec!(0)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_cpi_without_current_credits_keeps_previous() {
        let previous = PreviousRecord {
            spi: dec!(7.5),
            credits: dec!(30),
        };
        assert_eq!(cpi(&previous, dec!(0), dec!(0)).unwrap(), dec!(7.5));
    }

    #[test]
    fn test_validate_previous() {
        let ok = PreviousRecord {
            spi: dec!(10),
            credits: dec!(0),
        };
        assert!(validate_previous(&ok).is_ok());
        let bad_spi = PreviousRecord {
            spi: dec!(10.5),
            credits: dec!(20),
        };
        assert!(validate_previous(&bad_spi).is_err());
        let bad_credits = PreviousRecord {
            spi: dec!(8),
            credits: dec!(-1),
        };
        assert!(validate_previous(&bad_credits).is_err());
        let huge_credits = PreviousRecord {
            spi: dec!(10),
            credits: Decimal::MAX,
        };
        assert!(validate_previous(&huge_credits).is_err());
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("CS101=ab").unwrap(),
            ("CS101".to_string(), Grade::AB)
        );
        assert_eq!(
            parse_assignment(" MA101 = FF ").unwrap(),
            ("MA101".to_string(), Grade::FF)
        );
        assert!(matches!(
            parse_assignment("CS101"),
            Err(CoursebookError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignment("=AA"),
            Err(CoursebookError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignment("CS101=A"),
            Err(CoursebookError::InvalidGrade(_))
        ));
    }
}
