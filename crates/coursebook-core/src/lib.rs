pub mod branches;
pub mod catalog;
pub mod error;
pub mod grading;
pub mod setup;

use catalog::schema::Catalog;
use error::CoursebookError;
use grading::grade::Grade;
use grading::report::{PreviousRecord, SemesterReport};

/// Main API entry point: compute SPI (and CPI when a previous record is
/// given) for one branch and semester of a catalog.
///
/// Grades for courses not offered in the semester are not an error; they are
/// listed in `ignored_grades`. A course graded more than once keeps its last
/// grade.
pub fn semester_report(
    catalog: &Catalog,
    branch: &str,
    semester: &str,
    grades: &[(String, Grade)],
    previous: Option<PreviousRecord>,
) -> Result<SemesterReport, CoursebookError> {
    let branch_code = catalog.branch(branch)?.code.clone();
    let courses = catalog.courses(branch, semester)?;

    if let Some(ref prev) = previous {
        grading::validate_previous(prev)?;
    }

    let mut ignored_grades: Vec<String> = Vec::new();
    for (code, _) in grades {
        let offered = courses
            .iter()
            .any(|c| c.code == *code || c.code.eq_ignore_ascii_case(code));
        if !offered && !ignored_grades.contains(code) {
            ignored_grades.push(code.clone());
        }
    }
    for code in &ignored_grades {
        tracing::warn!(
            course = %code,
            branch = %branch_code,
            semester,
            "grade ignored: course not offered in this semester"
        );
    }

    let lines = grading::course_lines(courses, grades)?;
    let total_credits = grading::total_credits(courses)?;
    let spi = grading::spi(courses, grades)?;
    let cpi = previous
        .as_ref()
        .map(|prev| grading::cpi(prev, spi, total_credits))
        .transpose()?;

    tracing::debug!(
        branch = %branch_code,
        semester,
        courses = lines.len(),
        %spi,
        "computed semester report"
    );

    Ok(SemesterReport {
        branch: branch_code,
        semester: semester.trim().to_string(),
        courses: lines,
        total_credits,
        spi,
        previous,
        cpi,
        ignored_grades,
    })
}
