use coursebook_core::branches::Branch;
use coursebook_core::catalog::schema::Course;
use coursebook_core::grading::report::SemesterReport;
use rust_decimal::Decimal;
use unicode_width::UnicodeWidthStr;

pub fn print_branches(branches: &[Branch]) {
    println!("  {:<6} PDF", "Code");
    println!("  {}", "-".repeat(16));
    for b in branches {
        println!("  {:<6} {}", b.code, b.pdf);
    }
}

pub fn print_courses(courses: &[Course]) {
    if courses.is_empty() {
        println!("  No courses found for the selected branch/semester.");
        return;
    }

    let code_width = courses.iter().map(|c| c.code.width()).max().unwrap_or(6).max(6);
    let name_width = courses.iter().map(|c| c.name.width()).max().unwrap_or(6).max(6);

    println!(
        "  {:<cw$}  {:<nw$}  Credits",
        "Code",
        "Course",
        cw = code_width,
        nw = name_width
    );
    println!("  {}", "-".repeat(code_width + name_width + 11));
    for c in courses {
        println!(
            "  {}  {}  {}",
            pad(&c.code, code_width),
            pad(&c.name, name_width),
            c.credits
        );
    }
}

pub fn print_report(report: &SemesterReport) {
    println!(
        "=== {} semester {} ===\n",
        report.branch, report.semester
    );

    if report.courses.is_empty() {
        println!("  No courses found for the selected branch/semester.\n");
    } else {
        let code_width = report
            .courses
            .iter()
            .map(|c| c.code.width())
            .max()
            .unwrap_or(6)
            .max(6);
        let name_width = report
            .courses
            .iter()
            .map(|c| c.name.width())
            .max()
            .unwrap_or(6)
            .max(6);

        println!(
            "  {:<cw$}  {:<nw$}  {:>7}  Grade",
            "Code",
            "Course",
            "Credits",
            cw = code_width,
            nw = name_width
        );
        println!("  {}", "-".repeat(code_width + name_width + 20));
        for line in &report.courses {
            let grade = line.grade.map(|g| g.as_str()).unwrap_or("-");
            println!(
                "  {}  {}  {:>7}  {}",
                pad(&line.code, code_width),
                pad(&line.name, name_width),
                line.credits.to_string(),
                grade
            );
        }
        println!();
    }

    println!("  Total credits: {}", report.total_credits);
    println!("  SPI: {}", two_places(report.spi));

    if let (Some(prev), Some(cpi)) = (report.previous, report.cpi) {
        println!(
            "  CPI: {}  (previous {} over {} credits)",
            two_places(cpi),
            two_places(prev.spi),
            prev.credits
        );
    }

    let ungraded = report.courses.len() - report.graded_count();
    if ungraded > 0 {
        println!("\n  {} course(s) without a grade count as 0 points.", ungraded);
    }

    if !report.ignored_grades.is_empty() {
        println!(
            "\n  Ignored grades (not offered this semester): {}",
            report.ignored_grades.join(", ")
        );
    }
}

/// Left-align `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn two_places(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_two_places() {
        assert_eq!(two_places(dec!(0)), "0.00");
        assert_eq!(two_places(dec!(8.857142)), "8.86");
        assert_eq!(two_places(dec!(10)), "10.00");
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("Maths", 8), "Maths   ");
        assert_eq!(pad("Mécanique", 10).width(), 10);
        assert_eq!(pad("数学", 6), "数学  ");
        assert_eq!(pad("Too long", 3), "Too long");
    }
}
