use crate::error::ReportError;
use core_types::DepartmentSummary;
use database::DbRepository;
use rust_decimal::{Decimal, RoundingStrategy};

pub mod error;

/// The fixed first line of the report. It prints even when no department
/// qualifies.
pub const REPORT_HEADER: &str = "Top departments by average salary (filtered):";

/// Rule printed under the header; matches the header width.
const REPORT_RULE: &str = "---------------------------------------------";

/// A fully materialized salary report, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryReport {
    rows: Vec<DepartmentSummary>,
}

impl SalaryReport {
    pub fn new(rows: Vec<DepartmentSummary>) -> Self {
        Self { rows }
    }

    /// The summaries backing the report, in database order.
    pub fn rows(&self) -> &[DepartmentSummary] {
        &self.rows
    }

    /// Renders the report in its fixed plain-text format. Row order is
    /// preserved exactly as the database returned it.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(REPORT_HEADER);
        out.push('\n');
        out.push_str(REPORT_RULE);
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format!(
                "Department: {} | Employees: {} | Avg Salary: {}\n",
                row.dept_name,
                row.employee_count,
                format_usd(row.avg_salary)
            ));
        }

        out
    }
}

/// Fetches the department summaries and wraps them for rendering.
///
/// An empty result set is a valid report, not an error: the header still
/// prints with no data rows underneath.
pub async fn run_report(db_repo: &DbRepository) -> Result<SalaryReport, ReportError> {
    let rows = db_repo.top_departments_by_avg_salary().await?;
    if rows.is_empty() {
        tracing::info!("No department cleared the average salary cutoff.");
    }

    Ok(SalaryReport::new(rows))
}

/// Formats a decimal amount as US dollars: leading `$`, thousands
/// separators, exactly two decimal digits.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let magnitude = rounded.abs();

    // Already rounded to two places, so the precision here only pads zeros.
    let text = format!("{:.2}", magnitude);
    let (whole, cents) = match text.split_once('.') {
        Some((whole, cents)) => (whole, cents),
        None => (text.as_str(), "00"),
    };

    let digits = whole.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() {
        format!("-${}.{}", grouped, cents)
    } else {
        format!("${}.{}", grouped, cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary(name: &str, count: i64, avg: Decimal) -> DepartmentSummary {
        DepartmentSummary {
            dept_name: name.to_string(),
            employee_count: count,
            avg_salary: avg,
        }
    }

    #[test]
    fn formats_with_thousands_separators_and_two_decimals() {
        assert_eq!(format_usd(dec!(72500)), "$72,500.00");
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn formats_small_amounts_without_separators() {
        assert_eq!(format_usd(dec!(999.9)), "$999.90");
        assert_eq!(format_usd(dec!(0)), "$0.00");
    }

    #[test]
    fn groups_at_every_third_digit() {
        assert_eq!(format_usd(dec!(1000)), "$1,000.00");
        assert_eq!(format_usd(dec!(100000)), "$100,000.00");
    }

    #[test]
    fn rounds_midpoints_away_from_zero() {
        assert_eq!(format_usd(dec!(70000.005)), "$70,000.01");
        assert_eq!(format_usd(dec!(88421.734)), "$88,421.73");
    }

    #[test]
    fn negative_amounts_carry_the_sign_before_the_dollar() {
        assert_eq!(format_usd(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn renders_two_rows_in_database_order() {
        let report = SalaryReport::new(vec![
            summary("Engineering", 12, dec!(88421.73)),
            summary("Sales", 7, dec!(72500)),
        ]);

        assert_eq!(
            report.render(),
            "Top departments by average salary (filtered):\n\
             ---------------------------------------------\n\
             Department: Engineering | Employees: 12 | Avg Salary: $88,421.73\n\
             Department: Sales | Employees: 7 | Avg Salary: $72,500.00\n"
        );
    }

    #[test]
    fn renders_a_single_row() {
        let report = SalaryReport::new(vec![summary("Legal", 3, dec!(71000))]);

        assert_eq!(
            report.render(),
            "Top departments by average salary (filtered):\n\
             ---------------------------------------------\n\
             Department: Legal | Employees: 3 | Avg Salary: $71,000.00\n"
        );
    }

    #[test]
    fn renders_header_only_when_no_department_qualifies() {
        let report = SalaryReport::new(Vec::new());

        assert_eq!(
            report.render(),
            "Top departments by average salary (filtered):\n\
             ---------------------------------------------\n"
        );
    }
}
