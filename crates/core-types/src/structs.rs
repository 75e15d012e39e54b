use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the salary report: a department, the number of employees that
/// cleared the salary floor, and the average salary across them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DepartmentSummary {
    /// Display name of the department.
    pub dept_name: String,
    /// Number of employees counted into the average.
    pub employee_count: i64,
    /// Arithmetic mean of the counted employees' salaries.
    pub avg_salary: Decimal,
}
