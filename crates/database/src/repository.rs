use crate::error::DbError;
use core_types::DepartmentSummary;
use sqlx::mysql::MySqlPool;

/// The statement behind the salary report. Every parameter is a literal in
/// the query text: the 55000 salary floor, the 70000 average cutoff, and the
/// two-row cap are fixed properties of this report, not caller inputs.
const TOP_DEPARTMENTS_SQL: &str = r#"
SELECT d.dept_name, COUNT(e.emp_id) AS employee_count, AVG(e.salary) AS avg_salary
FROM employees e
JOIN departments d ON e.dept_id = d.dept_id
WHERE e.salary > 55000
GROUP BY d.dept_name
HAVING AVG(e.salary) > 70000
ORDER BY avg_salary DESC
LIMIT 2
"#;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: MySqlPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetches the departments whose average salary, computed only over
    /// employees earning more than the salary floor, exceeds the cutoff.
    /// Rows arrive ordered by that average, highest first, at most two.
    pub async fn top_departments_by_avg_salary(
        &self,
    ) -> Result<Vec<DepartmentSummary>, DbError> {
        let summaries = sqlx::query_as::<_, DepartmentSummary>(TOP_DEPARTMENTS_SQL)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = summaries.len(), "Fetched department summaries.");
        Ok(summaries)
    }
}
