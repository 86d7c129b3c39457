use sqlx::PgPool;

use crate::database::models::{Employee, Salary};

/// Data access for the `salaries` table.
pub struct SalaryRepo {
    pool: PgPool,
}

impl SalaryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_emp_no(&self, emp_no: i32) -> Result<Option<Salary>, sqlx::Error> {
        sqlx::query_as::<_, Salary>("SELECT * FROM salaries WHERE emp_no = $1 LIMIT 1")
            .bind(emp_no)
            .fetch_optional(&self.pool)
            .await
    }

    /// All salary rows for an employee, oldest interval first.
    pub async fn history_for(&self, emp_no: i32) -> Result<Vec<Salary>, sqlx::Error> {
        sqlx::query_as::<_, Salary>(
            "SELECT * FROM salaries WHERE emp_no = $1 ORDER BY from_date",
        )
        .bind(emp_no)
        .fetch_all(&self.pool)
        .await
    }

    /// `belongsTo` accessor: the employee a salary row points at.
    pub async fn employee_of(&self, emp_no: i32) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE emp_no = $1")
            .bind(emp_no)
            .fetch_optional(&self.pool)
            .await
    }

    /// Narrow update: `salary` is the only column this operation persists.
    pub async fn update_salary(&self, emp_no: i32, salary: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE salaries SET salary = $2 WHERE emp_no = $1")
            .bind(emp_no)
            .bind(salary)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
