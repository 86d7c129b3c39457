use sqlx::PgPool;

use crate::database::models::{Employee, NewEmployee, NewSalary};

/// Data access for the `employees` table and its owned relations.
pub struct EmployeeRepo {
    pool: PgPool,
}

impl EmployeeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_emp_no(&self, emp_no: i32) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE emp_no = $1")
            .bind(emp_no)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert an employee together with its initial salary row.
    ///
    /// Both inserts run in one transaction; a failure on either side leaves
    /// neither row persisted.
    pub async fn create_with_salary(
        &self,
        employee: &NewEmployee,
        salary: &NewSalary,
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO employees (emp_no, firstname, lastname, gender, hiredate) \
             VALUES ($1, $2, $3, $4, $5::date)",
        )
        .bind(employee.emp_no)
        .bind(&employee.firstname)
        .bind(&employee.lastname)
        .bind(&employee.gender)
        .bind(&employee.hiredate)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO salaries (emp_no, salary, from_date, to_date) \
             VALUES ($1, $2, $3::date, $4::date)",
        )
        .bind(employee.emp_no)
        .bind(salary.salary)
        .bind(&salary.from_date)
        .bind(&salary.to_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await
    }

    /// Narrow update: `firstname` is the only column this operation persists.
    pub async fn update_firstname(&self, emp_no: i32, firstname: &str) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE employees SET firstname = $2, updated_at = now() WHERE emp_no = $1")
                .bind(emp_no)
                .bind(firstname)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Delete by key. Salary, title and department-link rows cascade at the
    /// store.
    pub async fn delete_by_emp_no(&self, emp_no: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE emp_no = $1")
            .bind(emp_no)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
