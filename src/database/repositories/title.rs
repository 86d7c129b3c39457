use sqlx::PgPool;

use crate::database::models::Title;

/// Data access for the `emp_titles` table.
pub struct TitleRepo {
    pool: PgPool,
}

impl TitleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_emp_no(&self, emp_no: i32) -> Result<Option<Title>, sqlx::Error> {
        sqlx::query_as::<_, Title>("SELECT * FROM emp_titles WHERE emp_no = $1 LIMIT 1")
            .bind(emp_no)
            .fetch_optional(&self.pool)
            .await
    }

    /// Narrow update: `title` is the only column this operation persists.
    pub async fn update_title(&self, emp_no: i32, title: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE emp_titles SET title = $2 WHERE emp_no = $1")
            .bind(emp_no)
            .bind(title)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
