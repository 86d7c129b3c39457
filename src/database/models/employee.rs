use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub emp_no: i32,
    pub firstname: String,
    pub lastname: Option<String>,
    /// Stored as `m` or `f`, enforced by a check constraint.
    pub gender: String,
    pub hiredate: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated attributes for an employee insert. Dates stay textual; the
/// insert casts them, relying on the `date_format` rule having already run.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub emp_no: i32,
    pub firstname: String,
    pub lastname: Option<String>,
    pub gender: String,
    pub hiredate: String,
}
