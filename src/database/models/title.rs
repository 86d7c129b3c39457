use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A title held by an employee over a validity interval.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Title {
    pub emp_no: i32,
    pub title: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}
