use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A salary validity interval. No automatic timestamps on this table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Salary {
    pub emp_no: i32,
    pub salary: i32,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewSalary {
    pub salary: i32,
    pub from_date: String,
    pub to_date: String,
}
