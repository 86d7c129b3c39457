use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use super::EmpNoParam;
use crate::api::input::{as_int, only};
use crate::api::{Envelope, HandlerResult};
use crate::database::repositories::SalaryRepo;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{self, rules};

/// GET /salary/find?emp_no= - salary history for an employee.
pub async fn find(State(state): State<AppState>, Query(params): Query<EmpNoParam>) -> HandlerResult {
    let Some(emp_no) = params.emp_no() else {
        return Ok(Envelope::not_found());
    };
    let repo = SalaryRepo::new(state.pool.clone());
    let history = repo.history_for(emp_no).await?;
    if history.is_empty() {
        return Ok(Envelope::not_found());
    }
    Ok(Envelope::record(history))
}

/// PUT /salary/update
///
/// Validates salary and both dates but persists only `salary`; the narrow
/// persisted-field set is this handler's contract.
pub async fn update(State(state): State<AppState>, Json(body): Json<Value>) -> HandlerResult {
    let input = only(&body, &["emp_no", "salary", "from_date", "to_date"]);

    let repo = SalaryRepo::new(state.pool.clone());
    let existing = match as_int(&input, "emp_no") {
        Some(emp_no) => repo.find_by_emp_no(emp_no).await?,
        None => None,
    };
    let Some(existing) = existing else {
        return Ok(Envelope::not_found());
    };

    let validation = validation::validate(
        &input,
        rules::ADD_EMP_SALARY,
        rules::ADD_EMP_SALARY_ERROR,
        &state.pool,
    )
    .await?;
    if validation.fails() {
        return Ok(Envelope::validation_failed(
            validation.first_message(),
            "Employee registration fail",
        ));
    }

    let salary = as_int(&input, "salary")
        .ok_or_else(|| ApiError::Internal("salary is not numeric".to_string()))?;
    repo.update_salary(existing.emp_no, salary).await?;

    Ok(Envelope::updated("emp salary Update successfull"))
}
