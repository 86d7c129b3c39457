use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use super::EmpNoParam;
use crate::api::input::{as_int, as_text, only};
use crate::api::{Envelope, HandlerResult};
use crate::database::repositories::{EmployeeRepo, TitleRepo};
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{self, rules};

/// GET /title/find?emp_no= - first matching title row, with the employee.
pub async fn show(State(state): State<AppState>, Query(params): Query<EmpNoParam>) -> HandlerResult {
    let Some(emp_no) = params.emp_no() else {
        return Ok(Envelope::not_found());
    };

    let title_repo = TitleRepo::new(state.pool.clone());
    let Some(title) = title_repo.find_by_emp_no(emp_no).await? else {
        return Ok(Envelope::not_found());
    };

    let emp_repo = EmployeeRepo::new(state.pool.clone());
    let employee = emp_repo.find_by_emp_no(emp_no).await?;

    Ok(Envelope::record(json!({
        "emp_titles": title,
        "emp_details": employee,
    })))
}

/// PUT /title/update
///
/// Validates title, emp_no and both dates but persists only `title`; the
/// narrow persisted-field set is this handler's contract.
pub async fn update(State(state): State<AppState>, Json(body): Json<Value>) -> HandlerResult {
    let input = only(&body, &["emp_no", "title", "from_date", "to_date"]);

    let repo = TitleRepo::new(state.pool.clone());
    let existing = match as_int(&input, "emp_no") {
        Some(emp_no) => repo.find_by_emp_no(emp_no).await?,
        None => None,
    };
    let Some(existing) = existing else {
        return Ok(Envelope::not_found());
    };

    let validation = validation::validate(
        &input,
        rules::TITLE_UPDATE,
        rules::TITLE_UPDATE_MESSAGE,
        &state.pool,
    )
    .await?;
    if validation.fails() {
        return Ok(Envelope::validation_failed(
            validation.first_message(),
            "Employee registration fail",
        ));
    }

    let title = as_text(&input, "title")
        .ok_or_else(|| ApiError::Internal("title missing after validation".to_string()))?;
    repo.update_title(existing.emp_no, &title).await?;

    Ok(Envelope::updated("emp salary Update successfull"))
}
