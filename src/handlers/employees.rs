use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use super::EmpNoParam;
use crate::api::input::{as_int, as_text, only};
use crate::api::{Envelope, HandlerResult};
use crate::database::models::{NewEmployee, NewSalary};
use crate::database::repositories::{EmployeeRepo, SalaryRepo};
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{self, rules};

/// GET /employee/findall
pub async fn show_all(State(state): State<AppState>) -> HandlerResult {
    let repo = EmployeeRepo::new(state.pool.clone());
    if repo.count().await? == 0 {
        return Ok(Envelope::not_found());
    }
    let employees = repo.all().await?;
    Ok(Envelope::record(employees))
}

/// POST /employee/add
///
/// Creates an employee together with its initial salary row. The two inserts
/// share one transaction; a failure on either leaves neither row behind.
pub async fn store(State(state): State<AppState>, Json(body): Json<Value>) -> HandlerResult {
    let emp_input = only(&body, &["emp_no", "firstname", "lastname", "gender", "hiredate"]);
    let sal_input = only(&body, &["salary", "from_date", "to_date"]);

    let emp_validation = validation::validate(
        &emp_input,
        rules::ADD_NEW_EMPLOYEE,
        rules::ADD_EMPLOYEE_ERROR,
        &state.pool,
    )
    .await?;
    let sal_validation = validation::validate(
        &sal_input,
        rules::ADD_EMP_SALARY,
        rules::ADD_EMP_SALARY_ERROR,
        &state.pool,
    )
    .await?;
    if emp_validation.fails() {
        return Ok(Envelope::validation_failed(
            emp_validation.first_message(),
            "Employee registration fail",
        ));
    }
    if sal_validation.fails() {
        return Ok(Envelope::validation_failed(
            sal_validation.first_message(),
            "Employee registration fail",
        ));
    }

    let employee = NewEmployee {
        emp_no: require_int(&emp_input, "emp_no")?,
        firstname: require_text(&emp_input, "firstname")?,
        lastname: as_text(&emp_input, "lastname"),
        gender: require_text(&emp_input, "gender")?,
        hiredate: require_text(&emp_input, "hiredate")?,
    };
    let salary = NewSalary {
        salary: require_int(&sal_input, "salary")?,
        from_date: require_text(&sal_input, "from_date")?,
        to_date: require_text(&sal_input, "to_date")?,
    };

    let repo = EmployeeRepo::new(state.pool.clone());
    repo.create_with_salary(&employee, &salary).await?;

    Ok(Envelope::created("Employee save successful"))
}

/// GET /employee/find?emp_no=
///
/// The payload is a row list, as the original raw-table lookup returned.
pub async fn show_id(
    State(state): State<AppState>,
    Query(params): Query<EmpNoParam>,
) -> HandlerResult {
    let Some(emp_no) = params.emp_no() else {
        return Ok(Envelope::not_found());
    };
    let repo = EmployeeRepo::new(state.pool.clone());
    match repo.find_by_emp_no(emp_no).await? {
        Some(employee) => Ok(Envelope::record(vec![employee])),
        None => Ok(Envelope::not_found()),
    }
}

/// PUT /employee/update
///
/// Validates firstname, gender and hiredate but persists only `firstname`;
/// the narrow persisted-field set is this handler's contract.
pub async fn update(State(state): State<AppState>, Json(body): Json<Value>) -> HandlerResult {
    let input = only(&body, &["emp_no", "firstname", "lastname", "gender", "hiredate"]);

    let repo = EmployeeRepo::new(state.pool.clone());
    let existing = match as_int(&input, "emp_no") {
        Some(emp_no) => repo.find_by_emp_no(emp_no).await?,
        None => None,
    };
    let Some(existing) = existing else {
        return Ok(Envelope::update_target_missing());
    };

    let validation = validation::validate(
        &input,
        rules::UPDATE_EMPLOYEE,
        rules::ADD_EMPLOYEE_ERROR,
        &state.pool,
    )
    .await?;
    if validation.fails() {
        return Ok(Envelope::validation_failed(
            validation.first_message(),
            "Employee Update  fail",
        ));
    }

    let firstname = require_text(&input, "firstname")?;
    repo.update_firstname(existing.emp_no, &firstname).await?;

    Ok(Envelope::updated("user Update successfull"))
}

/// DELETE /employee/remove
pub async fn remove(State(state): State<AppState>, Json(body): Json<Value>) -> HandlerResult {
    let input = only(&body, &["emp_no"]);

    let repo = EmployeeRepo::new(state.pool.clone());
    let existing = match as_int(&input, "emp_no") {
        Some(emp_no) => repo.find_by_emp_no(emp_no).await?,
        None => None,
    };
    let Some(existing) = existing else {
        return Ok(Envelope::remove_target_missing());
    };

    repo.delete_by_emp_no(existing.emp_no).await?;
    Ok(Envelope::deleted())
}

/// GET /employee/salary?emp_no=
///
/// Output keys follow the original wire shape: `empSalary` holds the salary
/// row (or an empty object) and `empDetails` the employee.
pub async fn emp_salary(
    State(state): State<AppState>,
    Query(params): Query<EmpNoParam>,
) -> HandlerResult {
    let Some(emp_no) = params.emp_no() else {
        return Ok(Envelope::remove_target_missing());
    };

    let emp_repo = EmployeeRepo::new(state.pool.clone());
    let Some(employee) = emp_repo.find_by_emp_no(emp_no).await? else {
        return Ok(Envelope::remove_target_missing());
    };

    let sal_repo = SalaryRepo::new(state.pool.clone());
    let output = match sal_repo.find_by_emp_no(emp_no).await? {
        Some(salary) => {
            let details = sal_repo.employee_of(emp_no).await?;
            json!({ "empSalary": salary, "empDetails": details })
        }
        None => json!({ "empSalary": {}, "empDetails": employee }),
    };

    Ok(Envelope::record(output))
}

fn require_text(input: &serde_json::Map<String, Value>, field: &str) -> Result<String, ApiError> {
    as_text(input, field)
        .ok_or_else(|| ApiError::Internal(format!("{} missing after validation", field)))
}

fn require_int(input: &serde_json::Map<String, Value>, field: &str) -> Result<i32, ApiError> {
    as_int(input, field).ok_or_else(|| ApiError::Internal(format!("{} is not numeric", field)))
}
