use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use roster_domain::EmployeeId;
use tracing::{debug, info};

use crate::dto::{EmployeeRequest, EmployeeResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<(StatusCode, Json<EmployeeResponse>)> {
    let employee = state
        .employee_service
        .create_employee(payload.into())
        .await?;

    info!(employee_id = %employee.id(), "employee created");
    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EmployeeResponse>>> {
    let employees = state
        .employee_service
        .list_employees()
        .await?
        .into_iter()
        .map(EmployeeResponse::from)
        .collect();

    Ok(Json(employees))
}

pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .get_employee(EmployeeId::new(employee_id))
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn update_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .update_employee(EmployeeId::new(employee_id), payload.into())
        .await?;

    info!(employee_id = %employee.id(), "employee updated");
    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let removed = state
        .employee_service
        .delete_employee(EmployeeId::new(employee_id))
        .await?;

    if removed {
        info!(employee_id, "employee deleted");
    } else {
        debug!(employee_id, "delete of absent employee ignored");
    }

    Ok(StatusCode::OK)
}
