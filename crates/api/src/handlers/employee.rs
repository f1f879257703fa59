//! Handlers for the `/employees` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use staffing_core::employee::{Employee, EmployeeFilter, EmployeeUpdate};
use staffing_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::EmployeeListParams;
use crate::state::AppState;

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<Employee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state.employees.create(input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/v1/employees
///
/// Without filters, `limit`/`offset` page through the store directly.
/// With filters, the filtered list is windowed afterwards.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<EmployeeListParams>,
) -> AppResult<Json<Vec<Employee>>> {
    let filter = params.filter();
    let page = params.pagination().page();

    let employees = match page {
        Some(page) if filter == EmployeeFilter::default() => {
            state.employees.list_page(page).await?
        }
        Some(page) => page.slice(state.employees.list(&filter).await?),
        None => state.employees.list(&filter).await?,
    };
    Ok(Json(employees))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.find_by_id(id).await?;
    Ok(Json(employee))
}

/// PUT /api/v1/employees/{id}
///
/// Partial update: omitted or `null` fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.update(id, input).await?;
    Ok(Json(employee))
}

/// DELETE /api/v1/employees/{id}
///
/// Deactivates rather than removes the record.
pub async fn deactivate(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.employees.deactivate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
