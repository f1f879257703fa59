//! Handlers for the `/companies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use staffing_core::company::{Company, CompanyUpdate, CompanyWithEmployees};
use staffing_core::employee::Employee;
use staffing_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/companies
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<Company>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let company = state.companies.create(input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/v1/companies
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<Vec<Company>>> {
    let companies = match params.page() {
        Some(page) => state.companies.list_page(page).await?,
        None => state.companies.list().await?,
    };
    Ok(Json(companies))
}

/// GET /api/v1/companies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Company>> {
    let company = state.companies.find_by_id(id).await?;
    Ok(Json(company))
}

/// PUT /api/v1/companies/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CompanyUpdate>,
) -> AppResult<Json<Company>> {
    let company = state.companies.update(id, input).await?;
    Ok(Json(company))
}

/// DELETE /api/v1/companies/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.companies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/companies/{id}/employees
pub async fn list_employees(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.companies.employees_of(id).await?;
    Ok(Json(employees))
}

/// GET /api/v1/companies/{id}/overview
pub async fn overview(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<CompanyWithEmployees>> {
    let view = state.companies.find_with_employees(id).await?;
    Ok(Json(view))
}
