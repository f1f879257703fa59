pub mod company;
pub mod employee;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /companies                       list, create
/// /companies/{id}                  get, update, delete
/// /companies/{id}/employees        employees of company
/// /companies/{id}/overview         company with its employees
///
/// /employees                       list (filters + paging), create
/// /employees/{id}                  get, partial update, deactivate
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/companies", company::router())
        .nest("/employees", employee::router())
}
