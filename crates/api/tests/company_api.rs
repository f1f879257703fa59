//! HTTP-level integration tests for the `/companies` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. Each test gets its own in-memory store.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use staffing_api::state::AppState;

async fn create_company(state: &AppState, name: &str) -> i64 {
    let app = common::build_test_app(state.clone());
    let response = post_json(app, "/api/v1/companies", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Company CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_company_returns_201() {
    let app = common::build_test_app(common::test_state());
    let response = post_json(app, "/api/v1/companies", json!({ "name": "Fully Booked" })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Fully Booked");
    assert!(json["id"].is_number());
}

#[tokio::test]
async fn test_create_company_with_blank_name_returns_400() {
    let app = common::build_test_app(common::test_state());
    let response = post_json(app, "/api/v1/companies", json!({ "name": " " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_company_by_id() {
    let state = common::test_state();
    let id = create_company(&state, "Get Me").await;

    let app = common::build_test_app(state);
    let response = get(app, &format!("/api/v1/companies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Get Me");
}

#[tokio::test]
async fn test_get_nonexistent_company_returns_404() {
    let app = common::build_test_app(common::test_state());
    let response = get(app, "/api/v1/companies/99").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Company id not found");
}

#[tokio::test]
async fn test_update_company() {
    let state = common::test_state();
    let id = create_company(&state, "Original").await;

    let app = common::build_test_app(state);
    let response = put_json(
        app,
        &format!("/api/v1/companies/{id}"),
        json!({ "name": "Updated" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Updated");
    assert_eq!(json["id"], id);
}

#[tokio::test]
async fn test_delete_company_returns_204() {
    let state = common::test_state();
    let id = create_company(&state, "Delete Me").await;

    let app = common::build_test_app(state.clone());
    let response = delete(app, &format!("/api/v1/companies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(state);
    let response = get(app, &format!("/api/v1/companies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_companies_with_paging() {
    let state = common::test_state();
    for name in ["C1", "C2", "C3"] {
        create_company(&state, name).await;
    }

    let app = common::build_test_app(state.clone());
    let all = body_json(get(app, "/api/v1/companies").await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let app = common::build_test_app(state);
    let page = body_json(get(app, "/api/v1/companies?limit=2&offset=1").await).await;
    let names: Vec<_> = page
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["C2", "C3"]);
}

// ---------------------------------------------------------------------------
// Company employees
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_company_employees_and_overview() {
    let state = common::test_state();
    let company_id = create_company(&state, "Staffed").await;
    let other_id = create_company(&state, "Other").await;

    for (name, company) in [("Kate", company_id), ("Tom", other_id), ("Ann", company_id)] {
        let app = common::build_test_app(state.clone());
        let response = post_json(
            app,
            "/api/v1/employees",
            json!({
                "name": name,
                "age": 30,
                "gender": "Female",
                "salary": 5000,
                "company_id": company,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(state.clone());
    let response = get(app, &format!("/api/v1/companies/{company_id}/employees")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let employees = body_json(response).await;
    let names: Vec<_> = employees
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Kate", "Ann"]);

    let app = common::build_test_app(state);
    let overview = body_json(get(app, &format!("/api/v1/companies/{company_id}/overview")).await).await;
    assert_eq!(overview["name"], "Staffed");
    assert_eq!(overview["employees"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_employees_of_unknown_company_returns_404() {
    let app = common::build_test_app(common::test_state());
    let response = get(app, "/api/v1/companies/7/employees").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Company id not found");
}
