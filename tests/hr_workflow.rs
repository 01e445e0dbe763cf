//! End-to-end scenarios for the HR administration API, driven through the
//! public router the way a deployment would see it: departments and
//! employees are created over HTTP, leave is requested and resolved, and
//! the dashboard reflects the result.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Local};
use serde_json::{json, Value};
use tower::ServiceExt;

use hrms::http::api_router;
use hrms::store::InMemoryHrStore;

fn app() -> Router {
    api_router(Arc::new(InMemoryHrStore::new()))
}

async fn request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("route executes");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is json")
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri)
        .body(Body::empty())
        .expect("request builds")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn create_department(router: &Router, name: &str, abbreviation: &str) -> u64 {
    let (status, body) = request(
        router,
        post_json(
            "/departments/",
            json!({ "name": name, "abbreviation": abbreviation }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().expect("department id")
}

async fn create_employee(router: &Router, department: u64, first: &str, email: &str) -> u64 {
    let (status, body) = request(
        router,
        post_json(
            "/employees/",
            json!({
                "first_name": first,
                "last_name": "Reyes",
                "email": email,
                "gender": "other",
                "role": "Engineer",
                "department": department,
                "salary": 78000.0,
                "hire_date": "2024-05-01",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().expect("employee id")
}

#[tokio::test]
async fn leave_lifecycle_feeds_the_dashboard() {
    let router = app();
    let department = create_department(&router, "Engineering", "ENG").await;
    let employee = create_employee(&router, department, "Ada", "ada@example.com").await;

    let today = Local::now().date_naive();
    let (status, leave) = request(
        &router,
        post_json(
            "/leave-requests/",
            json!({
                "employee": employee,
                "leave_type": "annual",
                "start_date": (today - Duration::days(1)).to_string(),
                "end_date": (today + Duration::days(1)).to_string(),
                "reason": "family trip",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(leave["status"], "pending");
    let leave_id = leave["id"].as_u64().expect("leave id");

    let (status, stats) = request(&router, get("/dashboard/stats/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["pending_requests"], 1);
    assert_eq!(stats["employees_on_leave"], 0);

    let (status, approved) = request(
        &router,
        post_json(
            &format!("/leave-requests/{leave_id}/approve/"),
            json!({ "comments": "enjoy the break" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");
    assert_eq!(approved["manager_comments"], "enjoy the break");
    assert_eq!(approved["employee_name"], "Ada");

    let (_, stats) = request(&router, get("/dashboard/stats/")).await;
    assert_eq!(stats["pending_requests"], 0);
    assert_eq!(stats["employees_on_leave"], 1);
}

#[tokio::test]
async fn display_ids_follow_department_membership() {
    let router = app();
    let department = create_department(&router, "Engineering", "ENG").await;
    let first = create_employee(&router, department, "Ada", "ada@example.com").await;
    create_employee(&router, department, "Bea", "bea@example.com").await;
    let third = create_employee(&router, department, "Cal", "cal@example.com").await;

    let (_, body) = request(&router, get(&format!("/employees/{third}/"))).await;
    assert_eq!(body["employee_id"], "ENG003");

    let (status, _) = request(&router, delete(&format!("/employees/{first}/"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = request(&router, get(&format!("/employees/{third}/"))).await;
    assert_eq!(body["employee_id"], "ENG002");
}

#[tokio::test]
async fn recruiting_pipeline_round_trip() {
    let router = app();
    let department = create_department(&router, "Engineering", "ENG").await;

    let (status, posting) = request(
        &router,
        post_json(
            "/job-postings/",
            json!({
                "title": "Backend Engineer",
                "department": department,
                "description": "Build services",
                "requirements": "Rust",
                "salary_min": 70000.0,
                "salary_max": 95000.0,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let posting_id = posting["id"].as_u64().expect("posting id");

    let (status, application) = request(
        &router,
        post_json(
            "/job-applications/",
            json!({
                "job_posting": posting_id,
                "candidate_name": "Sam Okafor",
                "candidate_email": "sam@example.com",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(application["job_title"], "Backend Engineer");
    let application_id = application["id"].as_u64().expect("application id");

    let (status, shortlisted) = request(
        &router,
        Request::post(format!("/job-applications/{application_id}/shortlist/"))
            .body(Body::empty())
            .expect("request builds"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shortlisted["status"], "shortlisted");

    let (_, stats) = request(&router, get("/dashboard/stats/")).await;
    assert_eq!(stats["open_positions"], 1);
    assert_eq!(stats["pending_applications"], 0);
}

#[tokio::test]
async fn department_delete_cascades_over_http() {
    let router = app();
    let department = create_department(&router, "Engineering", "ENG").await;
    let employee = create_employee(&router, department, "Ada", "ada@example.com").await;

    let (status, leave) = request(
        &router,
        post_json(
            "/leave-requests/",
            json!({
                "employee": employee,
                "leave_type": "sick",
                "start_date": "2026-09-01",
                "end_date": "2026-09-02",
                "reason": "flu",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let leave_id = leave["id"].as_u64().expect("leave id");

    let (status, _) = request(&router, delete(&format!("/departments/{department}/"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for uri in [
        format!("/employees/{employee}/"),
        format!("/leave-requests/{leave_id}/"),
    ] {
        let (status, _) = request(&router, get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri} should be gone");
    }
}

#[tokio::test]
async fn transition_on_missing_record_is_not_found() {
    let router = app();
    let (status, _) = request(
        &router,
        Request::post("/leave-requests/99/approve/")
            .body(Body::empty())
            .expect("request builds"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
