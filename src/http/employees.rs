use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use super::ApiJson;
use crate::domain::{EmployeeDraft, EmployeePatch};
use crate::error::AppError;
use crate::store::{EmployeeFilter, EmployeeRecord, HrStore};

pub(crate) fn router<S: HrStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/employees/", get(list::<S>).post(create::<S>))
        .route(
            "/employees/:id/",
            get(retrieve::<S>)
                .put(update::<S>)
                .patch(partial_update::<S>)
                .delete(destroy::<S>),
        )
}

async fn list<S: HrStore>(
    State(store): State<Arc<S>>,
    Query(filter): Query<EmployeeFilter>,
) -> Result<Json<Vec<EmployeeRecord>>, AppError> {
    Ok(Json(store.list_employees(&filter)?))
}

async fn create<S: HrStore>(
    State(store): State<Arc<S>>,
    ApiJson(draft): ApiJson<EmployeeDraft>,
) -> Result<(StatusCode, Json<EmployeeRecord>), AppError> {
    Ok((StatusCode::CREATED, Json(store.create_employee(draft)?)))
}

async fn retrieve<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<EmployeeRecord>, AppError> {
    Ok(Json(store.get_employee(id)?))
}

async fn update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(draft): ApiJson<EmployeeDraft>,
) -> Result<Json<EmployeeRecord>, AppError> {
    Ok(Json(store.replace_employee(id, draft)?))
}

async fn partial_update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(patch): ApiJson<EmployeePatch>,
) -> Result<Json<EmployeeRecord>, AppError> {
    Ok(Json(store.patch_employee(id, patch)?))
}

async fn destroy<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    store.delete_employee(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn draft(department_id: u64, first: &str, email: &str) -> serde_json::Value {
        json!({
            "first_name": first,
            "last_name": "Reyes",
            "email": email,
            "gender": "other",
            "role": "Engineer",
            "department": department_id,
            "salary": 78000.0,
            "hire_date": "2024-05-01",
        })
    }

    #[tokio::test]
    async fn create_returns_computed_display_fields() {
        let (router, store) = test_app();
        let engineering = seed_department(&store, "Engineering", "ENG");

        let response = send(
            &router,
            post_json(
                "/employees/",
                &draft(engineering.id, "Ada", "ada@example.com"),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json(response).await;
        assert_eq!(created["employee_id"], "ENG001");
        assert_eq!(created["full_name"], "Ada Reyes");
        assert_eq!(created["department_name"], "Engineering");
        assert_eq!(created["employment_type"], "full-time");
        assert_eq!(created["status"], "active");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_with_field_message() {
        let (router, store) = test_app();
        let engineering = seed_department(&store, "Engineering", "ENG");
        seed_employee(&store, engineering.id, "Ada", "ada@example.com");

        let response = send(
            &router,
            post_json(
                "/employees/",
                &draft(engineering.id, "Bea", "ada@example.com"),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["errors"]["email"][0]
            .as_str()
            .expect("message present")
            .contains("already exists"));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let (router, store) = test_app();
        let engineering = seed_department(&store, "Engineering", "ENG");
        let response = send(
            &router,
            post_json("/employees/", &draft(engineering.id, "Ada", "nope")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_department_is_a_validation_error() {
        let (router, _) = test_app();
        let response = send(
            &router,
            post_json("/employees/", &draft(42, "Ada", "ada@example.com")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["errors"]["department"].is_array());
    }

    #[tokio::test]
    async fn list_applies_department_and_status_filters() {
        let (router, store) = test_app();
        let engineering = seed_department(&store, "Engineering", "ENG");
        let people = seed_department(&store, "People Operations", "POP");
        seed_employee(&store, engineering.id, "Ada", "ada@example.com");
        seed_employee(&store, people.id, "Cal", "cal@example.com");

        let response = send(&router, get("/employees/?department=engineer")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body.as_array().expect("array").len(), 1);
        assert_eq!(body[0]["first_name"], "Ada");

        let response = send(&router, get("/employees/?department=people&status=terminated")).await;
        let body = read_json(response).await;
        assert!(body.as_array().expect("array").is_empty());
    }

    #[tokio::test]
    async fn display_id_shifts_after_an_earlier_colleague_leaves() {
        let (router, store) = test_app();
        let engineering = seed_department(&store, "Engineering", "ENG");
        let first = seed_employee(&store, engineering.id, "Ada", "ada@example.com");
        seed_employee(&store, engineering.id, "Bea", "bea@example.com");
        let third = seed_employee(&store, engineering.id, "Cal", "cal@example.com");

        let response = send(&router, get(&format!("/employees/{}/", third.employee.id))).await;
        let body = read_json(response).await;
        assert_eq!(body["employee_id"], "ENG003");

        let response = send(&router, delete(&format!("/employees/{}/", first.employee.id))).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&router, get(&format!("/employees/{}/", third.employee.id))).await;
        let body = read_json(response).await;
        assert_eq!(body["employee_id"], "ENG002");
    }

    #[tokio::test]
    async fn patch_changes_only_named_fields() {
        let (router, store) = test_app();
        let engineering = seed_department(&store, "Engineering", "ENG");
        let employee = seed_employee(&store, engineering.id, "Ada", "ada@example.com");

        let response = send(
            &router,
            patch_json(
                &format!("/employees/{}/", employee.employee.id),
                &json!({ "status": "terminated" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "terminated");
        assert_eq!(body["first_name"], "Ada");
        assert_eq!(body["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn update_on_unknown_id_is_not_found() {
        let (router, store) = test_app();
        let engineering = seed_department(&store, "Engineering", "ENG");
        let response = send(
            &router,
            put_json(
                "/employees/99/",
                &draft(engineering.id, "Ada", "ada@example.com"),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
