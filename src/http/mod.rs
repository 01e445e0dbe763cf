//! Request-dispatch layer: one module per resource, merged into a single
//! router over a shared store handle.

pub(crate) mod applications;
pub(crate) mod departments;
pub(crate) mod employees;
pub(crate) mod leave;
pub(crate) mod postings;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use serde_json::json;

use crate::error::AppError;
use crate::store::{DashboardStats, HrStore};

/// Router exposing the full REST surface for a given store.
pub fn api_router<S>(store: Arc<S>) -> Router
where
    S: HrStore + 'static,
{
    Router::new()
        .route("/ping/", get(ping))
        .route("/dashboard/stats/", get(dashboard_stats::<S>))
        .merge(departments::router())
        .merge(employees::router())
        .merge(leave::router())
        .merge(postings::router())
        .merge(applications::router())
        .with_state(store)
}

/// `Json` wrapper that reports undecodable bodies as field-style 400s
/// instead of axum's default rejection.
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

pub(crate) async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "message": "API is working!", "status": "success" }))
}

pub(crate) async fn dashboard_stats<S: HrStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<DashboardStats>, AppError> {
    // "Today" is the server's local calendar date at request time.
    let today = Local::now().date_naive();
    Ok(Json(store.dashboard_stats(today)?))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, Response};
    use axum::Router;
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::{
        Department, DepartmentDraft, EmployeeDraft, Gender, JobApplicationDraft, JobPostingDraft,
        LeaveDraft, LeaveType,
    };
    use crate::store::{
        EmployeeRecord, HrStore, InMemoryHrStore, JobApplicationRecord, JobPostingRecord,
        LeaveRecord,
    };

    pub(crate) fn test_app() -> (Router, Arc<InMemoryHrStore>) {
        let store = Arc::new(InMemoryHrStore::new());
        (super::api_router(store.clone()), store)
    }

    pub(crate) async fn send(router: &Router, request: Request<Body>) -> Response<axum::body::Body> {
        router.clone().oneshot(request).await.expect("route executes")
    }

    pub(crate) async fn read_json(response: Response<axum::body::Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    pub(crate) fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request builds")
    }

    pub(crate) fn delete(uri: &str) -> Request<Body> {
        Request::delete(uri).body(Body::empty()).expect("request builds")
    }

    pub(crate) fn post_empty(uri: &str) -> Request<Body> {
        Request::post(uri).body(Body::empty()).expect("request builds")
    }

    fn with_json(builder: axum::http::request::Builder, body: &Value) -> Request<Body> {
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    pub(crate) fn post_json(uri: &str, body: &Value) -> Request<Body> {
        with_json(Request::post(uri), body)
    }

    pub(crate) fn post_raw(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    pub(crate) fn put_json(uri: &str, body: &Value) -> Request<Body> {
        with_json(Request::put(uri), body)
    }

    pub(crate) fn patch_json(uri: &str, body: &Value) -> Request<Body> {
        with_json(Request::patch(uri), body)
    }

    pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    pub(crate) fn seed_department(
        store: &InMemoryHrStore,
        name: &str,
        abbreviation: &str,
    ) -> Department {
        store
            .create_department(DepartmentDraft {
                name: name.to_string(),
                abbreviation: abbreviation.to_string(),
            })
            .expect("department creates")
    }

    pub(crate) fn seed_employee(
        store: &InMemoryHrStore,
        department_id: u64,
        first_name: &str,
        email: &str,
    ) -> EmployeeRecord {
        store
            .create_employee(EmployeeDraft {
                first_name: first_name.to_string(),
                last_name: "Reyes".to_string(),
                email: email.to_string(),
                phone: String::new(),
                gender: Gender::Other,
                date_of_birth: None,
                address: String::new(),
                role: "Engineer".to_string(),
                employment_type: Default::default(),
                department_id,
                salary: 78_000.0,
                hire_date: date(2024, 5, 1),
                status: Default::default(),
            })
            .expect("employee creates")
    }

    pub(crate) fn seed_leave(
        store: &InMemoryHrStore,
        employee_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> LeaveRecord {
        store
            .create_leave_request(LeaveDraft {
                employee_id,
                leave_type: LeaveType::Annual,
                start_date: start,
                end_date: end,
                reason: "rest".to_string(),
                status: Default::default(),
                manager_comments: String::new(),
            })
            .expect("leave request creates")
    }

    pub(crate) fn seed_posting(
        store: &InMemoryHrStore,
        department_id: u64,
        title: &str,
        is_active: bool,
    ) -> JobPostingRecord {
        store
            .create_job_posting(JobPostingDraft {
                title: title.to_string(),
                department_id,
                description: "Build and run HR services".to_string(),
                requirements: "Rust, HTTP".to_string(),
                salary_min: None,
                salary_max: None,
                is_active,
            })
            .expect("posting creates")
    }

    pub(crate) fn seed_application(
        store: &InMemoryHrStore,
        job_posting_id: u64,
    ) -> JobApplicationRecord {
        store
            .create_job_application(JobApplicationDraft {
                job_posting_id,
                candidate_name: "Sam Okafor".to_string(),
                candidate_email: "sam@example.com".to_string(),
                candidate_phone: String::new(),
                resume_url: String::new(),
                cover_letter: String::new(),
                status: Default::default(),
                rating: 0,
            })
            .expect("application creates")
    }
}
