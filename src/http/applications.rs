use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use super::ApiJson;
use crate::domain::{ApplicationStatus, JobApplicationDraft, JobApplicationPatch};
use crate::error::AppError;
use crate::store::{HrStore, JobApplicationRecord};

pub(crate) fn router<S: HrStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/job-applications/", get(list::<S>).post(create::<S>))
        .route(
            "/job-applications/:id/",
            get(retrieve::<S>)
                .put(update::<S>)
                .patch(partial_update::<S>)
                .delete(destroy::<S>),
        )
        .route("/job-applications/:id/shortlist/", post(shortlist::<S>))
        .route("/job-applications/:id/reject/", post(reject::<S>))
}

async fn list<S: HrStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<JobApplicationRecord>>, AppError> {
    Ok(Json(store.list_job_applications()?))
}

async fn create<S: HrStore>(
    State(store): State<Arc<S>>,
    ApiJson(draft): ApiJson<JobApplicationDraft>,
) -> Result<(StatusCode, Json<JobApplicationRecord>), AppError> {
    Ok((
        StatusCode::CREATED,
        Json(store.create_job_application(draft)?),
    ))
}

async fn retrieve<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<JobApplicationRecord>, AppError> {
    Ok(Json(store.get_job_application(id)?))
}

async fn update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(draft): ApiJson<JobApplicationDraft>,
) -> Result<Json<JobApplicationRecord>, AppError> {
    Ok(Json(store.replace_job_application(id, draft)?))
}

async fn partial_update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(patch): ApiJson<JobApplicationPatch>,
) -> Result<Json<JobApplicationRecord>, AppError> {
    Ok(Json(store.patch_job_application(id, patch)?))
}

async fn destroy<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    store.delete_job_application(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn shortlist<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<JobApplicationRecord>, AppError> {
    Ok(Json(store.set_application_status(
        id,
        ApplicationStatus::Shortlisted,
    )?))
}

async fn reject<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<JobApplicationRecord>, AppError> {
    Ok(Json(store.set_application_status(
        id,
        ApplicationStatus::Rejected,
    )?))
}
