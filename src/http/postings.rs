use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use super::ApiJson;
use crate::domain::{JobPostingDraft, JobPostingPatch};
use crate::error::AppError;
use crate::store::{HrStore, JobPostingRecord};

pub(crate) fn router<S: HrStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/job-postings/", get(list::<S>).post(create::<S>))
        .route(
            "/job-postings/:id/",
            get(retrieve::<S>)
                .put(update::<S>)
                .patch(partial_update::<S>)
                .delete(destroy::<S>),
        )
}

/// Active postings only; closed ones stay reachable by id.
async fn list<S: HrStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<JobPostingRecord>>, AppError> {
    Ok(Json(store.list_job_postings()?))
}

async fn create<S: HrStore>(
    State(store): State<Arc<S>>,
    ApiJson(draft): ApiJson<JobPostingDraft>,
) -> Result<(StatusCode, Json<JobPostingRecord>), AppError> {
    Ok((StatusCode::CREATED, Json(store.create_job_posting(draft)?)))
}

async fn retrieve<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<JobPostingRecord>, AppError> {
    Ok(Json(store.get_job_posting(id)?))
}

async fn update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(draft): ApiJson<JobPostingDraft>,
) -> Result<Json<JobPostingRecord>, AppError> {
    Ok(Json(store.replace_job_posting(id, draft)?))
}

async fn partial_update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(patch): ApiJson<JobPostingPatch>,
) -> Result<Json<JobPostingRecord>, AppError> {
    Ok(Json(store.patch_job_posting(id, patch)?))
}

async fn destroy<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    store.delete_job_posting(id)?;
    Ok(StatusCode::NO_CONTENT)
}
