use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::ApiJson;
use crate::domain::{LeaveDraft, LeavePatch, LeaveStatus};
use crate::error::AppError;
use crate::store::{HrStore, LeaveRecord};

pub(crate) fn router<S: HrStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/leave-requests/", get(list::<S>).post(create::<S>))
        .route(
            "/leave-requests/:id/",
            get(retrieve::<S>)
                .put(update::<S>)
                .patch(partial_update::<S>)
                .delete(destroy::<S>),
        )
        .route("/leave-requests/:id/approve/", post(approve::<S>))
        .route("/leave-requests/:id/reject/", post(reject::<S>))
}

async fn list<S: HrStore>(State(store): State<Arc<S>>) -> Result<Json<Vec<LeaveRecord>>, AppError> {
    Ok(Json(store.list_leave_requests()?))
}

async fn create<S: HrStore>(
    State(store): State<Arc<S>>,
    ApiJson(draft): ApiJson<LeaveDraft>,
) -> Result<(StatusCode, Json<LeaveRecord>), AppError> {
    Ok((StatusCode::CREATED, Json(store.create_leave_request(draft)?)))
}

async fn retrieve<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<LeaveRecord>, AppError> {
    Ok(Json(store.get_leave_request(id)?))
}

async fn update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(draft): ApiJson<LeaveDraft>,
) -> Result<Json<LeaveRecord>, AppError> {
    Ok(Json(store.replace_leave_request(id, draft)?))
}

async fn partial_update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(patch): ApiJson<LeavePatch>,
) -> Result<Json<LeaveRecord>, AppError> {
    Ok(Json(store.patch_leave_request(id, patch)?))
}

async fn destroy<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    store.delete_leave_request(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Manager decision payload; the whole body is optional on the wire.
#[derive(Debug, Default, Deserialize)]
struct ResolutionBody {
    #[serde(default)]
    comments: String,
}

impl ResolutionBody {
    /// An absent body means "no comments"; a present body must decode.
    fn from_bytes(bytes: &Bytes) -> Result<Self, AppError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
            .map_err(|err| AppError::BadRequest(format!("invalid resolution body: {err}")))
    }
}

async fn approve<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    bytes: Bytes,
) -> Result<Json<LeaveRecord>, AppError> {
    let body = ResolutionBody::from_bytes(&bytes)?;
    Ok(Json(store.resolve_leave_request(
        id,
        LeaveStatus::Approved,
        body.comments,
    )?))
}

async fn reject<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    bytes: Bytes,
) -> Result<Json<LeaveRecord>, AppError> {
    let body = ResolutionBody::from_bytes(&bytes)?;
    Ok(Json(store.resolve_leave_request(
        id,
        LeaveStatus::Rejected,
        body.comments,
    )?))
}
