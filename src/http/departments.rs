use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use super::ApiJson;
use crate::domain::{Department, DepartmentDraft, DepartmentPatch};
use crate::error::AppError;
use crate::store::HrStore;

pub(crate) fn router<S: HrStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/departments/", get(list::<S>).post(create::<S>))
        .route(
            "/departments/:id/",
            get(retrieve::<S>)
                .put(update::<S>)
                .patch(partial_update::<S>)
                .delete(destroy::<S>),
        )
}

async fn list<S: HrStore>(State(store): State<Arc<S>>) -> Result<Json<Vec<Department>>, AppError> {
    Ok(Json(store.list_departments()?))
}

async fn create<S: HrStore>(
    State(store): State<Arc<S>>,
    ApiJson(draft): ApiJson<DepartmentDraft>,
) -> Result<(StatusCode, Json<Department>), AppError> {
    Ok((StatusCode::CREATED, Json(store.create_department(draft)?)))
}

async fn retrieve<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<Department>, AppError> {
    Ok(Json(store.get_department(id)?))
}

async fn update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(draft): ApiJson<DepartmentDraft>,
) -> Result<Json<Department>, AppError> {
    Ok(Json(store.replace_department(id, draft)?))
}

async fn partial_update<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    ApiJson(patch): ApiJson<DepartmentPatch>,
) -> Result<Json<Department>, AppError> {
    Ok(Json(store.patch_department(id, patch)?))
}

async fn destroy<S: HrStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    store.delete_department(id)?;
    Ok(StatusCode::NO_CONTENT)
}
