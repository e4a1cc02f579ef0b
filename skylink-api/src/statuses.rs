use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use skylink_shared::{
    CreateStatusConfigRequest, ReorderStatusesRequest, StatusConfig, UpdateStatusConfigRequest,
};

use crate::error::{ApiJson, AppError};
use crate::state::AppState;

// ============================================================================
// Status configuration (board columns for the task tracker)
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/statuses", get(list_statuses).post(create_status))
        .route("/api/statuses/reorder", post(reorder_statuses))
        .route(
            "/api/statuses/{status_key}",
            get(get_status).put(update_status).delete(delete_status),
        )
}

async fn create_status(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateStatusConfigRequest>,
) -> Result<(StatusCode, Json<StatusConfig>), AppError> {
    let status = state.statuses.create_status(&request).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

async fn list_statuses(State(state): State<AppState>) -> Result<Json<Vec<StatusConfig>>, AppError> {
    Ok(Json(state.statuses.list_statuses().await?))
}

async fn get_status(
    State(state): State<AppState>,
    Path(status_key): Path<String>,
) -> Result<Json<StatusConfig>, AppError> {
    Ok(Json(state.statuses.get_status(&status_key).await?))
}

async fn update_status(
    State(state): State<AppState>,
    Path(status_key): Path<String>,
    ApiJson(request): ApiJson<UpdateStatusConfigRequest>,
) -> Result<Json<StatusConfig>, AppError> {
    Ok(Json(state.statuses.update_status(&status_key, &request).await?))
}

async fn delete_status(
    State(state): State<AppState>,
    Path(status_key): Path<String>,
) -> Result<StatusCode, AppError> {
    state.statuses.delete_status(&status_key).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn reorder_statuses(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ReorderStatusesRequest>,
) -> Result<StatusCode, AppError> {
    state.statuses.reorder_statuses(&request).await?;
    Ok(StatusCode::NO_CONTENT)
}
