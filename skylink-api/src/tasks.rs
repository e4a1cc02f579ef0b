use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use skylink_shared::de::empty_as_none;
use skylink_shared::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};

use crate::error::{ApiJson, ApiQuery, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTasksParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<TaskStatus>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", get(get_task).put(update_task).delete(delete_task))
}

async fn create_task(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let task = state.tasks.create_task(&request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn list_tasks(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListTasksParams>,
) -> Result<Json<Vec<Task>>, AppError> {
    Ok(Json(state.tasks.list_tasks(params.status).await?))
}

async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Task>, AppError> {
    Ok(Json(state.tasks.get_task(&id).await?))
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    Ok(Json(state.tasks.update_task(&id, &request).await?))
}

async fn delete_task(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, AppError> {
    state.tasks.delete_task(&id).await?;
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
