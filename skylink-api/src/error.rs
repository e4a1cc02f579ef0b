use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{FromRequest, FromRequestParts},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skylink_core::UpstreamError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    Upstream(UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(err) => upstream_response(err),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

fn upstream_response(err: UpstreamError) -> (StatusCode, String) {
    match err {
        UpstreamError::Status { status, message, .. } => {
            let status = StatusCode::from_u16(status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            (status, message)
        }
        UpstreamError::Timeout { service, url } => {
            tracing::error!(service, "Gateway timeout: {}", url);
            (StatusCode::GATEWAY_TIMEOUT, err_text(service, "timed out"))
        }
        UpstreamError::Transport { service, message } | UpstreamError::Decode { service, message } => {
            tracing::error!(service, "Bad gateway: {}", message);
            (StatusCode::BAD_GATEWAY, err_text(service, "is unavailable"))
        }
        UpstreamError::TaskFailed(msg) => {
            tracing::error!("Internal Server Error: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
        }
    }
}

fn err_text(service: &str, what: &str) -> String {
    format!("{} API {}", service, what)
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::Upstream(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

/// `Json` body extractor whose rejections render through [`AppError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor whose rejections render through [`AppError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_upstream_status_is_propagated() {
        let (status, body) = render(AppError::from(UpstreamError::Status {
            service: "Bookings",
            status: 404,
            message: "Booking not found".to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Booking not found" }));
    }

    #[tokio::test]
    async fn test_timeout_maps_to_gateway_timeout() {
        let (status, body) = render(AppError::from(UpstreamError::Timeout {
            service: "Flights",
            url: "http://flights.internal/flights/f-1".to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["error"], "Flights API timed out");
    }

    #[tokio::test]
    async fn test_transport_details_are_not_exposed() {
        let (status, body) = render(AppError::from(UpstreamError::Transport {
            service: "Customers",
            message: "connection refused (10.0.3.7:3002)".to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Customers API is unavailable");
    }

    #[tokio::test]
    async fn test_failed_task_is_generic_500() {
        let (status, body) = render(AppError::from(UpstreamError::TaskFailed("task 7 panicked".to_string()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let (status, body) = render(AppError::ValidationError("Request body is required".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Request body is required");
    }
}
