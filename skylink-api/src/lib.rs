use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod customers;
pub mod error;
pub mod flights;
pub mod middleware;
pub mod state;
pub mod statuses;
pub mod tasks;

pub use error::AppError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-api-key"),
            middleware::REQUEST_ID_HEADER,
        ])
        .expose_headers([middleware::REQUEST_ID_HEADER]);

    Router::new()
        .route("/health", get(health))
        .merge(flights::routes())
        .merge(customers::routes())
        .merge(bookings::routes())
        .merge(tasks::routes())
        .merge(statuses::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
