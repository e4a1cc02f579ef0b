use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use skylink_shared::{Booking, Customer, CustomerDashboard, UpdateCustomerRequest};
use tracing::info;

use crate::error::{ApiJson, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/customers/{id}", get(get_customer).put(update_customer))
        .route("/api/customers/{id}/bookings", get(list_customer_bookings))
        .route("/api/customers/{id}/dashboard", get(get_customer_dashboard))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Customer>, AppError> {
    info!(customer_id = %customer_id, "Getting customer");
    Ok(Json(state.customers.get_customer(&customer_id).await?))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    ApiJson(request): ApiJson<UpdateCustomerRequest>,
) -> Result<Json<Customer>, AppError> {
    info!(customer_id = %customer_id, "Updating customer");
    let customer = state.customers.update_customer(&customer_id, &request).await?;
    Ok(Json(customer))
}

async fn list_customer_bookings(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    info!(customer_id = %customer_id, "Listing customer bookings");
    Ok(Json(state.bookings.list_customer_bookings(&customer_id).await?))
}

/// Profile plus every booking paired with its flight
async fn get_customer_dashboard(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerDashboard>, AppError> {
    let dashboard = state.aggregation.get_customer_dashboard(&customer_id).await?;
    Ok(Json(dashboard))
}
