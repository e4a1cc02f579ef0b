use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use skylink_shared::{Booking, BookingDetails, CreateBookingRequest};
use tracing::info;

use crate::error::{ApiJson, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/{id}", get(get_booking_details))
}

async fn create_booking(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    info!(
        customer_id = %request.customer_id,
        flight_id = %request.flight_id,
        passengers = request.passengers.len(),
        "Creating booking"
    );
    let booking = state.bookings.create_booking(&request).await?;
    info!(booking_id = %booking.booking_id, "Booking created");

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings/{id}
/// The booking flattened together with its flight and customer
async fn get_booking_details(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> Result<Json<BookingDetails>, AppError> {
    let details = state.aggregation.get_booking_details(&booking_id).await?;
    Ok(Json(details))
}
