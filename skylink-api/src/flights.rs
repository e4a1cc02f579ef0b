use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use skylink_shared::{Flight, FlightSearchQuery, FlightWithAvailability};
use tracing::info;

use crate::error::{ApiQuery, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights/search", get(search_flights))
        .route("/api/flights/{id}", get(get_flight))
}

/// GET /api/flights/search?origin&destination&departureDate
async fn search_flights(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FlightSearchQuery>,
) -> Result<Json<Vec<FlightWithAvailability>>, AppError> {
    let flights = state.aggregation.search_flights_with_availability(&query).await?;
    Ok(Json(flights))
}

/// GET /api/flights/{id}
async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
) -> Result<Json<Flight>, AppError> {
    info!(flight_id = %flight_id, "Getting flight");
    let flight = state.flights.get_flight(&flight_id).await?;
    Ok(Json(flight))
}
