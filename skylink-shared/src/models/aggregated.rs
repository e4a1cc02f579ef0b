//! Client-facing views assembled from more than one upstream service.
//! Built per request and never stored.

use serde::{Deserialize, Serialize};

use super::booking::Booking;
use super::customer::Customer;
use super::flight::Flight;

/// A booking widened with its flight and customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDetails {
    #[serde(flatten)]
    pub booking: Booking,
    pub flight: Flight,
    pub customer: Customer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingWithFlight {
    pub booking: Booking,
    pub flight: Flight,
}

/// A customer with every booking paired to its flight, in the order the bookings service listed them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerDashboard {
    pub customer: Customer,
    pub bookings: Vec<BookingWithFlight>,
}

/// A search result with availability fields computed for the frontend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightWithAvailability {
    #[serde(flatten)]
    pub flight: Flight,
    pub has_available_seats: bool,
    /// Cheapest fare among cabins with seats left, 0 when sold out
    pub lowest_price: f64,
}
