use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::de::empty_as_none;

/// Cabin classes offered on every flight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    Economy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 3] = [CabinClass::Economy, CabinClass::Business, CabinClass::First];
}

/// Seat counts per cabin, used for both total capacity and remaining availability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SeatCapacity {
    pub economy: u32,
    pub business: u32,
    pub first: u32,
}

impl SeatCapacity {
    pub fn get(&self, class: CabinClass) -> u32 {
        match class {
            CabinClass::Economy => self.economy,
            CabinClass::Business => self.business,
            CabinClass::First => self.first,
        }
    }
}

/// Fare per cabin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CabinPricing {
    pub economy: f64,
    pub business: f64,
    pub first: f64,
}

impl CabinPricing {
    pub fn get(&self, class: CabinClass) -> f64 {
        match class {
            CabinClass::Economy => self.economy,
            CabinClass::Business => self.business,
            CabinClass::First => self.first,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    Scheduled,
    Boarding,
    Departed,
    InFlight,
    Landed,
    Cancelled,
    Delayed,
}

/// A flight as owned by the flights service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_id: String,
    pub flight_number: String,
    pub airline_code: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: String,
    pub arrival_date: NaiveDate,
    pub arrival_time: String,
    /// Minutes
    pub duration: u32,
    pub aircraft: String,
    pub capacity: SeatCapacity,
    pub available_seats: SeatCapacity,
    pub pricing: CabinPricing,
    pub status: FlightStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional filters for a flight search. Unset filters are left out of the upstream query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchQuery {
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_deserialization() {
        let json = r#"
            {
                "flightId": "flight-123",
                "flightNumber": "AA100",
                "airlineCode": "AA",
                "origin": "LAX",
                "destination": "JFK",
                "departureDate": "2024-03-15",
                "departureTime": "10:00",
                "arrivalDate": "2024-03-15",
                "arrivalTime": "18:00",
                "duration": 300,
                "aircraft": "Boeing 737",
                "capacity": { "economy": 100, "business": 20, "first": 10 },
                "availableSeats": { "economy": 50, "business": 10, "first": 5 },
                "pricing": { "economy": 299, "business": 899, "first": 1499 },
                "status": "IN_FLIGHT",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00.000Z"
            }
        "#;
        let flight: Flight = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(flight.flight_id, "flight-123");
        assert_eq!(flight.status, FlightStatus::InFlight);
        assert_eq!(flight.departure_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(flight.available_seats.get(CabinClass::Business), 10);
        assert_eq!(flight.pricing.get(CabinClass::First), 1499.0);
    }

    #[test]
    fn test_search_query_omits_unset_filters() {
        let query = FlightSearchQuery {
            origin: Some("LAX".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({ "origin": "LAX" }));
    }

    #[test]
    fn test_search_query_treats_empty_filters_as_absent() {
        let query: FlightSearchQuery = serde_json::from_value(serde_json::json!({
            "origin": "",
            "destination": "JFK",
            "departureDate": ""
        }))
        .unwrap();
        assert_eq!(
            query,
            FlightSearchQuery {
                destination: Some("JFK".to_string()),
                ..Default::default()
            }
        );

        let dated: FlightSearchQuery =
            serde_json::from_value(serde_json::json!({ "departureDate": "2024-03-15" })).unwrap();
        assert_eq!(dated.departure_date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }
}
