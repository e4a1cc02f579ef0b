//! Views composed from the flights, customers and bookings services.
//!
//! Independent fetches are spawned before any of them is awaited so their
//! latencies overlap. Every join is all-or-nothing: the first failing branch
//! fails the whole view and no partially populated view is ever returned.
//! Fetches that are still running when a sibling fails are detached, not
//! aborted, so they finish on their own and their results are dropped.

use std::sync::Arc;

use skylink_shared::{
    Booking, BookingDetails, BookingWithFlight, CabinClass, Customer, CustomerDashboard, Flight,
    FlightSearchQuery, FlightWithAvailability,
};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{error, info};

use crate::api::{BookingsApi, CustomersApi, FlightsApi};
use crate::{CoreResult, UpstreamError};

#[derive(Clone)]
pub struct AggregationService {
    flights: Arc<dyn FlightsApi>,
    customers: Arc<dyn CustomersApi>,
    bookings: Arc<dyn BookingsApi>,
}

impl AggregationService {
    pub fn new(
        flights: Arc<dyn FlightsApi>,
        customers: Arc<dyn CustomersApi>,
        bookings: Arc<dyn BookingsApi>,
    ) -> Self {
        Self {
            flights,
            customers,
            bookings,
        }
    }

    /// Booking plus its flight and customer.
    ///
    /// The booking is fetched first since it carries the flight and customer
    /// ids; those two are then fetched concurrently.
    pub async fn get_booking_details(&self, booking_id: &str) -> CoreResult<BookingDetails> {
        info!(booking_id, "Fetching booking details");

        let result = self.assemble_booking_details(booking_id).await;
        match &result {
            Ok(_) => info!(booking_id, "Booking details fetched successfully"),
            Err(err) => error!(booking_id, error = %err, "Error fetching booking details"),
        }
        result
    }

    /// Customer profile plus every booking paired with its flight.
    ///
    /// Customer and booking list are fetched concurrently, then one flight
    /// fetch per booking fans out. Pairs keep the booking list's order.
    pub async fn get_customer_dashboard(&self, customer_id: &str) -> CoreResult<CustomerDashboard> {
        info!(customer_id, "Fetching customer dashboard");

        let result = self.assemble_dashboard(customer_id).await;
        match &result {
            Ok(dashboard) => info!(
                customer_id,
                booking_count = dashboard.bookings.len(),
                "Customer dashboard fetched successfully"
            ),
            Err(err) => error!(customer_id, error = %err, "Error fetching customer dashboard"),
        }
        result
    }

    /// Flight search with `hasAvailableSeats` and `lowestPrice` added to each result.
    pub async fn search_flights_with_availability(
        &self,
        query: &FlightSearchQuery,
    ) -> CoreResult<Vec<FlightWithAvailability>> {
        info!(
            origin = ?query.origin,
            destination = ?query.destination,
            departure_date = ?query.departure_date,
            "Searching flights with availability"
        );

        let flights = self.flights.search_flights(query).await.inspect_err(|err| {
            error!(
                origin = ?query.origin,
                destination = ?query.destination,
                departure_date = ?query.departure_date,
                error = %err,
                "Error searching flights"
            )
        })?;

        let results: Vec<FlightWithAvailability> =
            flights.into_iter().map(flight_with_availability).collect();

        info!(flight_count = results.len(), "Flight search completed");
        Ok(results)
    }

    async fn assemble_booking_details(&self, booking_id: &str) -> CoreResult<BookingDetails> {
        let booking = self.bookings.get_booking(booking_id).await?;

        let flight = self.spawn_flight_fetch(booking.flight_id.clone());
        let customer = self.spawn_customer_fetch(booking.customer_id.clone());
        let (flight, customer) = tokio::try_join!(joined(flight), joined(customer))?;

        Ok(BookingDetails {
            booking,
            flight,
            customer,
        })
    }

    async fn assemble_dashboard(&self, customer_id: &str) -> CoreResult<CustomerDashboard> {
        let customer = self.spawn_customer_fetch(customer_id.to_string());
        let bookings = {
            let api = Arc::clone(&self.bookings);
            let customer_id = customer_id.to_string();
            tokio::spawn(async move { api.list_customer_bookings(&customer_id).await })
        };
        let (customer, bookings) = tokio::try_join!(joined(customer), joined(bookings))?;

        let flights = self.fetch_flights_in_order(&bookings).await?;

        let bookings = bookings
            .into_iter()
            .zip(flights)
            .map(|(booking, flight)| BookingWithFlight { booking, flight })
            .collect();

        Ok(CustomerDashboard { customer, bookings })
    }

    /// Fetches the flight of every booking at once. The result is index-aligned
    /// with `bookings`: each task carries its dispatch index and lands in that
    /// slot whatever order the fetches complete in.
    async fn fetch_flights_in_order(&self, bookings: &[Booking]) -> CoreResult<Vec<Flight>> {
        let mut tasks = JoinSet::new();
        for (index, booking) in bookings.iter().enumerate() {
            let flights = Arc::clone(&self.flights);
            let flight_id = booking.flight_id.clone();
            tasks.spawn(async move { (index, flights.get_flight(&flight_id).await) });
        }

        let mut slots: Vec<Option<Flight>> = vec![None; bookings.len()];
        while let Some(next) = tasks.join_next().await {
            let outcome = next
                .map_err(UpstreamError::from)
                .and_then(|(index, result)| result.map(|flight| (index, flight)));

            match outcome {
                Ok((index, flight)) => slots[index] = Some(flight),
                Err(err) => {
                    // Dropping the set would abort the stragglers.
                    tasks.detach_all();
                    return Err(err);
                }
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| {
                    UpstreamError::TaskFailed(format!("no flight resolved for booking #{}", index))
                })
            })
            .collect()
    }

    fn spawn_flight_fetch(&self, flight_id: String) -> JoinHandle<CoreResult<Flight>> {
        let flights = Arc::clone(&self.flights);
        tokio::spawn(async move { flights.get_flight(&flight_id).await })
    }

    fn spawn_customer_fetch(&self, customer_id: String) -> JoinHandle<CoreResult<Customer>> {
        let customers = Arc::clone(&self.customers);
        tokio::spawn(async move { customers.get_customer(&customer_id).await })
    }
}

/// Dropping the handle on an early return detaches the task instead of cancelling it.
async fn joined<T>(handle: JoinHandle<CoreResult<T>>) -> CoreResult<T> {
    handle.await?
}

/// Adds the availability summary to a flight.
///
/// `has_available_seats` is true when any cabin has a seat left and
/// `lowest_price` is the cheapest fare among those cabins, or 0 when none do.
pub fn flight_with_availability(flight: Flight) -> FlightWithAvailability {
    let lowest_available_fare = CabinClass::ALL
        .into_iter()
        .filter(|class| flight.available_seats.get(*class) > 0)
        .map(|class| flight.pricing.get(class))
        .fold(None, |lowest: Option<f64>, fare| {
            Some(lowest.map_or(fare, |current| current.min(fare)))
        });

    FlightWithAvailability {
        has_available_seats: lowest_available_fare.is_some(),
        lowest_price: lowest_available_fare.unwrap_or(0.0),
        flight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylink_shared::{CabinPricing, SeatCapacity};

    fn flight(available: SeatCapacity) -> Flight {
        serde_json::from_value(serde_json::json!({
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
            "availableSeats": available,
            "pricing": { "economy": 299, "business": 899, "first": 1499 },
            "status": "SCHEDULED",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_lowest_price_across_all_open_cabins() {
        let result = flight_with_availability(flight(SeatCapacity {
            economy: 50,
            business: 10,
            first: 5,
        }));
        assert!(result.has_available_seats);
        assert_eq!(result.lowest_price, 299.0);
    }

    #[test]
    fn test_lowest_price_skips_sold_out_cabins() {
        let result = flight_with_availability(flight(SeatCapacity {
            economy: 0,
            business: 10,
            first: 0,
        }));
        assert!(result.has_available_seats);
        assert_eq!(result.lowest_price, 899.0);
    }

    #[test]
    fn test_sold_out_flight_has_zero_price() {
        let result = flight_with_availability(flight(SeatCapacity::default()));
        assert!(!result.has_available_seats);
        assert_eq!(result.lowest_price, 0.0);
    }

    #[test]
    fn test_cheapest_cabin_need_not_be_economy() {
        let mut discounted = flight(SeatCapacity {
            economy: 3,
            business: 0,
            first: 2,
        });
        discounted.pricing = CabinPricing {
            economy: 450.0,
            business: 900.0,
            first: 420.0,
        };
        let result = flight_with_availability(discounted);
        assert_eq!(result.lowest_price, 420.0);
    }

    #[test]
    fn test_computed_fields_serialize_alongside_flight() {
        let result = flight_with_availability(flight(SeatCapacity::default()));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["flightId"], "flight-123");
        assert_eq!(value["hasAvailableSeats"], false);
        assert_eq!(value["lowestPrice"], 0.0);
    }
}
