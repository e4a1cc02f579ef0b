pub mod aggregated;
pub mod booking;
pub mod customer;
pub mod flight;
pub mod status_config;
pub mod task;

pub use aggregated::{BookingDetails, BookingWithFlight, CustomerDashboard, FlightWithAvailability};
pub use booking::{
    Booking, BookingPricing, BookingStatus, CreateBookingRequest, Passenger, Payment, PaymentStatus,
};
pub use customer::{Customer, CustomerPreferences, LoyaltyProgram, LoyaltyTier, UpdateCustomerRequest};
pub use flight::{CabinClass, CabinPricing, Flight, FlightSearchQuery, FlightStatus, SeatCapacity};
pub use status_config::{
    CreateStatusConfigRequest, ReorderStatusesRequest, StatusConfig, StatusOrder,
    UpdateStatusConfigRequest,
};
pub use task::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};
