use async_trait::async_trait;
use skylink_shared::{
    Booking, CreateBookingRequest, CreateStatusConfigRequest, CreateTaskRequest, Customer, Flight,
    FlightSearchQuery, ReorderStatusesRequest, StatusConfig, Task, TaskStatus,
    UpdateCustomerRequest, UpdateStatusConfigRequest, UpdateTaskRequest,
};

use crate::CoreResult;

/// Client for the flights service
#[async_trait]
pub trait FlightsApi: Send + Sync {
    async fn get_flight(&self, flight_id: &str) -> CoreResult<Flight>;

    /// Unset filters are not sent upstream.
    async fn search_flights(&self, query: &FlightSearchQuery) -> CoreResult<Vec<Flight>>;
}

/// Client for the customers service
#[async_trait]
pub trait CustomersApi: Send + Sync {
    async fn get_customer(&self, customer_id: &str) -> CoreResult<Customer>;

    async fn update_customer(
        &self,
        customer_id: &str,
        request: &UpdateCustomerRequest,
    ) -> CoreResult<Customer>;
}

/// Client for the bookings service
#[async_trait]
pub trait BookingsApi: Send + Sync {
    async fn create_booking(&self, request: &CreateBookingRequest) -> CoreResult<Booking>;

    async fn get_booking(&self, booking_id: &str) -> CoreResult<Booking>;

    async fn list_customer_bookings(&self, customer_id: &str) -> CoreResult<Vec<Booking>>;
}

/// Client for the task tracking service
#[async_trait]
pub trait TasksApi: Send + Sync {
    async fn create_task(&self, request: &CreateTaskRequest) -> CoreResult<Task>;

    async fn get_task(&self, id: &str) -> CoreResult<Task>;

    async fn list_tasks(&self, status: Option<TaskStatus>) -> CoreResult<Vec<Task>>;

    async fn update_task(&self, id: &str, request: &UpdateTaskRequest) -> CoreResult<Task>;

    async fn delete_task(&self, id: &str) -> CoreResult<()>;
}

/// Client for the task board's status configuration, served by the task tracking service
#[async_trait]
pub trait StatusConfigApi: Send + Sync {
    async fn create_status(&self, request: &CreateStatusConfigRequest) -> CoreResult<StatusConfig>;

    async fn get_status(&self, status_key: &str) -> CoreResult<StatusConfig>;

    async fn list_statuses(&self) -> CoreResult<Vec<StatusConfig>>;

    async fn update_status(
        &self,
        status_key: &str,
        request: &UpdateStatusConfigRequest,
    ) -> CoreResult<StatusConfig>;

    async fn delete_status(&self, status_key: &str) -> CoreResult<()>;

    async fn reorder_statuses(&self, request: &ReorderStatusesRequest) -> CoreResult<()>;
}
