use async_trait::async_trait;
use reqwest::Client;
use skylink_core::{BookingsApi, CoreResult, CustomersApi, FlightsApi, StatusConfigApi, TasksApi};
use skylink_shared::{
    Booking, CreateBookingRequest, CreateStatusConfigRequest, CreateTaskRequest, Customer, Flight,
    FlightSearchQuery, ReorderStatusesRequest, StatusConfig, Task, TaskStatus,
    UpdateCustomerRequest, UpdateStatusConfigRequest, UpdateTaskRequest,
};

use crate::transport::{ClientInitError, HttpUpstream};

// ============================================================================
// Flights
// ============================================================================

#[derive(Clone, Debug)]
pub struct FlightsClient {
    http: HttpUpstream,
}

impl FlightsClient {
    pub fn new(base_url: &str, client: Client) -> Result<Self, ClientInitError> {
        Ok(Self {
            http: HttpUpstream::new("Flights", base_url, client)?,
        })
    }
}

#[async_trait]
impl FlightsApi for FlightsClient {
    async fn get_flight(&self, flight_id: &str) -> CoreResult<Flight> {
        self.http.get(&["flights", flight_id]).await
    }

    async fn search_flights(&self, query: &FlightSearchQuery) -> CoreResult<Vec<Flight>> {
        self.http.get_with_query(&["flights", "search"], query).await
    }
}

// ============================================================================
// Customers
// ============================================================================

#[derive(Clone, Debug)]
pub struct CustomersClient {
    http: HttpUpstream,
}

impl CustomersClient {
    pub fn new(base_url: &str, client: Client) -> Result<Self, ClientInitError> {
        Ok(Self {
            http: HttpUpstream::new("Customers", base_url, client)?,
        })
    }
}

#[async_trait]
impl CustomersApi for CustomersClient {
    async fn get_customer(&self, customer_id: &str) -> CoreResult<Customer> {
        self.http.get(&["customers", customer_id]).await
    }

    async fn update_customer(
        &self,
        customer_id: &str,
        request: &UpdateCustomerRequest,
    ) -> CoreResult<Customer> {
        self.http.put(&["customers", customer_id], request).await
    }
}

// ============================================================================
// Bookings
// ============================================================================

#[derive(Clone, Debug)]
pub struct BookingsClient {
    http: HttpUpstream,
}

impl BookingsClient {
    pub fn new(base_url: &str, client: Client) -> Result<Self, ClientInitError> {
        Ok(Self {
            http: HttpUpstream::new("Bookings", base_url, client)?,
        })
    }
}

#[async_trait]
impl BookingsApi for BookingsClient {
    async fn create_booking(&self, request: &CreateBookingRequest) -> CoreResult<Booking> {
        self.http.post(&["bookings"], request).await
    }

    async fn get_booking(&self, booking_id: &str) -> CoreResult<Booking> {
        self.http.get(&["bookings", booking_id]).await
    }

    async fn list_customer_bookings(&self, customer_id: &str) -> CoreResult<Vec<Booking>> {
        self.http.get(&["bookings", "customer", customer_id]).await
    }
}

// ============================================================================
// Tasks & status configuration
// ============================================================================

#[derive(Clone, Debug)]
pub struct TasksClient {
    http: HttpUpstream,
}

impl TasksClient {
    pub fn new(base_url: &str, client: Client) -> Result<Self, ClientInitError> {
        Ok(Self {
            http: HttpUpstream::new("Tasks", base_url, client)?,
        })
    }
}

#[async_trait]
impl TasksApi for TasksClient {
    async fn create_task(&self, request: &CreateTaskRequest) -> CoreResult<Task> {
        self.http.post(&["tasks"], request).await
    }

    async fn get_task(&self, id: &str) -> CoreResult<Task> {
        self.http.get(&["tasks", id]).await
    }

    async fn list_tasks(&self, status: Option<TaskStatus>) -> CoreResult<Vec<Task>> {
        let query: Vec<(&str, &str)> = status.iter().map(|s| ("status", s.as_str())).collect();
        self.http.get_with_query(&["tasks"], &query).await
    }

    async fn update_task(&self, id: &str, request: &UpdateTaskRequest) -> CoreResult<Task> {
        self.http.put(&["tasks", id], request).await
    }

    async fn delete_task(&self, id: &str) -> CoreResult<()> {
        self.http.delete(&["tasks", id]).await
    }
}

#[derive(Clone, Debug)]
pub struct StatusConfigClient {
    http: HttpUpstream,
}

impl StatusConfigClient {
    pub fn new(base_url: &str, client: Client) -> Result<Self, ClientInitError> {
        Ok(Self {
            http: HttpUpstream::new("Status Config", base_url, client)?,
        })
    }
}

#[async_trait]
impl StatusConfigApi for StatusConfigClient {
    async fn create_status(&self, request: &CreateStatusConfigRequest) -> CoreResult<StatusConfig> {
        self.http.post(&["statuses"], request).await
    }

    async fn get_status(&self, status_key: &str) -> CoreResult<StatusConfig> {
        self.http.get(&["statuses", status_key]).await
    }

    async fn list_statuses(&self) -> CoreResult<Vec<StatusConfig>> {
        self.http.get(&["statuses"]).await
    }

    async fn update_status(
        &self,
        status_key: &str,
        request: &UpdateStatusConfigRequest,
    ) -> CoreResult<StatusConfig> {
        self.http.put(&["statuses", status_key], request).await
    }

    async fn delete_status(&self, status_key: &str) -> CoreResult<()> {
        self.http.delete(&["statuses", status_key]).await
    }

    async fn reorder_statuses(&self, request: &ReorderStatusesRequest) -> CoreResult<()> {
        self.http.post_without_result(&["statuses", "reorder"], request).await
    }
}
