pub mod app_config;
pub mod clients;
pub mod envelope;
pub mod transport;

use std::sync::Arc;

pub use app_config::{Config, UpstreamConfig};
pub use clients::{BookingsClient, CustomersClient, FlightsClient, StatusConfigClient, TasksClient};
pub use transport::{build_http_client, ClientInitError, HttpUpstream};

/// One client per upstream service, all sharing a single connection pool
#[derive(Clone, Debug)]
pub struct UpstreamClients {
    pub flights: Arc<FlightsClient>,
    pub customers: Arc<CustomersClient>,
    pub bookings: Arc<BookingsClient>,
    pub tasks: Arc<TasksClient>,
    pub statuses: Arc<StatusConfigClient>,
}

impl UpstreamClients {
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ClientInitError> {
        let http = build_http_client(config.timeout())?;

        Ok(Self {
            flights: Arc::new(FlightsClient::new(&config.flights_url, http.clone())?),
            customers: Arc::new(CustomersClient::new(&config.customers_url, http.clone())?),
            bookings: Arc::new(BookingsClient::new(&config.bookings_url, http.clone())?),
            tasks: Arc::new(TasksClient::new(&config.tasks_url, http.clone())?),
            statuses: Arc::new(StatusConfigClient::new(&config.tasks_url, http)?),
        })
    }
}
