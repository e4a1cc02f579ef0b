pub mod aggregation;
pub mod api;
pub mod status_config;
pub mod tasks;

pub use aggregation::{flight_with_availability, AggregationService};
pub use api::{BookingsApi, CustomersApi, FlightsApi, StatusConfigApi, TasksApi};
pub use status_config::StatusConfigService;
pub use tasks::TaskService;

/// Failure of a call to one of the upstream services.
///
/// The aggregation layer never recovers from these; they travel unchanged to
/// the HTTP layer, which picks the response status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    #[error("{message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },
    #[error("{service} API request to {url} timed out")]
    Timeout { service: &'static str, url: String },
    #[error("{service} API unreachable: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },
    #[error("{service} API returned an unreadable response: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },
    #[error("Upstream fetch task failed: {0}")]
    TaskFailed(String),
}

impl From<tokio::task::JoinError> for UpstreamError {
    fn from(err: tokio::task::JoinError) -> Self {
        UpstreamError::TaskFailed(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, UpstreamError>;
