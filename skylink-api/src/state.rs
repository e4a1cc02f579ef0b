use std::sync::Arc;

use skylink_core::{
    AggregationService, BookingsApi, CustomersApi, FlightsApi, StatusConfigApi, StatusConfigService,
    TaskService, TasksApi,
};
use skylink_upstream::UpstreamClients;

#[derive(Clone)]
pub struct AppState {
    pub aggregation: AggregationService,
    pub flights: Arc<dyn FlightsApi>,
    pub customers: Arc<dyn CustomersApi>,
    pub bookings: Arc<dyn BookingsApi>,
    pub tasks: TaskService,
    pub statuses: StatusConfigService,
}

impl AppState {
    pub fn new(
        flights: Arc<dyn FlightsApi>,
        customers: Arc<dyn CustomersApi>,
        bookings: Arc<dyn BookingsApi>,
        tasks: Arc<dyn TasksApi>,
        statuses: Arc<dyn StatusConfigApi>,
    ) -> Self {
        Self {
            aggregation: AggregationService::new(flights.clone(), customers.clone(), bookings.clone()),
            flights,
            customers,
            bookings,
            tasks: TaskService::new(tasks),
            statuses: StatusConfigService::new(statuses),
        }
    }

    pub fn from_clients(clients: &UpstreamClients) -> Self {
        Self::new(
            clients.flights.clone(),
            clients.customers.clone(),
            clients.bookings.clone(),
            clients.tasks.clone(),
            clients.statuses.clone(),
        )
    }
}
