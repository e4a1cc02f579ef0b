use std::sync::Arc;

use skylink_shared::{
    CreateStatusConfigRequest, ReorderStatusesRequest, StatusConfig, UpdateStatusConfigRequest,
};
use tracing::{error, info};

use crate::api::StatusConfigApi;
use crate::CoreResult;

#[derive(Clone)]
pub struct StatusConfigService {
    statuses: Arc<dyn StatusConfigApi>,
}

impl StatusConfigService {
    pub fn new(statuses: Arc<dyn StatusConfigApi>) -> Self {
        Self { statuses }
    }

    pub async fn create_status(&self, request: &CreateStatusConfigRequest) -> CoreResult<StatusConfig> {
        info!(status_key = %request.status_key, "Creating status");
        self.statuses
            .create_status(request)
            .await
            .inspect_err(|err| error!(status_key = %request.status_key, error = %err, "Error creating status"))
    }

    pub async fn get_status(&self, status_key: &str) -> CoreResult<StatusConfig> {
        info!(status_key, "Getting status");
        self.statuses
            .get_status(status_key)
            .await
            .inspect_err(|err| error!(status_key, error = %err, "Error getting status"))
    }

    pub async fn list_statuses(&self) -> CoreResult<Vec<StatusConfig>> {
        info!("Listing statuses");
        self.statuses
            .list_statuses()
            .await
            .inspect_err(|err| error!(error = %err, "Error listing statuses"))
    }

    pub async fn update_status(
        &self,
        status_key: &str,
        request: &UpdateStatusConfigRequest,
    ) -> CoreResult<StatusConfig> {
        info!(status_key, "Updating status");
        self.statuses
            .update_status(status_key, request)
            .await
            .inspect_err(|err| error!(status_key, error = %err, "Error updating status"))
    }

    pub async fn delete_status(&self, status_key: &str) -> CoreResult<()> {
        info!(status_key, "Deleting status");
        self.statuses
            .delete_status(status_key)
            .await
            .inspect_err(|err| error!(status_key, error = %err, "Error deleting status"))
    }

    pub async fn reorder_statuses(&self, request: &ReorderStatusesRequest) -> CoreResult<()> {
        info!(count = request.statuses.len(), "Reordering statuses");
        self.statuses
            .reorder_statuses(request)
            .await
            .inspect_err(|err| error!(error = %err, "Error reordering statuses"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UpstreamError;
    use async_trait::async_trait;

    struct Unavailable;

    fn outage() -> UpstreamError {
        UpstreamError::Status {
            service: "Status Config",
            status: 503,
            message: "Task tracker unavailable".to_string(),
        }
    }

    #[async_trait]
    impl StatusConfigApi for Unavailable {
        async fn create_status(&self, _: &CreateStatusConfigRequest) -> CoreResult<StatusConfig> {
            Err(outage())
        }

        async fn get_status(&self, _: &str) -> CoreResult<StatusConfig> {
            Err(outage())
        }

        async fn list_statuses(&self) -> CoreResult<Vec<StatusConfig>> {
            Err(outage())
        }

        async fn update_status(&self, _: &str, _: &UpdateStatusConfigRequest) -> CoreResult<StatusConfig> {
            Err(outage())
        }

        async fn delete_status(&self, _: &str) -> CoreResult<()> {
            Err(outage())
        }

        async fn reorder_statuses(&self, _: &ReorderStatusesRequest) -> CoreResult<()> {
            Err(outage())
        }
    }

    #[tokio::test]
    async fn test_failures_propagate_unchanged() {
        let svc = StatusConfigService::new(Arc::new(Unavailable));

        assert_eq!(svc.list_statuses().await.unwrap_err(), outage());
        assert_eq!(svc.get_status("TODO").await.unwrap_err(), outage());
        assert_eq!(svc.delete_status("TODO").await.unwrap_err(), outage());
        assert_eq!(
            svc.update_status("TODO", &UpdateStatusConfigRequest::default())
                .await
                .unwrap_err(),
            outage()
        );
        assert_eq!(
            svc.reorder_statuses(&ReorderStatusesRequest { statuses: vec![] })
                .await
                .unwrap_err(),
            outage()
        );
    }
}
