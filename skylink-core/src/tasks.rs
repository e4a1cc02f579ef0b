use std::sync::Arc;

use skylink_shared::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};
use tracing::{error, info};

use crate::api::TasksApi;
use crate::CoreResult;

/// Pass-through to the task tracking service with structured logging around each call
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TasksApi>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TasksApi>) -> Self {
        Self { tasks }
    }

    pub async fn create_task(&self, request: &CreateTaskRequest) -> CoreResult<Task> {
        info!(title = %request.title, "Creating task");
        let task = self
            .tasks
            .create_task(request)
            .await
            .inspect_err(|err| error!(error = %err, "Error creating task"))?;
        info!(task_id = %task.id, "Task created successfully");
        Ok(task)
    }

    pub async fn get_task(&self, id: &str) -> CoreResult<Task> {
        info!(task_id = id, "Getting task");
        self.tasks
            .get_task(id)
            .await
            .inspect_err(|err| error!(task_id = id, error = %err, "Error getting task"))
    }

    pub async fn list_tasks(&self, status: Option<TaskStatus>) -> CoreResult<Vec<Task>> {
        info!(status = ?status, "Listing tasks");
        self.tasks
            .list_tasks(status)
            .await
            .inspect_err(|err| error!(status = ?status, error = %err, "Error listing tasks"))
    }

    pub async fn update_task(&self, id: &str, request: &UpdateTaskRequest) -> CoreResult<Task> {
        info!(task_id = id, "Updating task");
        let task = self
            .tasks
            .update_task(id, request)
            .await
            .inspect_err(|err| error!(task_id = id, error = %err, "Error updating task"))?;
        info!(task_id = %task.id, "Task updated successfully");
        Ok(task)
    }

    pub async fn delete_task(&self, id: &str) -> CoreResult<()> {
        info!(task_id = id, "Deleting task");
        self.tasks
            .delete_task(id)
            .await
            .inspect_err(|err| error!(task_id = id, error = %err, "Error deleting task"))?;
        info!(task_id = id, "Task deleted successfully");
        Ok(())
    }
}
