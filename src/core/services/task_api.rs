use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::config::BoardConfig;
use crate::core::models::{StatusUpdate, Task, TaskDraft, TaskId, TaskStatus};
use crate::error::ApiError;

/// Remote task store. One call per operation, no retries.
#[async_trait(?Send)]
pub trait TaskRepository {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    async fn get_task(&self, id: TaskId) -> Result<Task, ApiError>;
    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError>;
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> Result<(), ApiError>;
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
}

/// `TaskRepository` over the `/tasks` REST API.
#[derive(Debug, Clone)]
pub struct HttpTaskRepository {
    client: Client,
    base_url: String,
}

impl HttpTaskRepository {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    // PATCH and DELETE are routed with a trailing slash
    fn task_action_url(&self, id: TaskId) -> String {
        format!("{}/{}/", self.base_url, id)
    }
}

fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Http { status: status.as_u16() })
    }
}

/// Decodes a task list element by element so one bad record does not blank
/// the whole board.
pub fn decode_task_list(values: Vec<serde_json::Value>) -> Vec<Task> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Task>(value) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!("Skipping malformed task: {}", e);
                None
            }
        })
        .collect()
}

#[async_trait(?Send)]
impl TaskRepository for HttpTaskRepository {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let resp = self.client.get(&self.base_url).send().await?;
        let values: Vec<serde_json::Value> = ensure_success(resp)?.json().await?;
        let tasks = decode_task_list(values);
        debug!("Loaded {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, ApiError> {
        let resp = self.client.get(self.task_url(id)).send().await?;
        Ok(ensure_success(resp)?.json().await?)
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let resp = self.client.post(&self.base_url).json(draft).send().await?;
        let task: Task = ensure_success(resp)?.json().await?;
        debug!("Created task {}", task.id);
        Ok(task)
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> Result<(), ApiError> {
        let resp = self
            .client
            .patch(self.task_action_url(id))
            .json(&StatusUpdate { status })
            .send()
            .await?;
        ensure_success(resp)?;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        let resp = self.client.delete(self.task_action_url(id)).send().await?;
        ensure_success(resp)?;
        Ok(())
    }
}
