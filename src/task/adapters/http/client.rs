//! REST client implementation of the remote task store.
//!
//! The contract mirrors the task service's `/api/tasks` resource:
//!
//! | operation | request |
//! |---|---|
//! | list | `GET {base}` |
//! | get | `GET {base}/{id}` |
//! | list by status | `GET {base}/status/{STATUS}` |
//! | create | `POST {base}` |
//! | update status | `PATCH {base}/{id}/status?status={STATUS}` |
//! | update | `PATCH {base}/{id}` |
//! | delete | `DELETE {base}/{id}` |

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskStatus, TaskUpdate},
    ports::{RemoteTaskStore, TaskStoreError, TaskStoreResult},
};

/// `reqwest`-backed remote task store.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: Client,
    base_url: String,
}

impl HttpTaskStore {
    /// Creates a store talking to the task resource at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a store that reuses an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self {
            client,
            base_url: raw.trim_end_matches('/').to_owned(),
        }
    }

    /// Creates a store from resolved client configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.as_str())
    }

    /// Returns the task resource URL this store talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/{id}", self.base_url)
    }
}

/// Sends a request, classifying connection failures as unavailability.
async fn send(request: RequestBuilder) -> TaskStoreResult<Response> {
    request.send().await.map_err(|err| {
        if err.is_connect() || err.is_timeout() {
            TaskStoreError::Unavailable(err.to_string())
        } else {
            TaskStoreError::transport(err)
        }
    })
}

/// Maps non-success responses to store errors.
///
/// A 404 becomes [`TaskStoreError::NotFound`] when the request addressed a
/// single task.
async fn ensure_success(response: Response, target: Option<TaskId>) -> TaskStoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if let (StatusCode::NOT_FOUND, Some(id)) = (status, target) {
        return Err(TaskStoreError::NotFound(id));
    }
    let body = response.text().await.unwrap_or_default();
    Err(TaskStoreError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> TaskStoreResult<T> {
    let bytes = response.bytes().await.map_err(TaskStoreError::transport)?;
    serde_json::from_slice(&bytes).map_err(|err| TaskStoreError::InvalidPayload(err.to_string()))
}

#[async_trait]
impl RemoteTaskStore for HttpTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let response = send(self.client.get(&self.base_url)).await?;
        decode(ensure_success(response, None).await?).await
    }

    async fn list_tasks_by_status(&self, status: TaskStatus) -> TaskStoreResult<Vec<Task>> {
        let url = format!("{}/status/{status}", self.base_url);
        let response = send(self.client.get(url)).await?;
        decode(ensure_success(response, None).await?).await
    }

    async fn get_task(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let response = send(self.client.get(self.task_url(id))).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(ensure_success(response, Some(id)).await?)
            .await
            .map(Some)
    }

    async fn create_task(&self, task: NewTask) -> TaskStoreResult<Task> {
        let response = send(self.client.post(&self.base_url).json(&task)).await?;
        decode(ensure_success(response, None).await?).await
    }

    async fn update_task_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<Task> {
        let url = format!("{}/status", self.task_url(id));
        let request = self
            .client
            .patch(url)
            .query(&[("status", status.as_str())]);
        let response = send(request).await?;
        decode(ensure_success(response, Some(id)).await?).await
    }

    async fn update_task(&self, id: TaskId, update: TaskUpdate) -> TaskStoreResult<Task> {
        let response = send(self.client.patch(self.task_url(id)).json(&update)).await?;
        decode(ensure_success(response, Some(id)).await?).await
    }

    async fn delete_task(&self, id: TaskId) -> TaskStoreResult<()> {
        let response = send(self.client.delete(self.task_url(id))).await?;
        ensure_success(response, Some(id)).await?;
        Ok(())
    }
}
