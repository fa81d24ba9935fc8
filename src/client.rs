//! HTTP client for the external task service.
//!
//! The service owns task storage and identifier assignment; this module is
//! the only place that talks to it. The [`TaskService`] trait is the seam
//! that lets tests substitute a scripted backend for the real one.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;

use crate::task::{Task, TaskDraft, TaskId, TimerTotal};
use crate::{elog_trace, Error, Result};

/// Operations offered by the task service.
///
/// Every method is a single request/response exchange: no retry, no
/// cancellation. Callers decide what a failure means; this layer only
/// classifies it into the crate error type.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Fetch the full task collection.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Submit a draft; the backend responds with the stored record,
    /// identifier included.
    async fn create_task(&self, draft: &TaskDraft) -> Result<Task>;

    /// Delete the task with the given identifier. The response body is
    /// ignored beyond the status check.
    async fn delete_task(&self, id: &TaskId) -> Result<()>;

    /// Start a work timer on a task.
    async fn start_timer(&self, id: &TaskId) -> Result<()>;

    /// Pause the running timer on a task.
    async fn pause_timer(&self, id: &TaskId) -> Result<()>;

    /// Resume the paused timer on a task.
    async fn resume_timer(&self, id: &TaskId) -> Result<()>;

    /// Stop the timer on a task and return the accumulated total.
    async fn stop_timer(&self, id: &TaskId) -> Result<TimerTotal>;
}

/// Body for the timer endpoints, which address tasks by id.
#[derive(Serialize)]
struct TimerRef<'a> {
    task_id: &'a TaskId,
}

/// [`TaskService`] implementation over HTTP with JSON bodies.
pub struct HttpTaskService {
    base_url: String,
    client: Client,
}

impl HttpTaskService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map non-2xx statuses to [`Error::Backend`] so the log line carries the
/// status code; transport errors arrive as [`Error::Http`] via `?`.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    elog_trace!("backend error body: {}", body);
    Err(Error::Backend {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl TaskService for HttpTaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let response = self.client.get(self.url("/task")).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        let response = self
            .client
            .post(self.url("/task"))
            .json(draft)
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/task/{}", id)))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn start_timer(&self, id: &TaskId) -> Result<()> {
        let response = self
            .client
            .post(self.url("/timer/start"))
            .json(&TimerRef { task_id: id })
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn pause_timer(&self, id: &TaskId) -> Result<()> {
        let response = self
            .client
            .post(self.url("/timer/pause"))
            .json(&TimerRef { task_id: id })
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn resume_timer(&self, id: &TaskId) -> Result<()> {
        let response = self
            .client
            .post(self.url("/timer/resume"))
            .json(&TimerRef { task_id: id })
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn stop_timer(&self, id: &TaskId) -> Result<TimerTotal> {
        let response = self
            .client
            .post(self.url("/timer/stop"))
            .json(&TimerRef { task_id: id })
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}
