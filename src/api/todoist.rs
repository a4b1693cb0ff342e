//! Todoist client for the reporting pipeline.
//!
//! Two endpoints are used:
//!
//! - **Sync** (`POST sync/v9/sync`): a full snapshot (`sync_token=*`) limited
//!   to one resource type per call (`items`, `projects` or `labels`)
//! - **Completed** (`GET sync/v9/completed/get_all`): up to 200 completed
//!   items, optionally bounded by `since`/`until`
//!
//! ## Error Handling
//!
//! A non-success status becomes [`ReportError::RemoteService`] carrying the
//! status and body. Connection failures, timeouts and undecodable envelopes
//! become [`ReportError::Transport`]. Nothing is retried. Individual records
//! that fail to decode are skipped with a warning.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todoist_report::api::{TaskSource, Todoist, TodoistConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = TodoistConfig {
//!     api_token: "0123456789abcdef".to_string(),
//!     api_url: "https://api.todoist.com".to_string(),
//!     timeout_secs: 30,
//! };
//! let todoist = Todoist::new(&config)?;
//! let tasks = todoist.fetch_active_tasks().await?;
//! # Ok(())
//! # }
//! ```

use super::TaskSource;
use crate::libs::error::ReportError;
use crate::libs::messages::Message;
use crate::libs::task::{Label, Project, Task};
use crate::msg_warning;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const SYNC_PATH: &str = "sync/v9/sync";
const COMPLETED_PATH: &str = "sync/v9/completed/get_all";

/// Page size of the completed endpoint. There is no pagination.
pub const COMPLETED_PAGE_LIMIT: u32 = 200;

/// Wire format of `since`/`until`: UTC, whole seconds, `Z` suffix.
const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Connection settings for one Todoist account.
#[derive(Clone, Debug)]
pub struct TodoistConfig {
    /// Personal API token sent as a bearer credential.
    pub api_token: String,
    /// Base URL without trailing slash, e.g. `https://api.todoist.com`.
    pub api_url: String,
    /// Upper bound for each request, connection included.
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct SyncResponse {
    #[serde(default)]
    items: Vec<Value>,
    #[serde(default)]
    projects: Vec<Value>,
    #[serde(default)]
    labels: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct CompletedResponse {
    #[serde(default)]
    items: Vec<Value>,
}

#[derive(Debug, Clone, Copy)]
enum Resource {
    Items,
    Projects,
    Labels,
}

impl Resource {
    fn as_str(&self) -> &'static str {
        match self {
            Resource::Items => "items",
            Resource::Projects => "projects",
            Resource::Labels => "labels",
        }
    }
}

#[derive(Debug)]
pub struct Todoist {
    client: Client,
    config: TodoistConfig,
}

impl Todoist {
    /// Creates a client whose every request is bounded by `config.timeout_secs`.
    pub fn new(config: &TodoistConfig) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    async fn sync(&self, resource: Resource) -> Result<SyncResponse, ReportError> {
        let url = format!("{}/{}", self.config.api_url, SYNC_PATH);
        let resource_types = format!("[\"{}\"]", resource.as_str());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .form(&[("sync_token", "*"), ("resource_types", resource_types.as_str())])
            .send()
            .await?;

        Ok(ensure_success(response).await?.json::<SyncResponse>().await?)
    }
}

impl TaskSource for Todoist {
    async fn fetch_completed_tasks(
        &self,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    ) -> Result<Vec<Task>, ReportError> {
        let url = format!("{}/{}", self.config.api_url, COMPLETED_PATH);

        let mut query: Vec<(&str, String)> = Vec::with_capacity(3);
        if let Some(since) = since {
            query.push(("since", since.format(INSTANT_FORMAT).to_string()));
        }
        if let Some(until) = until {
            query.push(("until", until.format(INSTANT_FORMAT).to_string()));
        }
        query.push(("limit", COMPLETED_PAGE_LIMIT.to_string()));

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_token)
            .query(&query)
            .send()
            .await?;
        let body = ensure_success(response).await?.json::<CompletedResponse>().await?;

        let tasks: Vec<Task> = decode("completed task", body.items);
        tracing::debug!(resource = "completed", count = tasks.len(), "fetched snapshot");
        Ok(tasks)
    }

    async fn fetch_active_tasks(&self) -> Result<Vec<Task>, ReportError> {
        let tasks: Vec<Task> = decode("task", self.sync(Resource::Items).await?.items);
        tracing::debug!(resource = "items", count = tasks.len(), "fetched snapshot");
        Ok(tasks)
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, ReportError> {
        let projects: Vec<Project> = decode("project", self.sync(Resource::Projects).await?.projects);
        tracing::debug!(resource = "projects", count = projects.len(), "fetched snapshot");
        Ok(projects)
    }

    async fn fetch_labels(&self) -> Result<Vec<Label>, ReportError> {
        let labels: Vec<Label> = decode("label", self.sync(Resource::Labels).await?.labels);
        tracing::debug!(resource = "labels", count = labels.len(), "fetched snapshot");
        Ok(labels)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ReportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ReportError::RemoteService {
        status: status.as_u16(),
        body,
    })
}

/// Decodes records one by one; a malformed record is skipped, not fatal.
fn decode<T: DeserializeOwned>(kind: &'static str, records: Vec<Value>) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<T>(record) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                msg_warning!(Message::RecordDecodeFailed(kind, e.to_string()));
                None
            }
        })
        .collect()
}
