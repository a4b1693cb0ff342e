//! Remote data access.
//!
//! The report pipeline only ever talks to a [`TaskSource`]: the Todoist
//! client implements it over HTTP, tests implement it over fixed snapshots.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todoist_report::api::{TaskSource, Todoist};
//! use todoist_report::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let todoist = Todoist::new(&config.todoist)?;
//! let projects = todoist.fetch_projects().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::ReportError;
use crate::libs::task::{Label, Project, Task};
use chrono::{DateTime, Utc};

pub mod todoist;

pub use todoist::{Todoist, TodoistConfig};

/// Read-only access to one account's tasks, projects and labels.
///
/// Every call returns a fresh snapshot; implementations keep no state
/// between calls and never retry.
#[allow(async_fn_in_trait)]
pub trait TaskSource {
    /// Completed tasks, optionally bounded by completion time.
    ///
    /// At most one page (200 records) is returned; larger windows are
    /// truncated by the service.
    async fn fetch_completed_tasks(
        &self,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    ) -> Result<Vec<Task>, ReportError>;

    /// All tasks that are not completed.
    async fn fetch_active_tasks(&self) -> Result<Vec<Task>, ReportError>;

    async fn fetch_projects(&self) -> Result<Vec<Project>, ReportError>;

    async fn fetch_labels(&self) -> Result<Vec<Label>, ReportError>;
}
