//! Productivity recommendation.
//!
//! The completed-task feed carries no priority information, so the
//! recommendation is fixed advice. The only input that changes the text is
//! whether anything was completed in the window at all.
//!
//! ```text
//! completed > 0  ->  recommendation
//! completed == 0 ->  recommendation + "nothing completed yet" hint
//! ```

use crate::api::TaskSource;
use crate::libs::completed::{window_start, CompletedStats};
use crate::libs::messages::{line, Message};
use crate::libs::task::{Project, Task};
use anyhow::Result;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Tasks completed in the window, after the project filter.
    pub completed: usize,
}

impl Recommendation {
    /// Counts completed tasks exactly as the completed-task statistic does.
    pub fn compute(
        tasks: Vec<Task>,
        projects: &[Project],
        project_name: Option<&str>,
        n_days: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Recommendation {
            completed: CompletedStats::compute(tasks, projects, project_name, n_days, now).total,
        }
    }

    pub fn render(&self) -> String {
        let mut text = line(Message::Recommendation);
        if self.completed == 0 {
            text += &line(Message::RecommendationNoTasks);
        }
        text
    }
}

/// Recommendation fragment for the last `n_days`, optionally for one project.
///
/// Projects are fetched only when a project filter is requested.
pub async fn productivity_recommendation<S: TaskSource>(
    source: &S,
    n_days: u32,
    project_name: Option<&str>,
    now: DateTime<Utc>,
) -> Result<String> {
    let tasks = source.fetch_completed_tasks(Some(window_start(now, n_days)), None).await?;
    let projects = match project_name {
        Some(_) => source.fetch_projects().await?,
        None => Vec::new(),
    };

    Ok(Recommendation::compute(tasks, &projects, project_name, n_days, now).render())
}
