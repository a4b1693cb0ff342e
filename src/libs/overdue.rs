//! Overdue-task statistics.
//!
//! A task is overdue when it is not completed and its due date parses to an
//! instant strictly before `now`. Tasks without a due date, or with one that
//! cannot be parsed, are never overdue.

use crate::api::TaskSource;
use crate::libs::error::ReportError;
use crate::libs::join::{apply_filters, EnrichedTask, ProjectJoin};
use crate::libs::messages::{line, Message};
use crate::libs::task::{Label, Project, Task};
use anyhow::Result;
use chrono::{DateTime, Utc};

/// One task of a deadline list, with the due date as the service sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineEntry {
    pub content: String,
    pub due: String,
}

impl From<EnrichedTask> for DeadlineEntry {
    fn from(row: EnrichedTask) -> Self {
        DeadlineEntry {
            due: row.task.due_date().unwrap_or_default().to_string(),
            content: row.task.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverdueStats {
    /// Size of the active-task snapshot before any selection.
    pub active_tasks: usize,
    pub overdue: Vec<DeadlineEntry>,
}

impl OverdueStats {
    pub fn compute(
        tasks: Vec<Task>,
        projects: &[Project],
        labels: &[Label],
        project_name: Option<&str>,
        label_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        let active_tasks = tasks.len();
        let overdue: Vec<Task> = tasks
            .into_iter()
            .filter(|task| !task.is_completed() && task.due_at().is_some_and(|due| due < now))
            .collect();

        let rows = apply_filters(overdue.join_projects(projects), project_name, labels, label_name);

        OverdueStats {
            active_tasks,
            overdue: rows.into_iter().map(DeadlineEntry::from).collect(),
        }
    }

    pub fn render(&self) -> String {
        if self.active_tasks == 0 {
            return line(Message::NoActiveTasks);
        }

        let mut report = line(Message::OverdueTotal(self.overdue.len()));
        if !self.overdue.is_empty() {
            report += "\n";
            report += &line(Message::OverdueListHeader);
            for entry in &self.overdue {
                report += &line(Message::OverdueItem(entry.content.clone(), entry.due.clone()));
            }
        }
        report
    }
}

/// Fetches only what the requested filters need: projects for a project
/// filter, labels for a label filter, nothing for an empty snapshot.
pub(crate) async fn fetch_filter_data<S: TaskSource>(
    source: &S,
    tasks: &[Task],
    project_name: Option<&str>,
    label_name: Option<&str>,
) -> Result<(Vec<Project>, Vec<Label>), ReportError> {
    if tasks.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let projects = match project_name {
        Some(_) => source.fetch_projects().await?,
        None => Vec::new(),
    };
    let labels = match label_name {
        Some(_) => source.fetch_labels().await?,
        None => Vec::new(),
    };
    Ok((projects, labels))
}

/// Overdue fragment, optionally narrowed to one project and/or one label.
pub async fn overdue_statistics<S: TaskSource>(
    source: &S,
    project_name: Option<&str>,
    label_name: Option<&str>,
    now: DateTime<Utc>,
) -> Result<String> {
    let tasks = source.fetch_active_tasks().await?;
    let (projects, labels) = fetch_filter_data(source, &tasks, project_name, label_name).await?;

    Ok(OverdueStats::compute(tasks, &projects, &labels, project_name, label_name, now).render())
}
