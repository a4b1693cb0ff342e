//! Upcoming-deadline statistics.
//!
//! The mirror image of the overdue statistic: a task is due soon when it is
//! not completed and its due instant lies in `[now, now + lookahead_days]`,
//! both ends included. Because overdue requires `due < now`, a task can never
//! be in both sets for the same `now`.

use crate::api::TaskSource;
use crate::libs::join::{apply_filters, ProjectJoin};
use crate::libs::messages::{line, Message};
use crate::libs::overdue::{fetch_filter_data, DeadlineEntry};
use crate::libs::task::{Label, Project, Task};
use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};

pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct DueSoonStats {
    pub lookahead_days: u32,
    pub active_tasks: usize,
    pub due_soon: Vec<DeadlineEntry>,
}

/// End of the look-ahead window. Saturates instead of overflowing.
pub fn window_end(now: DateTime<Utc>, lookahead_days: u32) -> DateTime<Utc> {
    now.checked_add_signed(TimeDelta::days(i64::from(lookahead_days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

impl DueSoonStats {
    pub fn compute(
        tasks: Vec<Task>,
        projects: &[Project],
        labels: &[Label],
        lookahead_days: u32,
        project_name: Option<&str>,
        label_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        let until = window_end(now, lookahead_days);
        let active_tasks = tasks.len();
        let due_soon: Vec<Task> = tasks
            .into_iter()
            .filter(|task| !task.is_completed() && task.due_at().is_some_and(|due| due >= now && due <= until))
            .collect();

        let rows = apply_filters(due_soon.join_projects(projects), project_name, labels, label_name);

        DueSoonStats {
            lookahead_days,
            active_tasks,
            due_soon: rows.into_iter().map(DeadlineEntry::from).collect(),
        }
    }

    pub fn render(&self) -> String {
        if self.active_tasks == 0 {
            return line(Message::NoActiveTasks);
        }

        let mut report = line(Message::DueSoonTotal(self.lookahead_days, self.due_soon.len()));
        if !self.due_soon.is_empty() {
            report += "\n";
            report += &line(Message::DueSoonListHeader);
            for entry in &self.due_soon {
                report += &line(Message::DueSoonItem(entry.content.clone(), entry.due.clone()));
            }
        }
        report
    }
}

/// Due-soon fragment for the next `lookahead_days`.
pub async fn due_soon_statistics<S: TaskSource>(
    source: &S,
    lookahead_days: u32,
    project_name: Option<&str>,
    label_name: Option<&str>,
    now: DateTime<Utc>,
) -> Result<String> {
    let tasks = source.fetch_active_tasks().await?;
    let (projects, labels) = fetch_filter_data(source, &tasks, project_name, label_name).await?;

    Ok(DueSoonStats::compute(tasks, &projects, &labels, lookahead_days, project_name, label_name, now).render())
}
