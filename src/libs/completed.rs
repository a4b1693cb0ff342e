//! Completed-task statistics.
//!
//! Counts the tasks completed inside the window `[now - n_days, now]`,
//! breaks the count down per project and lists every task with its
//! completion timestamp.
//!
//! ## Ordering
//!
//! Per-project counts are sorted by count, descending. Ties keep the order
//! in which the projects were first met in the service response (stable
//! sort). Tasks without a resolvable project are counted under a
//! "(no project)" bucket, so the per-project counts always add up to the
//! total.

use crate::api::TaskSource;
use crate::libs::join::{EnrichedTask, ProjectJoin, TaskFilters};
use crate::libs::messages::{line, Message};
use crate::libs::task::{Project, Task};
use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedEntry {
    pub content: String,
    /// Completion timestamp as sent by the service.
    pub completed_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedStats {
    pub n_days: u32,
    pub total: usize,
    pub per_project: Vec<(String, usize)>,
    pub tasks: Vec<CompletedEntry>,
}

/// Start of the look-back window. Saturates instead of overflowing.
pub fn window_start(now: DateTime<Utc>, n_days: u32) -> DateTime<Utc> {
    now.checked_sub_signed(TimeDelta::days(i64::from(n_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

impl CompletedStats {
    /// Joins, filters and aggregates one completed-task snapshot.
    ///
    /// Tasks whose `completed_at` is missing or unparseable cannot be placed
    /// in the window and are left out.
    pub fn compute(
        tasks: Vec<Task>,
        projects: &[Project],
        project_name: Option<&str>,
        n_days: u32,
        now: DateTime<Utc>,
    ) -> Self {
        let since = window_start(now, n_days);

        let mut rows = tasks.join_projects(projects);
        if let Some(name) = project_name {
            rows = rows.filter_by_project(name);
        }
        let rows: Vec<EnrichedTask> = rows
            .into_iter()
            .filter(|row| row.task.completed_at_utc().is_some_and(|at| at >= since))
            .collect();

        let per_project = count_by_project(&rows);
        let tasks = rows
            .into_iter()
            .map(|row| CompletedEntry {
                content: row.task.content,
                completed_at: row.task.completed_at.unwrap_or_default(),
            })
            .collect::<Vec<_>>();

        CompletedStats {
            n_days,
            total: tasks.len(),
            per_project,
            tasks,
        }
    }

    pub fn render(&self) -> String {
        let mut report = line(Message::CompletedHeader(self.n_days));
        report += &line(Message::CompletedTotal(self.total));

        if self.total > 0 {
            report += &line(Message::CompletedByProject);
            for (project, count) in &self.per_project {
                report += &line(Message::CompletedProjectCount(project.clone(), *count));
            }

            report += "\n";
            report += &line(Message::CompletedListHeader);
            for task in &self.tasks {
                report += &line(Message::CompletedItem(task.content.clone(), task.completed_at.clone()));
            }
        }

        report
    }
}

fn count_by_project(rows: &[EnrichedTask]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let project = row.project_name.clone().unwrap_or_else(|| Message::NoProject.to_string());
        match positions.get(&project) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(project.clone(), counts.len());
                counts.push((project, 1));
            }
        }
    }

    // sort_by is stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Completed-task fragment for the last `n_days`, optionally for one project.
pub async fn completed_task_statistics<S: TaskSource>(
    source: &S,
    n_days: u32,
    project_name: Option<&str>,
    now: DateTime<Utc>,
) -> Result<String> {
    let tasks = source.fetch_completed_tasks(Some(window_start(now, n_days)), None).await?;
    let projects = source.fetch_projects().await?;

    Ok(CompletedStats::compute(tasks, &projects, project_name, n_days, now).render())
}
