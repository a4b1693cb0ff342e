//! In-memory relational operations over fetched snapshots.
//!
//! Joins build a hash index over the "one" side (projects, labels) and map
//! every task through it; an index miss resolves to `None` rather than an
//! error. Filters are exact, case-sensitive name matches.

use crate::libs::task::{Label, Project, Task};
use std::collections::{HashMap, HashSet};

/// A task with its project name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTask {
    pub task: Task,
    /// `None` when the task has no project or the project was not in the snapshot.
    pub project_name: Option<String>,
}

pub trait ProjectJoin {
    /// Left join on `project_id`.
    fn join_projects(self, projects: &[Project]) -> Vec<EnrichedTask>;
}

impl ProjectJoin for Vec<Task> {
    fn join_projects(self, projects: &[Project]) -> Vec<EnrichedTask> {
        let index: HashMap<&str, &str> = projects.iter().map(|p| (p.id.as_str(), p.name.as_str())).collect();

        self.into_iter()
            .map(|task| {
                let project_name = task
                    .project_id
                    .as_deref()
                    .and_then(|id| index.get(id))
                    .map(|name| name.to_string());
                EnrichedTask { task, project_name }
            })
            .collect()
    }
}

pub trait TaskFilters {
    /// Keeps tasks whose resolved project name equals `name`.
    fn filter_by_project(self, name: &str) -> Self;

    /// Keeps tasks carrying a label whose resolved name equals `name`.
    ///
    /// Runs as expand, join, filter: every task becomes one row per distinct
    /// label id (a task without labels becomes a single unlabelled row), each
    /// row is left-joined against `labels` by id, and only rows whose label
    /// name matches survive. Label names are unique per account, so a task
    /// matches through at most one row.
    fn filter_by_label(self, labels: &[Label], name: &str) -> Self;
}

impl TaskFilters for Vec<EnrichedTask> {
    fn filter_by_project(self, name: &str) -> Self {
        self.into_iter()
            .filter(|row| row.project_name.as_deref() == Some(name))
            .collect()
    }

    fn filter_by_label(self, labels: &[Label], name: &str) -> Self {
        // Expand
        let expanded: Vec<(EnrichedTask, Option<String>)> = self
            .into_iter()
            .flat_map(|row| {
                let label_ids: Vec<Option<String>> = if row.task.labels.is_empty() {
                    vec![None]
                } else {
                    let mut seen = HashSet::new();
                    row.task
                        .labels
                        .iter()
                        .filter(|id| seen.insert(id.as_str()))
                        .cloned()
                        .map(Some)
                        .collect()
                };
                label_ids.into_iter().map(move |label_id| (row.clone(), label_id))
            })
            .collect();

        // Join
        let index: HashMap<&str, &str> = labels.iter().map(|l| (l.id.as_str(), l.name.as_str())).collect();
        let joined = expanded.into_iter().map(|(row, label_id)| {
            let label_name = label_id.as_deref().and_then(|id| index.get(id).copied());
            (row, label_name)
        });

        // Filter
        joined
            .filter(|(_, label_name)| *label_name == Some(name))
            .map(|(row, _)| row)
            .collect()
    }
}

/// Project filter, then label filter; a `None` name leaves that dimension alone.
pub fn apply_filters(
    rows: Vec<EnrichedTask>,
    project_name: Option<&str>,
    labels: &[Label],
    label_name: Option<&str>,
) -> Vec<EnrichedTask> {
    let rows = match project_name {
        Some(name) => rows.filter_by_project(name),
        None => rows,
    };
    match label_name {
        Some(name) => rows.filter_by_label(labels, name),
        None => rows,
    }
}
