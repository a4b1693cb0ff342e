#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Mutex;
use todoist_report::api::TaskSource;
use todoist_report::libs::error::ReportError;
use todoist_report::libs::task::{Label, Project, Task};

/// Fixed reference instant shared by the statistics tests.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn label(id: &str, name: &str) -> Label {
    Label {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// In-memory task source serving fixed snapshots.
///
/// Records every call so tests can assert which resources were fetched.
/// `failing_status` makes every call fail with a remote error.
#[derive(Default)]
pub struct MockSource {
    pub completed: Vec<Task>,
    pub active: Vec<Task>,
    pub projects: Vec<Project>,
    pub labels: Vec<Label>,
    pub failing_status: Option<u16>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl MockSource {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), ReportError> {
        self.calls.lock().unwrap().push(call);
        match self.failing_status {
            Some(status) => Err(ReportError::RemoteService {
                status,
                body: "service unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl TaskSource for MockSource {
    async fn fetch_completed_tasks(
        &self,
        _since: Option<DateTime<Utc>>,
        _until: Option<DateTime<Utc>>,
    ) -> Result<Vec<Task>, ReportError> {
        self.record("completed")?;
        Ok(self.completed.clone())
    }

    async fn fetch_active_tasks(&self) -> Result<Vec<Task>, ReportError> {
        self.record("active")?;
        Ok(self.active.clone())
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, ReportError> {
        self.record("projects")?;
        Ok(self.projects.clone())
    }

    async fn fetch_labels(&self) -> Result<Vec<Label>, ReportError> {
        self.record("labels")?;
        Ok(self.labels.clone())
    }
}

/// Two projects, a handful of completed tasks and a mixed active snapshot.
pub fn sample_source() -> MockSource {
    MockSource {
        completed: vec![
            Task::new("c1", "Write invoice").with_project("p1").with_completed_at("2024-05-09T10:00:00Z"),
            Task::new("c2", "Call supplier").with_project("p1").with_completed_at("2024-05-08T09:30:00Z"),
            Task::new("c3", "Fix the sink").with_project("p2").with_completed_at("2024-05-07T18:00:00Z"),
            Task::new("c4", "Read a book").with_completed_at("2024-05-09T21:00:00Z"),
            Task::new("c5", "Old task").with_project("p1").with_completed_at("2024-04-01T08:00:00Z"),
        ],
        active: vec![
            Task::new("a1", "Pay rent").with_project("p2").with_labels(&["l1"]).with_due("2024-05-01"),
            Task::new("a2", "Send report").with_project("p1").with_labels(&["l1", "l2"]).with_due("2024-05-11"),
            Task::new("a3", "Someday").with_project("p1"),
            Task::new("a4", "Broken date").with_project("p1").with_due("next tuesday"),
            Task::new("a5", "Standup notes").with_project("p1").with_due("2024-05-10T11:59:59Z"),
            Task::new("a6", "Far away").with_project("p2").with_due("2024-06-20"),
        ],
        projects: vec![project("p1", "Work"), project("p2", "Home")],
        labels: vec![label("l1", "urgent"), label("l2", "marketing")],
        ..Default::default()
    }
}
