//! Report composition.
//!
//! A report is the header line followed by four fragments, always in this
//! order:
//!
//! 1. completed tasks (`n_days`, project filter)
//! 2. overdue tasks (project and label filters)
//! 3. productivity recommendation (`n_days`, project filter)
//! 4. tasks due soon (`lookahead_days`, project and label filters)
//!
//! The completed-task and recommendation fragments never see the label
//! filter: the completed feed has no label data.
//!
//! Fetches run one after another; any failure aborts the whole report, so a
//! caller never receives a partial one.

use crate::api::TaskSource;
use crate::libs::completed::completed_task_statistics;
use crate::libs::due_soon::{due_soon_statistics, DEFAULT_LOOKAHEAD_DAYS};
use crate::libs::messages::{line, Message};
use crate::libs::overdue::overdue_statistics;
use crate::libs::productivity::productivity_recommendation;
use anyhow::Result;
use chrono::{DateTime, Utc};

pub const DEFAULT_N_DAYS: u32 = 7;
pub const FULL_REPORT_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportParams {
    pub n_days: u32,
    pub project_name: Option<String>,
    pub label_name: Option<String>,
    pub lookahead_days: u32,
}

impl Default for ReportParams {
    fn default() -> Self {
        ReportParams {
            n_days: DEFAULT_N_DAYS,
            project_name: None,
            label_name: None,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
        }
    }
}

impl ReportParams {
    pub fn for_days(n_days: u32) -> Self {
        ReportParams {
            n_days,
            ..Default::default()
        }
    }

    pub fn for_project(project_name: &str) -> Self {
        ReportParams {
            project_name: Some(project_name.to_string()),
            ..Default::default()
        }
    }

    pub fn for_label(label_name: &str) -> Self {
        ReportParams {
            label_name: Some(label_name.to_string()),
            ..Default::default()
        }
    }
}

/// Builds the full report as of `now`.
///
/// # Errors
///
/// Returns the first fetch failure; see [`crate::libs::error::ReportError`].
pub async fn generate_report<S: TaskSource>(source: &S, params: &ReportParams, now: DateTime<Utc>) -> Result<String> {
    let project_name = params.project_name.as_deref();
    let label_name = params.label_name.as_deref();

    let mut report = line(Message::ReportHeader(params.n_days));
    report += &completed_task_statistics(source, params.n_days, project_name, now).await?;
    report += &overdue_statistics(source, project_name, label_name, now).await?;
    report += &productivity_recommendation(source, params.n_days, project_name, now).await?;
    report += &due_soon_statistics(source, params.lookahead_days, project_name, label_name, now).await?;

    tracing::info!(
        n_days = params.n_days,
        project = project_name.unwrap_or("-"),
        label = label_name.unwrap_or("-"),
        length = report.len(),
        "report generated"
    );
    Ok(report)
}
