//! Task, project and label records as delivered by the task service.
//!
//! Decoding is deliberately forgiving about identifiers (the service has
//! used both strings and integers) and about the shape of `due`: a due value
//! that is not an object with a string `date` is treated as absent.

use super::error::ReportError;
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub content: String,
    #[serde(default, deserialize_with = "optional_opaque_id")]
    pub project_id: Option<String>,
    #[serde(default, deserialize_with = "opaque_ids")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "lenient_due")]
    pub due: Option<Due>,
    #[serde(default, deserialize_with = "flag")]
    pub checked: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Due {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Label {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
}

impl Task {
    pub fn new(id: &str, content: &str) -> Self {
        Task {
            id: id.to_string(),
            content: content.to_string(),
            project_id: None,
            labels: Vec::new(),
            due: None,
            checked: false,
            completed_at: None,
        }
    }

    pub fn with_project(mut self, project_id: &str) -> Self {
        self.project_id = Some(project_id.to_string());
        self
    }

    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn with_due(mut self, date: &str) -> Self {
        self.due = Some(Due {
            date: Some(date.to_string()),
        });
        self
    }

    pub fn with_completed_at(mut self, completed_at: &str) -> Self {
        self.completed_at = Some(completed_at.to_string());
        self
    }

    pub fn is_completed(&self) -> bool {
        self.checked || self.completed_at.is_some()
    }

    /// The due date exactly as the service sent it.
    pub fn due_date(&self) -> Option<&str> {
        self.due.as_ref().and_then(|due| due.date.as_deref())
    }

    /// Due instant in UTC. `None` when the task has no due date or it cannot be parsed.
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        absorb(self, parse_instant(self.due_date()?, "due.date"))
    }

    /// Completion instant in UTC. `None` when absent or unparseable.
    pub fn completed_at_utc(&self) -> Option<DateTime<Utc>> {
        absorb(self, parse_instant(self.completed_at.as_deref()?, "completed_at"))
    }
}

fn absorb(task: &Task, parsed: Result<DateTime<Utc>, ReportError>) -> Option<DateTime<Utc>> {
    match parsed {
        Ok(at) => Some(at),
        Err(e) => {
            msg_debug!(Message::RecordSkipped(task.id.clone(), e.to_string()));
            None
        }
    }
}

/// Parses a service timestamp into UTC.
///
/// Accepts RFC 3339 (any offset), floating date-times (read as UTC) and plain
/// dates (UTC midnight).
pub fn parse_instant(raw: &str, field: &'static str) -> Result<DateTime<Utc>, ReportError> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(ReportError::malformed(field, raw))
}

fn id_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    id_from_value(Value::deserialize(deserializer)?).ok_or_else(|| de::Error::custom("expected a string or integer id"))
}

fn optional_opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(id_from_value))
}

fn opaque_ids<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.into_iter().filter_map(id_from_value).collect())
}

fn lenient_due<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Due>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value::<Due>(v).ok()))
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}
