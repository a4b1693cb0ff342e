//! Error taxonomy for report generation.
//!
//! Remote and transport failures are fatal to the report being built.
//! Malformed record fields are absorbed by the caller (the record is simply
//! left out of date-dependent statistics). Invalid filter input never reaches
//! the fetchers: the conversation layer turns it into a retry prompt.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// The task service answered with a non-success status.
    #[error("Remote service responded with status {status}: {body}")]
    RemoteService { status: u16, body: String },

    /// The request never produced a usable response (connect, timeout, decode).
    #[error("Request to remote service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A record field could not be interpreted.
    #[error("Malformed {field}: '{value}'")]
    MalformedData { field: &'static str, value: String },

    #[error("Invalid filter input: {0}")]
    InvalidFilterInput(String),

    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),
}

impl ReportError {
    pub fn malformed(field: &'static str, value: &str) -> Self {
        ReportError::MalformedData {
            field,
            value: value.to_owned(),
        }
    }

    /// Status code of a remote failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ReportError::RemoteService { status, .. } => Some(*status),
            ReportError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
