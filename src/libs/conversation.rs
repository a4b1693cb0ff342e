//! Conversational front-end logic, independent of any chat transport.
//!
//! Each conversation id owns a small state machine. Commands always reset
//! the pending state before acting; free text is interpreted according to
//! what the conversation is currently waiting for.
//!
//! ```text
//!            /tasks             day count / menu item
//!   Idle ───────────────▶ WaitingForDays ─────────────────▶ report ─▶ Idle
//!     │ /tasks_by_project                     project from menu
//!     ├───────────────────▶ WaitingForProject ────────────▶ report ─▶ Idle
//!     │ /tasks_by_label                       label from menu
//!     └───────────────────▶ WaitingForLabel ──────────────▶ report ─▶ Idle
//! ```
//!
//! Invalid input keeps the state and answers with a retry prompt. A report
//! that cannot be built is answered with a generic failure notice.

use crate::api::TaskSource;
use crate::libs::error::ReportError;
use crate::libs::messages::Message;
use crate::libs::report::{generate_report, ReportParams, FULL_REPORT_DAYS};
use crate::msg_error;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Built-in project menu.
pub const PROJECTS: [&str; 3] = ["Cherrypick", "Management planning", "Личный ассистент основа"];

/// Built-in label menu.
pub const LABELS: [&str; 4] = ["cherrypick.agency", "marketing", "waiting_list", "support_task"];

/// Day counts offered by the day menu.
pub const DAY_OPTIONS: [u32; 3] = [7, 14, 30];

/// Longest message a chat transport accepts, in characters.
pub const MESSAGE_LIMIT: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    WaitingForDays,
    WaitingForProject,
    WaitingForLabel,
}

/// What to send back: one or more message chunks, plus an optional menu
/// of choices the user can pick from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub chunks: Vec<String>,
    pub menu: Vec<String>,
}

impl Reply {
    fn text(msg: Message) -> Self {
        Reply {
            chunks: vec![msg.to_string()],
            menu: Vec::new(),
        }
    }

    fn with_menu(msg: Message, menu: Vec<String>) -> Self {
        Reply {
            chunks: vec![msg.to_string()],
            menu,
        }
    }

    fn report(text: &str) -> Self {
        Reply {
            chunks: split_message(text, MESSAGE_LIMIT),
            menu: Vec::new(),
        }
    }
}

/// Splits `text` into chunks of at most `limit` characters.
///
/// Works on characters, so a multi-byte character is never cut in half.
/// Empty text yields no chunks.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(limit.max(1)).map(|chunk| chunk.iter().collect()).collect()
}

/// Day menu: one entry per [`DAY_OPTIONS`] value plus the manual entry.
pub fn day_menu() -> Vec<String> {
    DAY_OPTIONS
        .iter()
        .map(|days| Message::DaysOption(*days).to_string())
        .chain(std::iter::once(Message::EnterManually.to_string()))
        .collect()
}

/// Interprets a day-count answer: a day-menu entry or a non-negative integer.
pub fn parse_days(text: &str) -> Result<u32, ReportError> {
    let text = text.trim();
    if let Some(days) = DAY_OPTIONS.iter().find(|days| Message::DaysOption(**days).to_string() == text) {
        return Ok(*days);
    }
    text.parse::<u32>()
        .map_err(|_| ReportError::InvalidFilterInput(text.to_string()))
}

/// Accepts `text` only if it is one of the `menu` entries.
pub fn select_from_menu(menu: &[String], text: &str) -> Result<String, ReportError> {
    let text = text.trim();
    menu.iter()
        .find(|item| item.as_str() == text)
        .cloned()
        .ok_or_else(|| ReportError::InvalidFilterInput(text.to_string()))
}

/// Sessions for every conversation, backed by one task source.
pub struct Conversations<S> {
    source: S,
    projects: Vec<String>,
    labels: Vec<String>,
    sessions: HashMap<String, ConversationState>,
}

impl<S: TaskSource> Conversations<S> {
    pub fn new(source: S, projects: Vec<String>, labels: Vec<String>) -> Self {
        Conversations {
            source,
            projects,
            labels,
            sessions: HashMap::new(),
        }
    }

    pub fn state(&self, conversation_id: &str) -> ConversationState {
        self.sessions.get(conversation_id).copied().unwrap_or_default()
    }

    fn set_state(&mut self, conversation_id: &str, state: ConversationState) {
        match state {
            ConversationState::Idle => {
                self.sessions.remove(conversation_id);
            }
            state => {
                self.sessions.insert(conversation_id.to_string(), state);
            }
        }
    }

    /// Handles one incoming message, with reports computed as of now.
    pub async fn handle(&mut self, conversation_id: &str, text: &str) -> Reply {
        self.handle_at(conversation_id, text, Utc::now()).await
    }

    pub async fn handle_at(&mut self, conversation_id: &str, text: &str, now: DateTime<Utc>) -> Reply {
        let text = text.trim();

        if let Some(command) = text.strip_prefix('/') {
            // "/tasks@some_bot 14": bot mention and arguments are not part of the command
            let command = command
                .split_whitespace()
                .next()
                .and_then(|word| word.split('@').next())
                .unwrap_or_default();
            self.set_state(conversation_id, ConversationState::Idle);
            return self.command(conversation_id, command, now).await;
        }

        match self.state(conversation_id) {
            ConversationState::Idle => Reply::text(Message::UnknownInput),
            ConversationState::WaitingForDays => {
                if text == Message::EnterManually.to_string() {
                    return Reply::text(Message::PromptDaysManual);
                }
                match parse_days(text) {
                    Ok(days) => {
                        self.set_state(conversation_id, ConversationState::Idle);
                        self.report(ReportParams::for_days(days), now).await
                    }
                    Err(_) => Reply::text(Message::InvalidDays),
                }
            }
            ConversationState::WaitingForProject => match select_from_menu(&self.projects, text) {
                Ok(project) => {
                    self.set_state(conversation_id, ConversationState::Idle);
                    self.report(ReportParams::for_project(&project), now).await
                }
                Err(_) => Reply::with_menu(Message::InvalidProject, self.projects.clone()),
            },
            ConversationState::WaitingForLabel => match select_from_menu(&self.labels, text) {
                Ok(label) => {
                    self.set_state(conversation_id, ConversationState::Idle);
                    self.report(ReportParams::for_label(&label), now).await
                }
                Err(_) => Reply::with_menu(Message::InvalidLabel, self.labels.clone()),
            },
        }
    }

    async fn command(&mut self, conversation_id: &str, command: &str, now: DateTime<Utc>) -> Reply {
        match command {
            "start" => Reply::text(Message::Greeting),
            "help" => Reply::text(Message::Help),
            "tasks" => {
                self.set_state(conversation_id, ConversationState::WaitingForDays);
                Reply::with_menu(Message::PromptDays, day_menu())
            }
            "tasks_by_project" => {
                self.set_state(conversation_id, ConversationState::WaitingForProject);
                Reply::with_menu(Message::PromptProject, self.projects.clone())
            }
            "tasks_by_label" => {
                self.set_state(conversation_id, ConversationState::WaitingForLabel);
                Reply::with_menu(Message::PromptLabel, self.labels.clone())
            }
            "full_report" => self.report(ReportParams::for_days(FULL_REPORT_DAYS), now).await,
            _ => Reply::text(Message::UnknownInput),
        }
    }

    async fn report(&self, params: ReportParams, now: DateTime<Utc>) -> Reply {
        match generate_report(&self.source, &params, now).await {
            Ok(report) => Reply::report(&report),
            Err(e) => {
                msg_error!(Message::ReportFailedWithError(format!("{:#}", e)));
                Reply::text(Message::ReportFailed)
            }
        }
    }
}
