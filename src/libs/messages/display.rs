//! Display implementation for application messages.
//!
//! All user-facing text lives here, including every line of the report
//! fragments, so wording changes never touch the aggregation code.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::ReportHeader(n_days) => format!("Report for the last {} days:", n_days),

            // === COMPLETED TASK MESSAGES ===
            Message::CompletedHeader(n_days) => format!("Completed task statistics for the last {} days:", n_days),
            Message::CompletedTotal(count) => format!("— Total tasks completed: {}", count),
            Message::CompletedByProject => "— By project:".to_string(),
            Message::CompletedProjectCount(project, count) => format!("  Project '{}': {} task(s)", project, count),
            Message::NoProject => "(no project)".to_string(),
            Message::CompletedListHeader => "— Completed tasks:".to_string(),
            Message::CompletedItem(content, completed_at) => format!("  - {} (completed: {})", content, completed_at),

            // === ACTIVE TASK MESSAGES ===
            Message::NoActiveTasks => "— No active tasks.".to_string(),
            Message::OverdueTotal(count) => format!("— Overdue tasks: {}", count),
            Message::OverdueListHeader => "— Overdue task list:".to_string(),
            Message::OverdueItem(content, due) => format!("  - {} (deadline was: {})", content, due),
            Message::DueSoonTotal(days, count) => format!("— Tasks due within the next {} days: {}", days, count),
            Message::DueSoonListHeader => "— Tasks with the nearest deadline:".to_string(),
            Message::DueSoonItem(content, due) => format!("  - {} (deadline: {})", content, due),

            // === PRODUCTIVITY MESSAGES ===
            Message::Recommendation => {
                "Recommendation: keep watching task priorities and try to finish the most important ones first.".to_string()
            }
            Message::RecommendationNoTasks => {
                "— No tasks have been completed yet. Try focusing on small but important tasks to build up momentum."
                    .to_string()
            }

            // === CONVERSATION MESSAGES ===
            Message::Greeting => {
                "Hi! I analyse the tasks in your Todoist account. Send /help to see the available commands.".to_string()
            }
            Message::Help => [
                "/start - Start the assistant and get a greeting.",
                "/help - List the available commands.",
                "/tasks - Report on tasks over the last N days.",
                "/tasks_by_project - Report for one project.",
                "/tasks_by_label - Report for one label.",
                "/full_report - Full statistics for the last 30 days.",
            ]
            .join("\n"),
            Message::PromptDays => "Choose the number of days to analyse or enter it manually:".to_string(),
            Message::PromptDaysManual => "Enter the number of days:".to_string(),
            Message::InvalidDays => "Please enter a valid number.".to_string(),
            Message::PromptProject => "Choose a project to analyse:".to_string(),
            Message::InvalidProject => "Choose a project from the list.".to_string(),
            Message::PromptLabel => "Choose a label to analyse:".to_string(),
            Message::InvalidLabel => "Choose a label from the list.".to_string(),
            Message::ReportFailed => "The report could not be generated right now. Please try again later.".to_string(),
            Message::UnknownInput => "I did not understand that. Send /help to see the available commands.".to_string(),
            Message::DaysOption(days) => format!("{} days", days),
            Message::EnterManually => "Enter manually".to_string(),
            Message::ChatStarted => "Chat started. Type /help for commands, /quit to leave. Press Esc in a menu to type instead.".to_string(),
            Message::ChatPrompt => "You".to_string(),
            Message::ChatFinished => "Bye!".to_string(),

            // === LISTING MESSAGES ===
            Message::ProjectsTitle => "Projects".to_string(),
            Message::LabelsTitle => "Labels".to_string(),
            Message::NothingFound => "Nothing found.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::InvalidConfigValue(variable, value) => format!("Invalid value '{}' for {}", value, variable),

            // === REMOTE DATA MESSAGES ===
            Message::RecordSkipped(id, reason) => format!("Record {} left out: {}", id, reason),
            Message::RecordDecodeFailed(kind, error) => format!("Skipping malformed {} record: {}", kind, error),
            Message::ReportFailedWithError(error) => format!("Failed to build report: {}", error),
        };

        write!(f, "{}", text)
    }
}
