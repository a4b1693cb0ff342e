//! # todoist-report
//!
//! Task reports for a Todoist account: what was completed recently, what is
//! overdue, what is due in the next few days.
//!
//! ## Features
//!
//! - **Remote Data**: Completed tasks, active tasks, projects and labels over the Todoist API
//! - **Joins and Filters**: In-memory project/label resolution with exact-name filters
//! - **Statistics**: Completed, overdue, due-soon and productivity fragments
//! - **Conversations**: Transport-independent chat sessions with menus and retry prompts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todoist_report::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
