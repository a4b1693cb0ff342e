//! Core library modules.
//!
//! ## Layout
//!
//! - **Data model**: `task`, `error`
//! - **Joins and filters**: `join`
//! - **Statistics**: `completed`, `overdue`, `productivity`, `due_soon`
//! - **Composition**: `report`
//! - **Front-end support**: `conversation`, `view`, `messages`
//! - **Process set-up**: `config`, `logging`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todoist_report::api::Todoist;
//! use todoist_report::libs::config::Config;
//! use todoist_report::libs::report::{generate_report, ReportParams};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let todoist = Todoist::new(&config.todoist)?;
//! let report = generate_report(&todoist, &ReportParams::for_project("Work"), chrono::Utc::now()).await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod completed;
pub mod config;
pub mod conversation;
pub mod due_soon;
pub mod error;
pub mod join;
pub mod logging;
pub mod messages;
pub mod overdue;
pub mod productivity;
pub mod report;
pub mod task;
pub mod view;
