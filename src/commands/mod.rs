pub mod chat;
pub mod due;
pub mod labels;
pub mod overdue;
pub mod projects;
pub mod report;

use crate::{
    api::Todoist,
    libs::{
        config::Config,
        report::{generate_report, ReportParams, FULL_REPORT_DAYS},
    },
    msg_print,
};
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Prepare a report")]
    Report(report::ReportArgs),
    #[command(about = "Prepare a report for the last 30 days")]
    Full,
    #[command(about = "Show overdue tasks")]
    Overdue(overdue::OverdueArgs),
    #[command(about = "Show tasks with an upcoming deadline")]
    Due(due::DueArgs),
    #[command(about = "List projects")]
    Projects,
    #[command(about = "List labels")]
    Labels,
    #[command(about = "Start an interactive chat session")]
    Chat,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Report(args) => report::cmd(args).await,
            Commands::Full => {
                let todoist = connect()?;
                let report = generate_report(&todoist, &ReportParams::for_days(FULL_REPORT_DAYS), Utc::now()).await?;
                msg_print!(report);
                Ok(())
            }
            Commands::Overdue(args) => overdue::cmd(args).await,
            Commands::Due(args) => due::cmd(args).await,
            Commands::Projects => projects::cmd().await,
            Commands::Labels => labels::cmd().await,
            Commands::Chat => chat::cmd().await,
        }
    }
}

/// Reads the configuration and builds the Todoist client.
pub(crate) fn connect() -> Result<Todoist> {
    let config = Config::read()?;
    Ok(Todoist::new(&config.todoist)?)
}
