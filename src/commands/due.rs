use super::connect;
use crate::{
    libs::due_soon::{due_soon_statistics, DEFAULT_LOOKAHEAD_DAYS},
    msg_print,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct DueArgs {
    #[arg(short, long, default_value_t = DEFAULT_LOOKAHEAD_DAYS, help = "Number of days to look ahead")]
    days: u32,
    #[arg(short, long, help = "Only tasks of this project")]
    project: Option<String>,
    #[arg(short, long, help = "Only tasks with this label")]
    label: Option<String>,
}

pub async fn cmd(due_args: DueArgs) -> Result<()> {
    let todoist = connect()?;
    let fragment = due_soon_statistics(
        &todoist,
        due_args.days,
        due_args.project.as_deref(),
        due_args.label.as_deref(),
        Utc::now(),
    )
    .await?;
    msg_print!(fragment);
    Ok(())
}
