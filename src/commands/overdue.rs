use super::connect;
use crate::{libs::overdue::overdue_statistics, msg_print};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct OverdueArgs {
    #[arg(short, long, help = "Only tasks of this project")]
    project: Option<String>,
    #[arg(short, long, help = "Only tasks with this label")]
    label: Option<String>,
}

pub async fn cmd(overdue_args: OverdueArgs) -> Result<()> {
    let todoist = connect()?;
    let fragment = overdue_statistics(
        &todoist,
        overdue_args.project.as_deref(),
        overdue_args.label.as_deref(),
        Utc::now(),
    )
    .await?;
    msg_print!(fragment);
    Ok(())
}
