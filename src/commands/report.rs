use super::connect;
use crate::{
    libs::report::{generate_report, ReportParams, DEFAULT_N_DAYS},
    msg_print,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(short, long, default_value_t = DEFAULT_N_DAYS, help = "Number of days to look back")]
    days: u32,
    #[arg(short, long, help = "Only tasks of this project")]
    project: Option<String>,
    #[arg(short, long, help = "Only active tasks with this label")]
    label: Option<String>,
}

pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let todoist = connect()?;
    let params = ReportParams {
        n_days: report_args.days,
        project_name: report_args.project,
        label_name: report_args.label,
        ..Default::default()
    };

    let report = generate_report(&todoist, &params, Utc::now()).await?;
    msg_print!(report);
    Ok(())
}
