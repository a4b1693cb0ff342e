use std::process::ExitCode;
use todoist_report::commands::Cli;
use todoist_report::libs::logging;
use todoist_report::msg_error;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
