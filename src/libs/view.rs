use super::task::{Label, Project};
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn projects(projects: &[Project]) -> Result<()> {
        msg_print!(Message::ProjectsTitle, true);
        if projects.is_empty() {
            msg_info!(Message::NothingFound);
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row!["ID", "NAME"]);
        for project in projects {
            table.add_row(row![project.id, project.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn labels(labels: &[Label]) -> Result<()> {
        msg_print!(Message::LabelsTitle, true);
        if labels.is_empty() {
            msg_info!(Message::NothingFound);
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row!["ID", "NAME"]);
        for label in labels {
            table.add_row(row![label.id, label.name]);
        }
        table.printstd();

        Ok(())
    }
}
