use super::connect;
use crate::{api::TaskSource, libs::view::View};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let projects = connect()?.fetch_projects().await?;
    View::projects(&projects)
}
