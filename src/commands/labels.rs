use super::connect;
use crate::{api::TaskSource, libs::view::View};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let labels = connect()?.fetch_labels().await?;
    View::labels(&labels)
}
