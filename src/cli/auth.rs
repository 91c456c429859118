use gsheets_model::{Result, SheetsConfig, SheetsModel, clear_tokens};
use tracing::info;

pub async fn execute(reset: bool) -> Result<()> {
    let config = SheetsConfig::load()?;

    if reset {
        clear_tokens(&config)?;
    }

    let model = SheetsModel::new(&config).await?;
    model.authorize().await?;

    info!(user_id = model.user_id(), "Google authentication verified");

    Ok(())
}
