use clap::Subcommand;
use gsheets_model::{Result, SheetsConfig};
use tracing::{debug, info};

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show configuration and token paths
    Paths,
}

impl ShowResource {
    pub async fn execute(&self) -> Result<()> {
        match self {
            ShowResource::Paths => show_paths(),
        }
    }
}

fn show_paths() -> Result<()> {
    let config_path = SheetsConfig::config_file()?;
    info!(path = ?config_path, "Config path");

    // The token path comes from the config file, which may not exist yet.
    match SheetsConfig::load() {
        Ok(config) => info!(path = ?config.token_path(), "Token path"),
        Err(e) => debug!("Token path not available: {}", e),
    }

    Ok(())
}
