mod append;
mod auth;
mod get;
mod show;

use clap::{Parser, Subcommand};
use gsheets_model::Result;

pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "gsheets-model")]
#[command(about = "Append to and read from Google Sheets spreadsheets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Append(args) => args.execute().await,
            Commands::Get(args) => args.execute().await,
            Commands::Auth { reset } => auth::execute(*reset).await,
            Commands::Show { resource } => resource.execute().await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a row of values to a spreadsheet
    Append(append::AppendArgs),
    /// Read values from one or more ranges of a spreadsheet
    Get(get::GetArgs),
    /// Verify Google authentication, running the consent flow if needed
    Auth {
        /// Discard cached tokens before authenticating
        #[arg(long)]
        reset: bool,
    },
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}
