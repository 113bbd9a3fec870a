mod error;
mod fetcher;
mod parse;
mod record;

use crate::fetcher::{FetchConfig, ObservationFetcher};
use crate::parse::Args;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse()?;
    // Initialize logger
    env_logger::init();

    // Credential check happens before any request goes out
    let config = FetchConfig::from_env(&args)?;

    let fetcher = ObservationFetcher::new(config);
    fetcher.fetch_observations().await?;

    Ok(())
}
