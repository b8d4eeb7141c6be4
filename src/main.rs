mod cli;
mod config;
mod github;
mod http;
mod logger;
mod transfer;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use cli::Cli;
use config::{FileConfig, TransferConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
            _ => std::process::exit(1),
        }
    });

    logger::init(cli.verbose)?;

    let file_config = FileConfig::load().await.context("Cannot load config file")?;

    let config = match TransferConfig::resolve(cli, file_config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    };

    log::info!(
        "Transferring releases from {} to {}",
        config.source,
        config.target
    );

    transfer::run(&config)
        .await
        .context("Cannot transfer the releases")?;

    Ok(())
}
