use anyhow::{Context, Result};
use clap::Parser;

use storefront_cli::{
    cli::{Cli, Commands},
    commands, logging,
};
use storefront_config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // defaults < file < env; flags are applied per command below
    let loaded =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    logging::init(cli.level_filter(), &loaded.config.logging.level);
    loaded.log();
    let mut config = loaded.config;

    match cli.command.unwrap_or_default() {
        Commands::Serve { host, port, db } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(db) = db {
                config.database.path = db;
            }
            commands::serve::execute(config).await
        }
        Commands::Seed { db, force } => {
            if let Some(db) = db {
                config.database.path = db;
            }
            commands::seed::execute(&config.database, force).await
        }
        Commands::Config { format } => commands::config::execute(&config, format),
    }
}
