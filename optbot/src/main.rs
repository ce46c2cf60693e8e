//! optbot: entry point. Loads .env, parses the CLI, initializes logging and runs the bot.

use anyhow::Result;
use clap::Parser;
use optbot::{load_config, run_bot, BotConfig, Cli, Commands};
use optbot_core::init_tracing;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&BotConfig::log_file_from_env())?;

    match cli.command {
        Commands::Run { token } => {
            let config = match load_config(token) {
                Ok(config) => config,
                Err(e) => {
                    error!(error = %format!("{:#}", e), "Failed to load configuration");
                    return Err(e);
                }
            };
            if let Err(e) = run_bot(config).await {
                error!(error = %format!("{:#}", e), "Bot stopped with error");
                return Err(e);
            }
            Ok(())
        }
    }
}
