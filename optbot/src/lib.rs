//! # optbot
//!
//! AdvanceOptionsGPT bot: CLI, configuration and wiring of the Telegram gateway to the
//! `/start` and `/ask` handlers.

pub mod assembly;
mod cli;
mod config;
mod facade;

pub use assembly::{build_llm_client, build_router};
pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use facade::run_bot;
