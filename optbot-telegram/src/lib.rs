//! # optbot-telegram
//!
//! Telegram gateway layer: adapters, [`optbot_core::Bot`] implementation, connectivity config, REPL runner.
//! Only Telegram connectivity and command dispatch live here; no LLM logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;
