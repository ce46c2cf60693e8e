//! # optbot-core
//!
//! Core types and traits for the AdvanceOptionsGPT bot: [`Bot`], [`CommandHandler`], [`Command`],
//! message and user types, message splitting, and tracing initialization.
//! Transport-agnostic; used by command-router, ask-handlers and optbot-telegram.

pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
pub mod text;
pub mod types;

pub use bot::Bot;
pub use command::Command;
pub use error::{BotError, Result};
pub use logger::{init_tracing, DEFAULT_LOG_FILE};
pub use text::{split_message, MAX_MESSAGE_LEN};
pub use types::{Chat, CommandHandler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
