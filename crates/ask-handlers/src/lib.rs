//! # ask-handlers
//!
//! The bot's two commands: [`StartHandler`] (`/start`) and [`AskHandler`] (`/ask`).
//! Both hold an `Arc<dyn Bot>` and send their own replies; register them with a
//! `command_router::CommandRouter`.

mod ask_handler;
mod start_handler;

pub use ask_handler::{AskHandler, GUIDANCE_MESSAGE, MSG_REQUEST_FAILED, MSG_SEND_FAILED};
pub use start_handler::{StartHandler, WELCOME_MESSAGE};
