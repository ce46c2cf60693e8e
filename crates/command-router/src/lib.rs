//! # command-router
//!
//! [`CommandRouter`]: an explicit, immutable map from command name to [`CommandHandler`].
//! Each inbound message is parsed into a [`Command`] and handed to exactly one handler;
//! unknown commands and plain text are ignored.

use optbot_core::{Command, CommandHandler, HandlerResponse, Message, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Clone, Default)]
pub struct CommandRouter {
    handlers: BTreeMap<String, Arc<dyn CommandHandler>>,
    /// Insertion order, for the gateway command menu.
    order: Vec<String>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under its [`CommandHandler::command`] name. A later registration
    /// for the same name replaces the earlier one.
    pub fn register(mut self, handler: Arc<dyn CommandHandler>) -> Self {
        let name = handler.command().to_ascii_lowercase();
        if self.handlers.insert(name.clone(), handler).is_some() {
            warn!(command = %name, "Command handler replaced");
        } else {
            self.order.push(name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// `(name, description)` pairs in registration order.
    pub fn commands(&self) -> Vec<(String, String)> {
        self.order
            .iter()
            .filter_map(|name| {
                self.handlers
                    .get(name)
                    .map(|h| (name.clone(), h.description().to_string()))
            })
            .collect()
    }

    /// Parses `message.content` and dispatches it. `bot_username` filters `/cmd@other_bot`.
    #[instrument(skip(self, message))]
    pub async fn handle(
        &self,
        message: &Message,
        bot_username: Option<&str>,
    ) -> Result<HandlerResponse> {
        match Command::parse(&message.content, bot_username) {
            Some(command) => self.dispatch(message, &command).await,
            None => {
                debug!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    "step: not a command for this bot, ignored"
                );
                Ok(HandlerResponse::Ignore)
            }
        }
    }

    /// Invokes the handler registered for `command.name`, or returns `Ignore`.
    pub async fn dispatch(&self, message: &Message, command: &Command) -> Result<HandlerResponse> {
        let Some(handler) = self.handlers.get(&command.name) else {
            debug!(
                user_id = message.user.id,
                command = %command.name,
                "step: unknown command, ignored"
            );
            return Ok(HandlerResponse::Ignore);
        };

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            command = %command.name,
            arg_count = command.args.len(),
            "step: dispatching command"
        );

        let response = handler.handle(message, command).await?;

        let (response_type, reply_len) = match &response {
            HandlerResponse::Reply(s) => ("Reply", Some(s.chars().count())),
            HandlerResponse::Stop => ("Stop", None),
            HandlerResponse::Ignore => ("Ignore", None),
        };
        info!(
            user_id = message.user.id,
            command = %command.name,
            response_type = %response_type,
            reply_len = ?reply_len,
            "step: command done"
        );

        Ok(response)
    }
}
