use async_trait::async_trait;
use optbot_core::{Bot as CoreBot, Command, CommandHandler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

/// Fixed greeting for `/start`.
pub const WELCOME_MESSAGE: &str = "Welcome to AdvanceOptionsGPT-Bot!\nUse /ask to get answers.";

/// `/start`: replies with [`WELCOME_MESSAGE`]. Never contacts the LLM.
#[derive(Clone)]
pub struct StartHandler {
    bot: Arc<dyn CoreBot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn CoreBot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CommandHandler for StartHandler {
    fn command(&self) -> &str {
        "start"
    }

    fn description(&self) -> &str {
        "Show the welcome message"
    }

    #[instrument(skip(self, message, _command))]
    async fn handle(&self, message: &Message, _command: &Command) -> Result<HandlerResponse> {
        self.bot.reply_to(message, WELCOME_MESSAGE).await?;
        info!(user_id = message.user.id, chat_id = message.chat.id, "Welcome message sent");
        Ok(HandlerResponse::Reply(WELCOME_MESSAGE.to_string()))
    }
}
