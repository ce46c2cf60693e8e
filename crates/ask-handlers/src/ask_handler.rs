//! `/ask <question>`: forwards the question to the LLM and relays the answer, split into
//! gateway-sized chunks. Every failure ends in a plain-language reply; nothing propagates
//! the provider's raw error text to the user.

use async_trait::async_trait;
use llm_client::{CompletionError, LlmClient};
use optbot_core::{
    split_message, Bot as CoreBot, Command, CommandHandler, HandlerResponse, Message, Result,
    MAX_MESSAGE_LEN,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Sent for `/ask` without a question. The LLM is not called.
pub const GUIDANCE_MESSAGE: &str = "Please enter a query. Example:\n/ask What is OI in options?";

// --- User-facing fallback messages ---
pub const MSG_REQUEST_FAILED: &str =
    "Sorry, something went wrong processing your request. Please try again later.";
pub const MSG_SEND_FAILED: &str = "Sorry, something went wrong while sending the reply.";

#[derive(Clone)]
pub struct AskHandler {
    llm_client: Arc<dyn LlmClient>,
    bot: Arc<dyn CoreBot>,
    max_message_len: usize,
}

impl AskHandler {
    pub fn new(llm_client: Arc<dyn LlmClient>, bot: Arc<dyn CoreBot>) -> Self {
        Self {
            llm_client,
            bot,
            max_message_len: MAX_MESSAGE_LEN,
        }
    }

    /// Overrides the per-message length limit (characters). Values below 1 are treated as 1.
    pub fn with_max_message_len(mut self, max_message_len: usize) -> Self {
        self.max_message_len = max_message_len.max(1);
        self
    }

    /// Best-effort fallback reply; a failure here is only logged.
    async fn send_fallback_and_stop(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        if let Err(e) = self.bot.reply_to(message, text).await {
            warn!(error = %e, user_id = message.user.id, "Failed to send fallback message");
        }
        Ok(HandlerResponse::Stop)
    }

    async fn send_answer(&self, message: &Message, answer: &str) -> Result<HandlerResponse> {
        let chunks = split_message(answer, self.max_message_len);
        let total = chunks.len();
        for (index, chunk) in chunks.iter().enumerate() {
            if let Err(e) = self.bot.reply_to(message, chunk).await {
                error!(
                    error = %e,
                    user_id = message.user.id,
                    chunk = index + 1,
                    chunks = total,
                    "Failed to send LLM response"
                );
                return self.send_fallback_and_stop(message, MSG_SEND_FAILED).await;
            }
        }
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            answer_len = answer.chars().count(),
            chunks = total,
            "LLM response sent"
        );
        Ok(HandlerResponse::Reply(answer.to_string()))
    }

    fn log_completion_error(message: &Message, e: &CompletionError) {
        error!(user_id = message.user.id, error = %e, "Failed to get LLM response");
        if let CompletionError::Provider(detail) = e {
            if detail.contains("401") || detail.contains("invalid_api_key") {
                error!(
                    "Hint: 401/invalid_api_key usually means OPENAI_API_KEY is expired, invalid, or does not match OPENAI_BASE_URL; check .env"
                );
            }
        }
    }
}

#[async_trait]
impl CommandHandler for AskHandler {
    fn command(&self) -> &str {
        "ask"
    }

    fn description(&self) -> &str {
        "Ask a question about options, e.g. /ask What is OI in options?"
    }

    #[instrument(skip(self, message, command))]
    async fn handle(&self, message: &Message, command: &Command) -> Result<HandlerResponse> {
        let prompt = command.prompt();
        if prompt.is_empty() {
            info!(user_id = message.user.id, "step: AskHandler empty prompt, sending guidance");
            self.bot.reply_to(message, GUIDANCE_MESSAGE).await?;
            return Ok(HandlerResponse::Reply(GUIDANCE_MESSAGE.to_string()));
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            prompt_len = prompt.chars().count(),
            "step: AskHandler submitting prompt to LLM"
        );

        let answer = match self.llm_client.complete(&prompt).await {
            Ok(answer) => answer,
            Err(e) => {
                Self::log_completion_error(message, &e);
                return self.send_fallback_and_stop(message, MSG_REQUEST_FAILED).await;
            }
        };

        let answer = answer.trim();
        if answer.is_empty() {
            Self::log_completion_error(message, &CompletionError::EmptyResponse);
            return self.send_fallback_and_stop(message, MSG_REQUEST_FAILED).await;
        }

        self.send_answer(message, answer).await
    }
}
