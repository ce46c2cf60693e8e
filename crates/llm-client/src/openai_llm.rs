//! OpenAI implementation of [`LlmClient`]: wraps openai-client and prepends a system message.

use async_trait::async_trait;
use tracing::{instrument, warn};

use super::config::DEFAULT_MODEL;
use super::{chat_message_to_openai, ChatMessage, CompletionError, CompletionResult, LlmClient};
use openai_client::{ChatCompletionRequestSystemMessageArgs, GenerationParams};

/// Default system persona: an options-trading assistant answering in plain text.
pub const DEFAULT_SYSTEM_CONTENT: &str = "You are AdvanceOptionsGPT, an assistant that explains \
stock and index options: Greeks, open interest, option chains, strategies and risk. \
Answer clearly and concisely in plain text without Markdown, suitable for a Telegram message. \
Do not give personalised financial advice.";

/// [`LlmClient`] backed by [`openai_client::OpenAIClient`].
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    system_prompt: Option<String>,
    params: GenerationParams,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self::from_client(openai_client::OpenAIClient::new(api_key))
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::from_client(openai_client::OpenAIClient::with_base_url(api_key, base_url))
    }

    fn from_client(client: openai_client::OpenAIClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
            params: GenerationParams::default(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn system_content(&self) -> &str {
        self.system_prompt.as_deref().unwrap_or(DEFAULT_SYSTEM_CONTENT)
    }

    fn build_messages(
        &self,
        messages: &[ChatMessage],
    ) -> anyhow::Result<Vec<openai_client::ChatCompletionRequestMessage>> {
        let mut openai_messages: Vec<openai_client::ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_content().to_string())
                .build()?
                .into(),
        ];
        for msg in messages {
            openai_messages.push(chat_message_to_openai(msg)?);
        }
        Ok(openai_messages)
    }
}

/// Logs error and its cause chain. First item with `first_msg`, rest with "Caused by".
fn log_error_chain(e: &anyhow::Error, first_msg: &str) {
    for (i, cause) in e.chain().enumerate() {
        if i == 0 {
            warn!(cause = %cause, "{}", first_msg);
        } else {
            warn!(cause = %cause, "Caused by");
        }
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages))]
    async fn complete_chat(&self, messages: Vec<ChatMessage>) -> CompletionResult {
        let openai_messages = self
            .build_messages(&messages)
            .map_err(|e| CompletionError::Request(format!("{:#}", e)))?;

        let text = match self
            .client
            .chat_completion(&self.model, openai_messages, self.params)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                log_error_chain(&e, "OpenAI chat completion failed");
                return Err(CompletionError::Provider(format!("{:#}", e)));
            }
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }
        Ok(trimmed.to_string())
    }
}
