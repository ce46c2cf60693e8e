//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for a single, non-streaming chat completion.
//! The underlying client's retry-with-backoff is switched off: every call is one HTTP request.
//! API keys are only ever logged through [`mask_token`].

use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;
use std::time::Duration;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Default OpenAI API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Masks an API key/token for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of 11 chars or fewer become "***" so no segment leaks.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Optional sampling parameters sent with every request. `None` leaves the provider default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// OpenAI chat client. Cheap to clone; holds the API key only for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    api_key_for_logging: String,
}

/// Backoff that gives up after the first failure.
fn no_retry() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

impl OpenAIClient {
    /// Builds a client using the given API key and the default API base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (proxies or OpenAI-compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        let client = Client::with_config(config).with_backoff(no_retry());
        Self {
            client: Arc::new(client),
            api_key_for_logging,
        }
    }

    /// Sends one chat completion request and returns the first choice's content.
    ///
    /// A choice without content yields an empty string; a response with no choices is an error.
    #[allow(deprecated)]
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        params: GenerationParams,
    ) -> anyhow::Result<String> {
        let masked = mask_token(&self.api_key_for_logging);

        tracing::info!(
            model = %model,
            message_count = messages.len(),
            max_tokens = ?params.max_tokens,
            temperature = ?params.temperature,
            api_key = %masked,
            "OpenAI chat_completion request"
        );

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(model).messages(messages);
        if let Some(max_tokens) = params.max_tokens {
            args.max_tokens(max_tokens);
        }
        if let Some(temperature) = params.temperature {
            args.temperature(temperature);
        }
        let request = args.build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content.unwrap_or_default()),
            None => anyhow::bail!("No choices in OpenAI response"),
        }
    }
}
