//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI implementation. Transport-agnostic;
//! used by ask-handlers.
//!
//! Provider outcomes are data, not control flow: every call yields a [`CompletionResult`],
//! so callers branch on `Ok(text)` / `Err(CompletionError)` and never see a raw panic or
//! provider exception.

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

mod config;
mod error;
mod message;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig, DEFAULT_MODEL};
pub use error::{CompletionError, CompletionResult};
pub use message::{ChatMessage, MessageRole};
pub use openai_client::{mask_token, GenerationParams, DEFAULT_BASE_URL};
pub use openai_llm::{OpenAILlmClient, DEFAULT_SYSTEM_CONTENT};

/// LLM client interface: one completion request per call, no caching, no retries.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the trimmed, non-empty reply text for the given messages.
    /// Implementations may prepend their own system message.
    async fn complete_chat(&self, messages: Vec<ChatMessage>) -> CompletionResult;

    /// Convenience for a single user prompt.
    async fn complete(&self, prompt: &str) -> CompletionResult {
        self.complete_chat(vec![ChatMessage::user(prompt)]).await
    }
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> anyhow::Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
