//! Assembly: builds the LLM client and the command router. Used by the [facade](crate::facade).

use ask_handlers::{AskHandler, StartHandler};
use command_router::CommandRouter;
use llm_client::{EnvLlmConfig, LlmClient, LlmConfig, OpenAILlmClient};
use optbot_core::Bot as CoreBot;
use std::sync::Arc;
use tracing::info;

/// Builds the OpenAI-compatible client from config.
pub fn build_llm_client(llm_cfg: &EnvLlmConfig) -> Arc<dyn LlmClient> {
    match llm_cfg.system_prompt() {
        Some(s) => {
            let prefix: String = s.chars().take(50).collect();
            info!(len = s.len(), prefix = %prefix, "Using custom system prompt from env");
        }
        None => info!("No LLM_SYSTEM_PROMPT in env; using built-in options assistant prompt"),
    }

    Arc::new(
        OpenAILlmClient::with_base_url(
            llm_cfg.api_key().to_string(),
            llm_cfg.base_url().to_string(),
        )
        .with_model(llm_cfg.model().to_string())
        .with_system_prompt_opt(llm_cfg.system_prompt().map(String::from))
        .with_params(llm_cfg.generation_params()),
    )
}

/// Registers `/start` and `/ask`. The router is built once and never mutated afterwards.
pub fn build_router(llm_client: Arc<dyn LlmClient>, bot: Arc<dyn CoreBot>) -> CommandRouter {
    CommandRouter::new()
        .register(Arc::new(StartHandler::new(bot.clone())))
        .register(Arc::new(AskHandler::new(llm_client, bot)))
}
