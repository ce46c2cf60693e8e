//! Entry points that wire config, gateway and handlers together.

use anyhow::Result;
use llm_client::{mask_token, LlmConfig};
use optbot_core::Bot as CoreBot;
use optbot_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tracing::info;

use crate::assembly::{build_llm_client, build_router};
use crate::config::BotConfig;

/// Validates config, assembles the handlers and runs long polling until the process stops.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    info!(
        model = %config.llm.model(),
        base_url = %config.llm.base_url(),
        api_key = %mask_token(config.llm.api_key()),
        bot_token = %mask_token(config.bot_token()),
        "Starting bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let llm_client = build_llm_client(&config.llm);
    let router = build_router(llm_client, bot_adapter);

    run_repl(teloxide_bot, router).await
}
