//! Long-polling runner: converts each teloxide message to core::Message and hands commands to the CommandRouter.
//! External: teloxide REPL, getMe (bot username for `/cmd@bot`), setMyCommands (command menu).

use anyhow::Result;
use command_router::CommandRouter;
use optbot_core::{Command, ToCoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Looks up this bot's username. `None` (and a warning) if getMe fails.
async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<Arc<str>> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.as_deref().map(Arc::<str>::from);
            if let Some(ref username) = username {
                info!(username = %username, "Bot username set before repl");
            }
            username
        }
        Err(e) => {
            warn!(error = %e, "getMe failed; /cmd@bot addressing will not be checked");
            None
        }
    }
}

/// Publishes the router's commands as the bot's command menu. Failure is only logged.
async fn register_commands(bot: &teloxide::Bot, router: &CommandRouter) {
    let commands: Vec<BotCommand> = router
        .commands()
        .into_iter()
        .map(|(name, description)| BotCommand::new(name, description))
        .collect();
    let count = commands.len();
    match bot.set_my_commands(commands).await {
        Ok(_) => info!(count = count, "Command menu registered"),
        Err(e) => warn!(error = %e, "setMyCommands failed; continuing without command menu"),
    }
}

/// Starts the REPL with the given teloxide Bot and router. Runs until the process is stopped.
///
/// Each command message is handled on its own tokio task, so a slow LLM call never blocks
/// other updates. Plain text and non-text messages are ignored.
#[instrument(skip(bot, router))]
pub async fn run_repl(bot: teloxide::Bot, router: CommandRouter) -> Result<()> {
    let bot_username = fetch_bot_username(&bot).await;
    register_commands(&bot, &router).await;

    info!("Bot started, polling for updates");

    teloxide::repl(bot, move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
        let router = router.clone();
        let bot_username = bot_username.clone();

        async move {
            let Some(text) = msg.text() else {
                debug!(chat_id = msg.chat.id.0, "Received non-text message, ignored");
                return respond(());
            };
            if Command::parse(text, bot_username.as_deref()).is_none() {
                debug!(chat_id = msg.chat.id.0, "Received non-command text, ignored");
                return respond(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %text,
                "Received command"
            );

            tokio::spawn(async move {
                if let Err(e) = router.handle(&core_msg, bot_username.as_deref()).await {
                    error!(error = %e, user_id = core_msg.user.id, "Command handling failed");
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
