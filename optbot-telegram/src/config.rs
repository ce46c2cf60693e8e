//! Telegram connectivity config: bot token and optional Bot API server URL.
//! Loaded from env: BOT_TOKEN (or TELEGRAM_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN / TELEGRAM_TOKEN; one of them is required.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| non_blank_var("BOT_TOKEN"))
            .or_else(|| non_blank_var("TELEGRAM_TOKEN"))
            .context("BOT_TOKEN not set (also checked TELEGRAM_TOKEN and --token)")?;
        let telegram_api_url =
            non_blank_var("TELEGRAM_API_URL").or_else(|| non_blank_var("TELOXIDE_API_URL"));
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token and the public Bot API server.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Checks that `telegram_api_url`, if set, parses as a URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide client, pointed at the custom API server when configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
