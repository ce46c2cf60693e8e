//! Bot configuration: Telegram connectivity + LLM provider + log file. Loaded once from env at startup.

use anyhow::Result;
use llm_client::{EnvLlmConfig, LlmConfig};
use optbot_core::DEFAULT_LOG_FILE;
use optbot_telegram::TelegramConfig;
use std::env;

#[cfg(test)]
mod tests;

/// Immutable process-wide configuration, built once and passed by reference.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub llm: EnvLlmConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from env. `token` overrides BOT_TOKEN. Fails if the Telegram token or
    /// OPENAI_API_KEY is missing, or a numeric LLM setting does not parse.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let llm = EnvLlmConfig::from_env()?;
        Ok(Self {
            telegram,
            llm,
            log_file: Self::log_file_from_env(),
        })
    }

    /// LOG_FILE or [`DEFAULT_LOG_FILE`]. Read before the rest so startup errors can be logged.
    pub fn log_file_from_env() -> String {
        env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
    }

    /// Validates URLs and the temperature range.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if reqwest::Url::parse(self.llm.base_url()).is_err() {
            anyhow::bail!("OPENAI_BASE_URL is not a valid URL: {}", self.llm.base_url());
        }
        if let Some(t) = self.llm.generation_params().temperature {
            if !(0.0..=2.0).contains(&t) {
                anyhow::bail!("LLM_TEMPERATURE must be between 0.0 and 2.0, got {}", t);
            }
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }
}
