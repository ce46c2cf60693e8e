use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Transport failure while sending (network, Telegram API error, rate limit).
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
