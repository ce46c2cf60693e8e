//! Config tests.

use crate::config::BotConfig;
use llm_client::{LlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_TOKEN",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "MODEL",
    "LLM_SYSTEM_PROMPT",
    "SYSTEM_PROMPT",
    "LLM_MAX_TOKENS",
    "LLM_TEMPERATURE",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("OPENAI_API_KEY", "test_key");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram.telegram_api_url.is_none());
    assert_eq!(config.llm.api_key(), "test_key");
    assert_eq!(config.llm.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.model(), DEFAULT_MODEL);
    assert!(config.llm.system_prompt().is_none());
    assert_eq!(config.log_file, "logs/optbot.log");
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("OPENAI_API_KEY", "custom_key");
    env::set_var("OPENAI_BASE_URL", "http://localhost:8080/v1");
    env::set_var("MODEL", "gpt-4o-mini");
    env::set_var("LLM_MAX_TOKENS", "512");
    env::set_var("LLM_TEMPERATURE", "0.3");
    env::set_var("TELEGRAM_API_URL", "http://localhost:8081");
    env::set_var("LOG_FILE", "/tmp/optbot-test.log");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.llm.base_url(), "http://localhost:8080/v1");
    assert_eq!(config.model(), "gpt-4o-mini");
    let params = config.llm.generation_params();
    assert_eq!(params.max_tokens, Some(512));
    assert_eq!(params.temperature, Some(0.3));
    assert_eq!(
        config.telegram.telegram_api_url.as_deref(),
        Some("http://localhost:8081")
    );
    assert_eq!(config.log_file, "/tmp/optbot-test.log");
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_token_override_wins_over_env() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");
    env::set_var("OPENAI_API_KEY", "key");

    let config = BotConfig::load(Some("cli_token".to_string())).unwrap();
    assert_eq!(config.bot_token(), "cli_token");
    clear_env();
}

/// **Test: Startup fails when the provider credential is unset.**
#[test]
#[serial]
fn test_load_fails_without_openai_api_key() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let err = BotConfig::load(None).unwrap_err();
    assert!(format!("{:#}", err).contains("OPENAI_API_KEY"));
    clear_env();
}

#[test]
#[serial]
fn test_load_fails_without_bot_token() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "test_key");

    let err = BotConfig::load(None).unwrap_err();
    assert!(format!("{:#}", err).contains("BOT_TOKEN"));
    clear_env();
}

#[test]
#[serial]
fn test_blank_api_key_counts_as_unset() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("OPENAI_API_KEY", "   ");

    assert!(BotConfig::load(None).is_err());
    clear_env();
}

#[test]
#[serial]
fn test_load_fails_on_unparsable_max_tokens() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("OPENAI_API_KEY", "test_key");
    env::set_var("LLM_MAX_TOKENS", "lots");

    assert!(BotConfig::load(None).is_err());
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_out_of_range_temperature() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("OPENAI_API_KEY", "test_key");
    env::set_var("LLM_TEMPERATURE", "3.5");

    let config = BotConfig::load(None).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("LLM_TEMPERATURE"));
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_invalid_urls() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("OPENAI_API_KEY", "test_key");
    env::set_var("OPENAI_BASE_URL", "not a url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    env::remove_var("OPENAI_BASE_URL");
    env::set_var("TELEGRAM_API_URL", "::bad::");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}
