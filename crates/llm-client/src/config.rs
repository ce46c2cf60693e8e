//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use openai_client::{GenerationParams, DEFAULT_BASE_URL};
use std::env;

/// Model used when `MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn system_prompt(&self) -> Option<&str>;
    fn generation_params(&self) -> GenerationParams;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
    pub llm_system_prompt: Option<String>,
    pub llm_max_tokens: Option<u32>,
    pub llm_temperature: Option<f32>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
    fn system_prompt(&self) -> Option<&str> {
        self.llm_system_prompt.as_deref()
    }
    fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            max_tokens: self.llm_max_tokens,
            temperature: self.llm_temperature,
        }
    }
}

/// Reads an env var, treating unset and whitespace-only values alike.
fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

impl EnvLlmConfig {
    /// Load from environment variables. `OPENAI_API_KEY` is required.
    pub fn from_env() -> Result<Self> {
        let openai_api_key =
            non_blank_var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url =
            non_blank_var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let llm_model = non_blank_var("MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let llm_system_prompt =
            non_blank_var("LLM_SYSTEM_PROMPT").or_else(|| non_blank_var("SYSTEM_PROMPT"));
        let llm_max_tokens = non_blank_var("LLM_MAX_TOKENS")
            .map(|s| s.trim().parse::<u32>())
            .transpose()
            .context("LLM_MAX_TOKENS must be a positive integer")?;
        let llm_temperature = non_blank_var("LLM_TEMPERATURE")
            .map(|s| s.trim().parse::<f32>())
            .transpose()
            .context("LLM_TEMPERATURE must be a number")?;
        Ok(Self {
            openai_api_key,
            openai_base_url,
            llm_model,
            llm_system_prompt,
            llm_max_tokens,
            llm_temperature,
        })
    }

    /// Config with the given key and defaults for everything else.
    pub fn with_api_key(openai_api_key: String) -> Self {
        Self {
            openai_api_key,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_system_prompt: None,
            llm_max_tokens: None,
            llm_temperature: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "MODEL",
        "LLM_SYSTEM_PROMPT",
        "SYSTEM_PROMPT",
        "LLM_MAX_TOKENS",
        "LLM_TEMPERATURE",
    ];

    fn clear_env() {
        for v in VARS {
            env::remove_var(v);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "test_key");

        let cfg = EnvLlmConfig::from_env().unwrap();

        assert_eq!(cfg.api_key(), "test_key");
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.model(), DEFAULT_MODEL);
        assert!(cfg.system_prompt().is_none());
        assert_eq!(cfg.generation_params(), GenerationParams::default());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "test_key");
        env::set_var("OPENAI_BASE_URL", "http://localhost:8080/v1");
        env::set_var("MODEL", "gpt-4o-mini");
        env::set_var("SYSTEM_PROMPT", "You explain options.");
        env::set_var("LLM_MAX_TOKENS", "512");
        env::set_var("LLM_TEMPERATURE", "0.2");

        let cfg = EnvLlmConfig::from_env().unwrap();

        assert_eq!(cfg.base_url(), "http://localhost:8080/v1");
        assert_eq!(cfg.model(), "gpt-4o-mini");
        assert_eq!(cfg.system_prompt(), Some("You explain options."));
        assert_eq!(cfg.generation_params().max_tokens, Some(512));
        assert_eq!(cfg.generation_params().temperature, Some(0.2));
        clear_env();
    }

    /// **Test: Missing or blank OPENAI_API_KEY fails.**
    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        clear_env();
        assert!(EnvLlmConfig::from_env().is_err());

        env::set_var("OPENAI_API_KEY", "   ");
        let err = EnvLlmConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_model_falls_back_to_default() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "test_key");
        env::set_var("MODEL", "");

        assert_eq!(EnvLlmConfig::from_env().unwrap().model(), DEFAULT_MODEL);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_numbers_are_errors() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "test_key");
        env::set_var("LLM_MAX_TOKENS", "lots");
        assert!(EnvLlmConfig::from_env().is_err());

        env::remove_var("LLM_MAX_TOKENS");
        env::set_var("LLM_TEMPERATURE", "warm");
        assert!(EnvLlmConfig::from_env().is_err());
        clear_env();
    }
}
