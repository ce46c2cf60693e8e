use thiserror::Error;

/// Why a completion produced no usable text. All variants are recoverable per request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// The request could not be built (e.g. invalid message content).
    #[error("Failed to build completion request: {0}")]
    Request(String),

    /// Network failure, API error payload, or malformed/empty-choices response.
    #[error("Completion provider error: {0}")]
    Provider(String),

    /// The provider answered, but the first choice had no text after trimming.
    #[error("Completion provider returned empty text")]
    EmptyResponse,
}

pub type CompletionResult = std::result::Result<String, CompletionError>;
