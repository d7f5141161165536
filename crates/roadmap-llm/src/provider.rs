use async_trait::async_trait;
use thiserror::Error;

use crate::protocol::ChatMessage;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The gateway answered with a non-2xx status.
    #[error("AI Gateway error: {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LLMError {
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            LLMError::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LLMError>;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Non-streaming chat completion.
    ///
    /// Sends exactly one request and returns the content of the first choice
    /// verbatim. No retries are attempted.
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Model identifier sent upstream.
    fn model(&self) -> &str;
}
