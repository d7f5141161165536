use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use roadmap_llm::LLMError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::API_KEY_ENV;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{} is not configured", API_KEY_ENV)]
    MissingApiKey,

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("AI usage limit reached. Please contact support.")]
    UsageLimitReached,

    #[error("AI Gateway error: {0}")]
    Gateway(u16),

    #[error("{0}")]
    Internal(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Body of every failed response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<LLMError> for AppError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::UpstreamStatus { status: 429, .. } => AppError::RateLimited,
            LLMError::UpstreamStatus { status: 402, .. } => AppError::UsageLimitReached,
            LLMError::UpstreamStatus { status, .. } => AppError::Gateway(status),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::UsageLimitReached => StatusCode::PAYMENT_REQUIRED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_)
            | AppError::MissingApiKey
            | AppError::Gateway(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
