use roadmap_llm::{GatewayProvider, LLMProvider};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared, read-only handler state.
///
/// `llm` is `None` when no gateway credential was configured; requests then
/// fail with a configuration error instead of reaching the gateway.
#[derive(Clone)]
pub struct AppState {
    pub llm: Option<Arc<dyn LLMProvider>>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        let llm: Option<Arc<dyn LLMProvider>> = match config.api_key() {
            Some(api_key) => {
                log::info!(
                    "Using AI gateway at {} with model {}",
                    config.gateway_url,
                    config.model
                );
                Some(Arc::new(
                    GatewayProvider::new(api_key)
                        .with_base_url(config.gateway_url.clone())
                        .with_model(config.model.clone()),
                ))
            }
            None => {
                log::warn!("No gateway API key configured; roadmap requests will fail");
                None
            }
        };

        Self { llm }
    }

    pub fn with_provider(llm: Arc<dyn LLMProvider>) -> Self {
        Self { llm: Some(llm) }
    }

    pub fn unconfigured() -> Self {
        Self { llm: None }
    }

    pub fn is_configured(&self) -> bool {
        self.llm.is_some()
    }

    pub fn provider(&self) -> Result<&Arc<dyn LLMProvider>, AppError> {
        self.llm.as_ref().ok_or(AppError::MissingApiKey)
    }
}
