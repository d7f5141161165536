use async_trait::async_trait;
use reqwest::Client;

use crate::protocol::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::provider::{LLMError, LLMProvider, Result};

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Chat completion provider for an OpenAI-compatible AI gateway.
pub struct GatewayProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GatewayProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request(&self, messages: &[ChatMessage]) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
        }
    }
}

#[async_trait]
impl LLMProvider for GatewayProvider {
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = self.build_request(messages);

        log::debug!(
            "POST {} (model: {}, messages: {})",
            self.completions_url(),
            self.model,
            messages.len()
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Failed to read AI Gateway error body: {}", e);
                    String::new()
                }
            };
            log::error!("AI Gateway error: {} {}", status.as_u16(), text);
            return Err(LLMError::UpstreamStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&text)?;

        if let Some(usage) = completion.usage {
            log::debug!(
                "Completion usage: prompt={} completion={} total={}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        completion.first_content().map(str::to_string)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
