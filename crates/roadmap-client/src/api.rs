//! Client side of the roadmap handler.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENERATE_ROADMAP_PATH: &str = "/api/v1/generate-roadmap";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub topic: String,
    pub current_knowledge: String,
}

/// What the handler answered, when it answered at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadmapReply {
    Roadmap(String),
    /// The handler reported an error message meant for the user.
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

#[async_trait]
pub trait RoadmapApi: Send + Sync {
    async fn generate(&self, request: &RoadmapRequest) -> Result<RoadmapReply, ClientError>;
}

#[derive(Debug, Deserialize)]
struct ReplyBody {
    #[serde(default)]
    roadmap: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct HttpRoadmapApi {
    client: Client,
    server_url: String,
}

impl HttpRoadmapApi {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server_url, GENERATE_ROADMAP_PATH)
    }
}

#[async_trait]
impl RoadmapApi for HttpRoadmapApi {
    async fn generate(&self, request: &RoadmapRequest) -> Result<RoadmapReply, ClientError> {
        let url = self.endpoint();
        log::debug!("POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let text = response.text().await?;

        log::debug!("Response {} ({} bytes)", status, text.len());

        match serde_json::from_str::<ReplyBody>(&text) {
            Ok(ReplyBody {
                error: Some(error), ..
            }) => Ok(RoadmapReply::Rejected(error)),
            Ok(ReplyBody {
                roadmap: Some(roadmap),
                ..
            }) if status.is_success() => Ok(RoadmapReply::Roadmap(roadmap)),
            _ if !status.is_success() => Err(ClientError::Status(status.as_u16())),
            Ok(_) => Err(ClientError::InvalidBody(
                "neither roadmap nor error present".to_string(),
            )),
            Err(e) => Err(ClientError::InvalidBody(e.to_string())),
        }
    }
}
