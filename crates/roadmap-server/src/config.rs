//! Server configuration
//!
//! Every option can be set by flag or environment variable. The gateway
//! credential is the only secret and the only setting without a default.

use clap::Parser;
use roadmap_llm::providers::{DEFAULT_GATEWAY_URL, DEFAULT_MODEL};

pub const API_KEY_ENV: &str = "AI_GATEWAY_API_KEY";

#[derive(Parser, Debug, Clone)]
#[command(name = "roadmap-server")]
#[command(about = "Learning roadmap generator HTTP service")]
#[command(version)]
pub struct ServerConfig {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "8081")]
    pub port: u16,

    /// Chat completion gateway base URL
    #[arg(long, env = "AI_GATEWAY_URL", default_value = DEFAULT_GATEWAY_URL)]
    pub gateway_url: String,

    /// Model identifier sent to the gateway
    #[arg(long, env = "AI_GATEWAY_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Gateway API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log level (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    pub log_level: Option<String>,
}

impl ServerConfig {
    /// The API key, or `None` when unset or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            host: "0.0.0.0".to_string(),
            port: 8081,
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            log_level: None,
        }
    }
}
