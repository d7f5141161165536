pub mod protocol;
pub mod provider;
pub mod providers;

pub use protocol::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};
pub use provider::{LLMError, LLMProvider, Result};
pub use providers::GatewayProvider;
