pub mod gateway;

pub use gateway::{GatewayProvider, DEFAULT_GATEWAY_URL, DEFAULT_MODEL};
