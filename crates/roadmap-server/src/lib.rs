pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod prompt;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{AppError, ErrorResponse};
pub use handlers::generate::{RoadmapRequest, RoadmapResponse};
pub use server::{app_config, cors_headers, run_server};
pub use state::AppState;
