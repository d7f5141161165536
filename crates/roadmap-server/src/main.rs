use clap::Parser;

use roadmap_server::logging::init_logging;
use roadmap_server::{run_server, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::parse();
    init_logging(config.debug);

    log::info!("Roadmap server configuration:");
    log::info!("  Bind address: {}", config.bind_address());
    log::info!("  Gateway URL: {}", config.gateway_url);
    log::info!("  Model: {}", config.model);
    log::info!(
        "  API key: {}",
        if config.api_key().is_some() { "set" } else { "missing" }
    );

    if let Some(level) = &config.log_level {
        log::debug!("Log level from RUST_LOG: {}", level);
    }

    run_server(config).await?;
    Ok(())
}
