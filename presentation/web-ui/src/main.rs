use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Product list web UI entry point
///
/// Wires the product list view to the external product API and serves it
/// as an HTML page.
/// - config/: Application configuration (server, product API)
/// - setup/: Dependency injection and server setup
/// - api/: Page handlers, templates and the health endpoint
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.product_api)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
