use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Local cart service entry point
///
/// Restores the cart from local storage, wires the storefront adapters and
/// serves the cart API to the storefront UI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Open local storage
    let pool = database_config::init_database(&config.storage).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.storefront, &config.storage).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
