use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes tracing and configuration, prepares the database, wires
/// dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, database, products)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    let database = database_config::DatabaseSettings::from_env()?;

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database(&database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.products);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
