use anyhow::Result;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_catalog::{config::Config, handlers, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    init_tracing();

    tracing::info!("Starting Movie Catalog...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Connected to database");

    // Run migrations
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations completed");

    let state = AppState::new(db, config.clone());
    let app = handlers::create_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// `LOG_FORMAT=json` switches to structured JSON output
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "movie_catalog=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
