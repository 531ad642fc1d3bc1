//! cafe-api — Cafe directory service
//!
//! Small web service that:
//! - Serves a browsable cafe directory (search by location, add, report closed)
//! - Exposes JSON endpoints (/random, /all, /update_price)
//! - Persists cafes in a single SQLite table via sqlx

use cafe_api::config::Config;
use cafe_api::state::AppState;
use cafe_api::{BoxError, api};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting cafe-api");

    // Initialize application state (opens the pool, runs migrations)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("cafe-api listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
