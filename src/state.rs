//! Application state for cafe-api

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::BoxError;
use crate::auth::{SecretVerifier, SharedSecretVerifier};
use crate::config::Config;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Secret check for the report-closed delete flow
    pub verifier: Arc<dyn SecretVerifier>,
}

impl AppState {
    /// Create a new AppState: open the pool, run migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            pool,
            verifier: Arc::new(SharedSecretVerifier::new(
                config.report_closed_secret.clone(),
            )),
        })
    }
}
