//! Server configuration

/// Runtime configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (the file is created on first boot)
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Shared secret gating the report-closed delete flow
    pub report_closed_secret: String,
}

impl Config {
    /// Load configuration from environment variables, with development defaults
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://cafes.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            report_closed_secret: std::env::var("REPORT_CLOSED_SECRET")
                .unwrap_or_else(|_| "TopSecretAPIKey".into()),
        }
    }
}
