//! Configuration module
//!
//! Environment-driven configuration for the API service: server, database
//! pool, and CORS settings. Values are read once at startup via
//! [`Config::from_env`].

use std::env;

const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PORT: u16 = 8080;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    database_url: String,
    cors_origins: Vec<String>,
    db_max_connections: u32,
    db_timeout_seconds: u64,
    environment: String,
}

impl Config {
    /// Load configuration from the environment (and a `.env` file when present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable not set"))?;

        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(MAX_CONNECTIONS);

        let db_timeout_seconds = env::var("DB_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(CONNECTION_TIMEOUT_SECS);

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_port,
            database_url,
            cors_origins,
            db_max_connections,
            db_timeout_seconds,
            environment,
        })
    }

    /// Build a configuration directly from values. Used by tests.
    pub fn for_values(
        server_port: u16,
        database_url: impl Into<String>,
        cors_origins: Vec<String>,
        environment: impl Into<String>,
    ) -> Self {
        Config {
            server_port,
            database_url: database_url.into(),
            cors_origins,
            db_max_connections: MAX_CONNECTIONS,
            db_timeout_seconds: CONNECTION_TIMEOUT_SECS,
            environment: environment.into(),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_production() {
        let config = Config::for_values(8080, "postgres://localhost/coact", vec![], "production");
        assert!(config.is_production());

        let config = Config::for_values(8080, "postgres://localhost/coact", vec![], "development");
        assert!(!config.is_production());

        let config = Config::for_values(8080, "postgres://localhost/coact", vec![], "Prod");
        assert!(config.is_production());
    }
}
