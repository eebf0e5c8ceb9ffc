//! Configuration validation
//!
//! Validates critical configuration values at startup to catch
//! misconfigurations before the server accepts traffic.

use anyhow::Result;
use coact_core::Config;

/// Validate critical configuration values, failing fast on anything that
/// would cause security problems or runtime errors later.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.is_production() && config.cors_origins().contains(&"*".to_string()) {
        return Err(anyhow::anyhow!(
            "CORS configured to allow all origins (*) in production - this is a security risk. \
            Please set specific allowed origins via CORS_ORIGINS environment variable."
        ));
    }

    if config.server_port() == 0 {
        return Err(anyhow::anyhow!("Server port cannot be 0"));
    }

    if config.db_max_connections() == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_cors_rejected_in_production() {
        let config = Config::for_values(
            8080,
            "postgres://localhost/coact",
            vec!["*".to_string()],
            "production",
        );
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_wildcard_cors_allowed_in_development() {
        let config = Config::for_values(
            8080,
            "postgres://localhost/coact",
            vec!["*".to_string()],
            "development",
        );
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = Config::for_values(0, "postgres://localhost/coact", vec![], "development");
        assert!(validate_config(&config).is_err());
    }
}
