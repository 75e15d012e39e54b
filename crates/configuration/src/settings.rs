use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseSettings,
}

/// Tuning knobs for the database connection pool.
///
/// Credentials are not configurable here: the connection URL comes from the
/// `DATABASE_URL` environment variable and never lands in a checked-in file.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// The maximum number of connections the pool may hold open.
    pub max_connections: u32,
    /// How long to wait for a free connection before giving up, in seconds.
    pub acquire_timeout_secs: u64,
}

impl Config {
    /// Rejects values the pool builder would accept but that make no
    /// operational sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.database.acquire_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "database.acquire_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(raw: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(raw, FileFormat::Toml))
            .build()
            .expect("config should build")
            .try_deserialize()
            .expect("config should deserialize")
    }

    #[test]
    fn full_config_deserializes() {
        let config = parse("[database]\nmax_connections = 10\nacquire_timeout_secs = 5\n");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.acquire_timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_max_connections_is_rejected() {
        let config = parse("[database]\nmax_connections = 0\nacquire_timeout_secs = 5\n");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn zero_acquire_timeout_is_rejected() {
        let config = parse("[database]\nmax_connections = 10\nacquire_timeout_secs = 0\n");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
