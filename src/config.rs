use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub max_connections: u32,
    /// Rounds of random demo data to insert at startup; 0 disables seeding.
    pub seed_iterations: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

const DEFAULT_DATABASE_PATH: &str = "data/museum.db";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        let max_connections = env_map
            .get("MAX_CONNECTIONS")
            .map(|s| s.as_str())
            .unwrap_or("5")
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "MAX_CONNECTIONS".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        let seed_iterations = env_map
            .get("SEED_ITERATIONS")
            .map(|s| s.as_str())
            .unwrap_or("0")
            .parse::<u32>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "SEED_ITERATIONS".to_string(),
                    "must be a non-negative integer".to_string(),
                )
            })?;

        Ok(Config {
            port,
            database_path,
            max_connections,
            seed_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.seed_iterations, 0);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_env_map(env(&[
            ("PORT", "9000"),
            ("DATABASE_PATH", "/tmp/catalog.db"),
            ("MAX_CONNECTIONS", "2"),
            ("SEED_ITERATIONS", "25"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_path, "/tmp/catalog.db");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.seed_iterations, 25);
    }

    #[test]
    fn test_blank_database_path_uses_default() {
        let config = Config::from_env_map(env(&[("DATABASE_PATH", "  ")])).unwrap();
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_env_map(env(&[("PORT", "not_a_number")]));
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_zero_max_connections() {
        let result = Config::from_env_map(env(&[("MAX_CONNECTIONS", "0")]));
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "MAX_CONNECTIONS"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_negative_seed_iterations() {
        let result = Config::from_env_map(env(&[("SEED_ITERATIONS", "-3")]));
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "SEED_ITERATIONS"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
