//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::ConfigError;
use quill_infra::config::non_empty;

#[cfg(feature = "dynamodb")]
use quill_infra::DynamoConfig;

/// Which post store backs the server.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Memory,
    #[cfg(feature = "dynamodb")]
    Dynamo(DynamoConfig),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => 8080,
        };

        Ok(Self {
            host: non_empty(&lookup, "HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            store: Self::parse_store(&lookup)?,
        })
    }

    /// STORE_BACKEND=memory|dynamodb; defaults to dynamodb when TABLE_NAME is set.
    fn parse_store<F>(lookup: &F) -> Result<StoreConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = non_empty(lookup, "STORE_BACKEND")
            .map(|v| v.to_lowercase())
            .unwrap_or_else(|| match non_empty(lookup, "TABLE_NAME") {
                Some(_) => "dynamodb".to_string(),
                None => "memory".to_string(),
            });

        match backend.as_str() {
            "memory" => Ok(StoreConfig::Memory),
            #[cfg(feature = "dynamodb")]
            "dynamodb" => Ok(StoreConfig::Dynamo(DynamoConfig::from_lookup(lookup)?)),
            _ => Err(ConfigError::Invalid {
                key: "STORE_BACKEND",
                value: backend,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(move |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(matches!(config.store, StoreConfig::Memory));
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let err = load(&[("STORE_BACKEND", "postgres")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "STORE_BACKEND", .. }));
    }

    #[cfg(feature = "dynamodb")]
    #[test]
    fn test_table_name_selects_dynamodb() {
        let config = load(&[("TABLE_NAME", "posts")]).unwrap();
        match config.store {
            StoreConfig::Dynamo(dynamo) => assert_eq!(dynamo.table_name, "posts"),
            other => panic!("expected dynamodb store, got {other:?}"),
        }

        let forced = load(&[("TABLE_NAME", "posts"), ("STORE_BACKEND", "memory")]).unwrap();
        assert!(matches!(forced.store, StoreConfig::Memory));
    }

    #[cfg(feature = "dynamodb")]
    #[test]
    fn test_dynamodb_backend_needs_table() {
        let err = load(&[("STORE_BACKEND", "dynamodb")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TABLE_NAME")));
    }
}
