use core_config::{ConfigError, FromEnv, env_or_default};

/// MongoDB connection settings.
///
/// Loaded from environment variables, with a local instance as the
/// fallback so the service runs without any configuration in development.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, format:
    /// mongodb://[username:password@]host[:port][/database][?options]
    pub uri: String,

    /// Database name to use
    pub database: String,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a config for the given connection string and the default
    /// database.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    /// Create a config with a specific database name.
    pub fn with_database(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "eventodb".to_string(),
            max_pool_size: 100,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Load MongoConfig from environment variables.
///
/// - `MONGO_URI` (optional, default: `mongodb://localhost:27017`)
/// - `MONGO_DATABASE` (optional, default: `eventodb`)
/// - `MONGO_MAX_POOL_SIZE` (optional, default: 100)
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let uri = env_or_default("MONGO_URI", "mongodb://localhost:27017");
        let database = env_or_default("MONGO_DATABASE", "eventodb");

        let max_pool_size = env_or_default("MONGO_MAX_POOL_SIZE", "100")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "MONGO_MAX_POOL_SIZE".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            uri,
            database,
            max_pool_size,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_new() {
        let config = MongoConfig::new("mongodb://db:27017");
        assert_eq!(config.uri, "mongodb://db:27017");
        assert_eq!(config.database, "eventodb");
        assert_eq!(config.max_pool_size, 100);
    }

    #[test]
    fn test_mongo_config_with_database() {
        let config = MongoConfig::with_database("mongodb://db:27017", "mydb");
        assert_eq!(config.database, "mydb");
    }

    #[test]
    fn test_mongo_config_from_env_defaults_to_local() {
        temp_env::with_vars(
            [("MONGO_URI", None::<&str>), ("MONGO_DATABASE", None::<&str>)],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.uri, "mongodb://localhost:27017");
                assert_eq!(config.database, "eventodb");
            },
        );
    }

    #[test]
    fn test_mongo_config_from_env_custom() {
        temp_env::with_vars(
            [
                ("MONGO_URI", Some("mongodb://mongo:27017")),
                ("MONGO_DATABASE", Some("testdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.uri, "mongodb://mongo:27017");
                assert_eq!(config.database, "testdb");
            },
        );
    }

    #[test]
    fn test_mongo_config_from_env_invalid_pool_size() {
        temp_env::with_var("MONGO_MAX_POOL_SIZE", Some("lots"), || {
            assert!(MongoConfig::from_env().is_err());
        });
    }
}
