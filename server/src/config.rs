//! Server configuration read from the environment.

use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound on pooled sessions. In-memory databases always use one.
    pub max_connections: u32,
    /// Log every SQL statement the repository issues.
    pub echo_sql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            echo_sql: false,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS` and
    /// `TODO_ECHO_SQL`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_var("PORT", port)?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", max)?;
            if config.max_connections == 0 {
                return Err(ConfigError::Invalid {
                    var: "DATABASE_MAX_CONNECTIONS",
                    value: "0".to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(echo) = lookup("TODO_ECHO_SQL") {
            config.echo_sql = parse_flag("TODO_ECHO_SQL", echo)?;
        }
        Ok(config)
    }

    /// In-memory database, ephemeral port.
    pub fn for_tests() -> Self {
        Self {
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            ..Self::default()
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value,
            reason: "expected a boolean flag".to_string(),
        }),
    }
}
