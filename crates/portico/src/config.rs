use std::env;

/// Application configuration loaded from environment variables.
///
/// Token-signing settings live in [`portico_auth::AuthConfig`]; this covers
/// the rest.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "portico.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "portico.db")
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "portico.db".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "portico.db");
    }
}
