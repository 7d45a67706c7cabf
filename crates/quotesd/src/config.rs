use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database host (default: "db")
    /// Note: The `mysql_*` fields are only read when the `mysql` feature is enabled.
    #[allow(dead_code)]
    pub mysql_host: String,
    /// Database user (default: "user")
    #[allow(dead_code)]
    pub mysql_user: String,
    /// Database password (default: "password")
    #[allow(dead_code)]
    pub mysql_password: String,
    /// Database name, created on startup if absent (default: "quotesdb")
    #[allow(dead_code)]
    pub mysql_db: String,
    /// HTTP listening port (default: 5001)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MYSQL_HOST` - Database host (default: "db")
    /// - `MYSQL_USER` - Database user (default: "user")
    /// - `MYSQL_PASSWORD` - Database password (default: "password")
    /// - `MYSQL_DB` - Database name (default: "quotesdb")
    /// - `PORT` - HTTP listening port (default: 5001)
    pub fn from_env() -> Self {
        Self {
            mysql_host: env::var("MYSQL_HOST").unwrap_or_else(|_| "db".to_string()),
            mysql_user: env::var("MYSQL_USER").unwrap_or_else(|_| "user".to_string()),
            mysql_password: env::var("MYSQL_PASSWORD").unwrap_or_else(|_| "password".to_string()),
            mysql_db: env::var("MYSQL_DB").unwrap_or_else(|_| "quotesdb".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5001),
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
        env::remove_var("MYSQL_HOST");
        env::remove_var("MYSQL_USER");
        env::remove_var("MYSQL_PASSWORD");
        env::remove_var("MYSQL_DB");
        env::remove_var("PORT");

        let config = Config::from_env();

        assert_eq!(config.mysql_host, "db");
        assert_eq!(config.mysql_user, "user");
        assert_eq!(config.mysql_password, "password");
        assert_eq!(config.mysql_db, "quotesdb");
        assert_eq!(config.port, 5001);
    }

    #[test]
    fn test_unparseable_port_falls_back_to_default() {
        env::set_var("PORT", "not-a-port");

        let config = Config::from_env();
        assert_eq!(config.port, 5001);

        env::remove_var("PORT");
    }
}
