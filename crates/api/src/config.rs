use std::time::Duration;

/// A configuration variable held a value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{name} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub name: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite connection URL.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Per-listing query deadline in seconds; `0` disables it (default: `10`).
    pub query_timeout_secs: u64,
    /// Demo races written on first start (default: `100`).
    pub seed_race_count: usize,
    /// Whether to run the one-time seed at startup (default: `true`).
    pub seed_on_startup: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `HOST`                 | `0.0.0.0`                     |
    /// | `PORT`                 | `8000`                        |
    /// | `DATABASE_URL`         | `sqlite://racing.db?mode=rwc` |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                          |
    /// | `QUERY_TIMEOUT_SECS`   | `10`                          |
    /// | `SEED_RACE_COUNT`      | `100`                         |
    /// | `SEED_ON_STARTUP`      | `true`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: parse("PORT", var("PORT", "8000"), "u16")?,
            database_url: var("DATABASE_URL", "sqlite://racing.db?mode=rwc"),
            cors_origins,
            request_timeout_secs: parse(
                "REQUEST_TIMEOUT_SECS",
                var("REQUEST_TIMEOUT_SECS", "30"),
                "u64",
            )?,
            query_timeout_secs: parse(
                "QUERY_TIMEOUT_SECS",
                var("QUERY_TIMEOUT_SECS", "10"),
                "u64",
            )?,
            seed_race_count: parse("SEED_RACE_COUNT", var("SEED_RACE_COUNT", "100"), "usize")?,
            seed_on_startup: parse("SEED_ON_STARTUP", var("SEED_ON_STARTUP", "true"), "bool")?,
        })
    }

    /// The listing deadline, or `None` when disabled.
    pub fn query_timeout(&self) -> Option<Duration> {
        (self.query_timeout_secs > 0).then(|| Duration::from_secs(self.query_timeout_secs))
    }
}

fn parse<T: std::str::FromStr>(
    name: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        name,
        expected,
        value,
    })
}
