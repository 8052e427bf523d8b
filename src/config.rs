use std::env;
use std::fmt;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: String,
    pub bind_address: String,
    pub port: u16,
    pub workers: usize,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

#[derive(Debug, PartialEq)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.var, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "feedline.db".to_string(),
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            workers: 1,
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let db_path = match lookup("FL_DATABASE_URL") {
            Some(path) => {
                log::info!("Using database path from FL_DATABASE_URL: {}", path);
                path
            }
            None => {
                log::info!("Using default database path: {}", defaults.db_path);
                defaults.db_path
            }
        };

        let workers = parse_var(&lookup, "FL_WORKERS", defaults.workers)?;
        if workers == 0 {
            return Err(ConfigError {
                var: "FL_WORKERS",
                value: workers.to_string(),
            });
        }

        Ok(Self {
            db_path,
            bind_address: lookup("FL_BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: parse_var(&lookup, "FL_PORT", defaults.port)?,
            workers,
            rate_limit_per_second: parse_var(
                &lookup,
                "FL_RATE_LIMIT_PER_SECOND",
                defaults.rate_limit_per_second,
            )?,
            rate_limit_burst: parse_var(&lookup, "FL_RATE_LIMIT_BURST", defaults.rate_limit_burst)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError { var, value }),
        None => Ok(default),
    }
}
