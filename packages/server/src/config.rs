use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Default outbound timeout for a single page check.
pub const DEFAULT_CHECK_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Secret used to sign the session cookie that carries flash messages.
    pub secret_key: String,
    pub port: u16,
    pub database_max_connections: u32,
    pub check_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            secret_key: env::var("SECRET_KEY").context("SECRET_KEY must be set")?,
            port: parse_or_default("PORT", env::var("PORT").ok(), 8000)?,
            database_max_connections: parse_or_default(
                "DATABASE_MAX_CONNECTIONS",
                env::var("DATABASE_MAX_CONNECTIONS").ok(),
                10,
            )?,
            check_timeout: Duration::from_secs(parse_or_default(
                "CHECK_TIMEOUT_SECS",
                env::var("CHECK_TIMEOUT_SECS").ok(),
                DEFAULT_CHECK_TIMEOUT_SECS,
            )?),
        })
    }
}

fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", name)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default_uses_default_when_unset() {
        let port: u16 = parse_or_default("PORT", None, 8000).unwrap();
        assert_eq!(port, 8000);
    }

    #[test]
    fn test_parse_or_default_parses_value() {
        let port: u16 = parse_or_default("PORT", Some(" 3000 ".to_string()), 8000).unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_parse_or_default_names_bad_variable() {
        let err = parse_or_default::<u64>("CHECK_TIMEOUT_SECS", Some("soon".into()), 10)
            .unwrap_err();
        assert!(err.to_string().contains("CHECK_TIMEOUT_SECS"));
    }
}
