use std::env;
use std::path::PathBuf;
use std::time::Duration;

use shared::DEFAULT_ENDPOINT;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid number: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} is not a valid URL ({value:?}): {source}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_url: Url,
    pub upstream_timeout: Duration,
    pub rate_limit: Duration,
    pub frontend_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = parse_number(var("PORT"), "PORT", 8081)?;

        let upstream_raw = var("SPAMCHECK_UPSTREAM_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let upstream_url = Url::parse(&upstream_raw).map_err(|source| ConfigError::InvalidUrl {
            key: "SPAMCHECK_UPSTREAM_URL",
            value: upstream_raw.clone(),
            source,
        })?;

        let rate_limit = Duration::from_secs(parse_number(
            var("SPAMCHECK_RATE_LIMIT_SECS"),
            "SPAMCHECK_RATE_LIMIT_SECS",
            5,
        )?);
        let upstream_timeout = Duration::from_secs(parse_number(
            var("SPAMCHECK_UPSTREAM_TIMEOUT_SECS"),
            "SPAMCHECK_UPSTREAM_TIMEOUT_SECS",
            30,
        )?);

        let frontend_dir = var("FRONTEND_DIR")
            .map(PathBuf::from)
            .or_else(|| {
                var("CARGO_MANIFEST_DIR").map(|dir| PathBuf::from(dir).join("../frontend/dist"))
            })
            .filter(|dir| dir.is_dir());

        Ok(Self {
            port,
            upstream_url,
            upstream_timeout,
            rate_limit,
            frontend_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_number<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
