//! Command-line configuration
//!
//! Every flag except `--log` has an environment fallback.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.opendota.com";

/// Dota 2 heroes with pro pick, ban and win counts
#[derive(Parser, Debug, Clone)]
#[command(name = "heroes", version)]
#[command(about = "Browse Dota 2 heroes and their pro stats in the terminal")]
pub struct Args {
    /// Base URL of the statistics API
    #[arg(long, env = "API_ENDPOINT", default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HEROES_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Write logs to this file
    #[arg(long, env = "HEROES_LOG")]
    pub log_file: Option<PathBuf>,

    /// Write logs to the default cache location
    #[arg(long)]
    pub log: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint without a trailing `/`
    pub api_endpoint: String,
    pub request_timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_endpoint = normalize_endpoint(&args.api_endpoint)?;
        if args.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        let log_file = match args.log_file {
            Some(path) => Some(path),
            None if args.log => default_log_path(),
            None => None,
        };

        Ok(Self {
            api_endpoint,
            request_timeout: Duration::from_secs(args.timeout),
            log_file,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(10),
            log_file: None,
        }
    }
}

/// `{cache_dir}/heroes/heroes.log`, if the platform has a cache directory
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("heroes").join("heroes.log"))
}

fn normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: raw.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("heroes").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let config = Config::from_args(parse(&[
            "--api-endpoint",
            "http://localhost:8080/",
            "--timeout",
            "3",
            "--log-file",
            "/tmp/heroes.log",
        ]))
        .unwrap();

        assert_eq!(config.api_endpoint, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/heroes.log")));
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        assert_eq!(
            normalize_endpoint("https://api.opendota.com//").unwrap(),
            "https://api.opendota.com"
        );
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let err = normalize_endpoint("ftp://example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_rejects_garbage_endpoint() {
        assert!(normalize_endpoint("not a url").is_err());
    }

    #[test]
    fn test_log_flag_uses_cache_dir() {
        let config = Config::from_args(parse(&["--log-file", "a.log", "--log"])).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("a.log")));

        let args = Args {
            api_endpoint: DEFAULT_API_ENDPOINT.into(),
            timeout: 10,
            log_file: None,
            log: true,
        };
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.log_file, default_log_path());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_args(parse(&["--timeout", "0"])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout);
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let result = Args::try_parse_from(["heroes", "--timeout", "soon"]);
        assert!(result.is_err());
    }
}
