use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./db/quotes.db";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    /// Anything other than `json` falls back to text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Ok(LogFormat::Text)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: DEFAULT_DB_PATH.to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Reads `QB_*` variables, after loading `.env` if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its value.
    /// Unset variables take their defaults; an unparsable listen address is an error.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr_raw =
            lookup("QB_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_addr_raw
            .parse()
            .with_context(|| format!("Invalid QB_LISTEN_ADDR '{}'", listen_addr_raw))?;

        let db_path = lookup("QB_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let cors_allow =
            parse_origins(&lookup("QB_CORS_ALLOW_ORIGINS").unwrap_or_else(|| "*".into()));
        let timeout_ms: u64 = lookup("QB_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let log_format = lookup("QB_LOG_FORMAT")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.listen_addr, Config::default().listen_addr);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(
            config.request_timeout,
            Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)
        );
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_from_lookup_reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("QB_LISTEN_ADDR", "127.0.0.1:9090"),
            ("QB_DB_PATH", "/tmp/q.db"),
            ("QB_CORS_ALLOW_ORIGINS", "http://a.test,http://b.test"),
            ("QB_REQUEST_TIMEOUT_MS", "1500"),
            ("QB_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(
            config.listen_addr,
            "127.0.0.1:9090".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.db_path, "/tmp/q.db");
        assert_eq!(config.cors_allow.len(), 2);
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_from_lookup_rejects_invalid_listen_addr() {
        let err = Config::from_lookup(lookup_from(&[("QB_LISTEN_ADDR", "not-an-addr")]))
            .unwrap_err();
        assert!(err.to_string().contains("QB_LISTEN_ADDR"));
    }

    #[test]
    fn test_from_lookup_falls_back_on_bad_timeout() {
        let config =
            Config::from_lookup(lookup_from(&[("QB_REQUEST_TIMEOUT_MS", "soon")])).unwrap();
        assert_eq!(
            config.request_timeout,
            Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)
        );
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins(" http://a.test, ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Text);
    }

    #[test]
    fn test_default_listen_addr_matches_constant() {
        assert_eq!(
            Config::default().listen_addr,
            DEFAULT_LISTEN_ADDR.parse::<SocketAddr>().unwrap()
        );
    }
}
