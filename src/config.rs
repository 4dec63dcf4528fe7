use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("AUDIT_PORT must be a valid u16")]
    InvalidPort,
    #[error("AUDIT_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Top-level configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub engine: EngineConfig,
    pub cache_ttl_secs: u64,
    pub rate_limit_per_minute: u32,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

/// Limits the audit engine runs under. The engine never reads the
/// environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub fetch_timeout_ms: u64,
    pub max_html_bytes: usize,
    pub pagespeed_api_key: Option<String>,
    pub pagespeed_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 4_500,
            max_html_bytes: 420_000,
            pagespeed_api_key: None,
            pagespeed_timeout_ms: 15_000,
        }
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn number<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let host = optional("AUDIT_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = optional("AUDIT_PORT")
            .unwrap_or_else(|| "3043".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let defaults = EngineConfig::default();
        let engine = EngineConfig {
            fetch_timeout_ms: number("AUDIT_FETCH_TIMEOUT_MS", defaults.fetch_timeout_ms)?,
            max_html_bytes: number("AUDIT_MAX_HTML_BYTES", defaults.max_html_bytes)?,
            pagespeed_api_key: optional("PAGESPEED_API_KEY"),
            pagespeed_timeout_ms: number("PAGESPEED_TIMEOUT_MS", defaults.pagespeed_timeout_ms)?,
        };

        Ok(Self {
            server: ServerConfig { host, port },
            logging: LoggingConfig {
                level: optional("AUDIT_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                file: optional("AUDIT_LOG_FILE"),
            },
            engine,
            cache_ttl_secs: number("AUDIT_CACHE_TTL_SECS", 900)?,
            rate_limit_per_minute: number("AUDIT_RATE_LIMIT_PER_MINUTE", 20)?,
        })
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    const VARS: [&str; 10] = [
        "AUDIT_HOST",
        "AUDIT_PORT",
        "AUDIT_LOG_LEVEL",
        "AUDIT_LOG_FILE",
        "AUDIT_FETCH_TIMEOUT_MS",
        "AUDIT_MAX_HTML_BYTES",
        "PAGESPEED_API_KEY",
        "PAGESPEED_TIMEOUT_MS",
        "AUDIT_CACHE_TTL_SECS",
        "AUDIT_RATE_LIMIT_PER_MINUTE",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3043);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.cache_ttl_secs, 900);
        assert_eq!(config.rate_limit_per_minute, 20);
    }

    #[test]
    fn reads_engine_limits_and_key() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("AUDIT_FETCH_TIMEOUT_MS", "2000");
        env::set_var("PAGESPEED_API_KEY", "  test-key ");
        env::set_var("AUDIT_RATE_LIMIT_PER_MINUTE", "0");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.engine.fetch_timeout_ms, 2000);
        assert_eq!(config.engine.pagespeed_api_key.as_deref(), Some("test-key"));
        assert_eq!(config.rate_limit_per_minute, 0);
        reset_env();
    }

    #[test]
    fn rejects_bad_numbers() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("AUDIT_PORT", "70000");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidPort)));
        reset_env();
        env::set_var("AUDIT_MAX_HTML_BYTES", "-5");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidNumber { name: "AUDIT_MAX_HTML_BYTES", .. })
        ));
        reset_env();
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("AUDIT_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3043));
        reset_env();
    }
}
