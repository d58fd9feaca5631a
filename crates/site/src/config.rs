//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `OC_HOST` - Bind address (default: 127.0.0.1)
//! - `OC_PORT` - Listen port (default: 3000)
//! - `OC_BASE_URL` - Public URL of the site (default: <http://localhost:3000>).
//!   An `https` URL turns on secure session cookies.
//! - `OC_DATA_DIR` - Directory holding the JSON blobs (default: `data`)
//! - `OC_ADMIN_SECRET` - Admin unlock secret (default: `1234`)
//! - `OC_LOG_JSON` - Emit JSON logs when `true`
//!
//! ## Gemini
//! - `GEMINI_API_KEY` - Enables AI descriptions; without it the fallback text is used
//! - `GEMINI_MODEL` - Model ID (default: gemini-3-flash-preview)
//! - `GEMINI_BASE_URL` - API base URL (default: <https://generativelanguage.googleapis.com>)
//! - `GEMINI_TIMEOUT_SECS` - Request timeout (default: 15)
//!
//! ## Sentry
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub const DEFAULT_ADMIN_SECRET: &str = "1234";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 15;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL
    pub base_url: String,
    /// Directory for the JSON blobs
    pub data_dir: PathBuf,
    /// Admin unlock secret
    pub admin_secret: SecretString,
    /// Gemini configuration (`None` without an API key)
    pub gemini: Option<GeminiConfig>,
    /// Emit JSON logs
    pub log_json: bool,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
}

/// Gemini API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let host = parse_env("OC_HOST", "127.0.0.1")?;
        let port = parse_env("OC_PORT", "3000")?;
        let base_url = get_env_or_default("OC_BASE_URL", "http://localhost:3000");
        let data_dir = PathBuf::from(get_env_or_default("OC_DATA_DIR", "data"));

        let admin_secret = get_env_or_default("OC_ADMIN_SECRET", DEFAULT_ADMIN_SECRET);
        if admin_secret.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "OC_ADMIN_SECRET".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let gemini = GeminiConfig::from_env()?;
        let log_json = get_optional_env("OC_LOG_JSON").is_some_and(|v| v == "true" || v == "1");

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.1);

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            admin_secret: SecretString::from(admin_secret),
            gemini,
            log_json,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies should carry the `Secure` flag.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    /// Whether `OC_ADMIN_SECRET` still holds the default value.
    #[must_use]
    pub fn uses_default_admin_secret(&self) -> bool {
        self.admin_secret.expose_secret() == DEFAULT_ADMIN_SECRET
    }
}

impl GeminiConfig {
    /// Returns `None` if `GEMINI_API_KEY` is not set (descriptions fall back).
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(api_key) = get_optional_env("GEMINI_API_KEY").filter(|k| !k.is_empty()) else {
            return Ok(None);
        };

        let timeout_secs: u64 = parse_env(
            "GEMINI_TIMEOUT_SECS",
            &DEFAULT_GEMINI_TIMEOUT_SECS.to_string(),
        )?;

        Ok(Some(Self {
            api_key: SecretString::from(api_key),
            model: get_env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            base_url: get_env_or_default("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            timeout: Duration::from_secs(timeout_secs),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            host: "127.0.0.1".parse().expect("valid IP"),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            data_dir: PathBuf::from("data"),
            admin_secret: SecretString::from(DEFAULT_ADMIN_SECRET),
            gemini: None,
            log_json: false,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.1,
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = config().socket_addr();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_secure_cookies_follow_scheme() {
        let mut config = config();
        assert!(!config.secure_cookies());
        config.base_url = "https://oc.example.kr".to_string();
        assert!(config.secure_cookies());
    }

    #[test]
    fn test_default_admin_secret_detected() {
        let mut config = config();
        assert!(config.uses_default_admin_secret());
        config.admin_secret = SecretString::from("a-longer-secret");
        assert!(!config.uses_default_admin_secret());
    }

    #[test]
    fn test_site_config_debug_redacts_secrets() {
        let debug_output = format!("{:?}", config());
        assert!(!debug_output.contains("1234"));
    }

    #[test]
    fn test_gemini_config_debug_redacts_secrets() {
        let config = GeminiConfig {
            api_key: SecretString::from("AIzaSy-super-secret"),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
        };

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("AIzaSy-super-secret"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains(DEFAULT_GEMINI_MODEL));
    }

    #[test]
    fn test_parse_env_default() {
        let port: u16 = parse_env("OC_TEST_UNSET_PORT_VAR", "3000").expect("default parses");
        assert_eq!(port, 3000);
    }
}
