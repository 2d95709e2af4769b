//! Configuration module for the crowd lobbying backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::locale::Locale;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for the admin API (authentication disabled when unset)
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Parent domain; campaigns live on `{campaign}.{domain}`
    pub domain: String,
    /// Locale used when the client expresses no supported preference
    pub default_locale: Locale,
    /// Scheme used for absolute links in outgoing mail
    pub public_scheme: String,
    /// Sender address for outgoing mail
    pub mail_from: String,
}

/// Startup error for malformed configuration values.
#[derive(Debug)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.variable)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_psk = env::var("LOBBY_API_PSK").ok().filter(|k| !k.is_empty());

        let db_path = env::var("LOBBY_DB_PATH")
            .unwrap_or_else(|_| "./data/lobby.sqlite".to_string())
            .into();

        let bind_addr_raw =
            env::var("LOBBY_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_addr_raw.parse().map_err(|_| ConfigError {
            variable: "LOBBY_BIND_ADDR",
            value: bind_addr_raw.clone(),
        })?;

        let log_level = env::var("LOBBY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let domain = env::var("LOBBY_DOMAIN").unwrap_or_else(|_| "localhost".to_string());

        let locale_raw = env::var("LOBBY_DEFAULT_LOCALE").unwrap_or_else(|_| "de".to_string());
        let default_locale = Locale::from_str(&locale_raw).ok_or_else(|| ConfigError {
            variable: "LOBBY_DEFAULT_LOCALE",
            value: locale_raw.clone(),
        })?;

        let public_scheme =
            env::var("LOBBY_PUBLIC_SCHEME").unwrap_or_else(|_| "https".to_string());

        let mail_from = env::var("LOBBY_MAIL_FROM")
            .unwrap_or_else(|_| "crowd-lobbying@publicbeta.ch".to_string());

        Ok(Self {
            api_psk,
            db_path,
            bind_addr,
            log_level,
            domain,
            default_locale,
            public_scheme,
            mail_from,
        })
    }

    /// Absolute base URL of a campaign site, without trailing slash.
    pub fn campaign_base_url(&self, campaign_slug: &str) -> String {
        format!("{}://{}.{}", self.public_scheme, campaign_slug, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 8] = [
        "LOBBY_API_PSK",
        "LOBBY_DB_PATH",
        "LOBBY_BIND_ADDR",
        "LOBBY_LOG_LEVEL",
        "LOBBY_DOMAIN",
        "LOBBY_DEFAULT_LOCALE",
        "LOBBY_PUBLIC_SCHEME",
        "LOBBY_MAIL_FROM",
    ];

    #[test]
    fn test_default_config() {
        for var in VARS {
            env::remove_var(var);
        }

        let config = Config::from_env().unwrap();

        assert!(config.api_psk.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/lobby.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.domain, "localhost");
        assert_eq!(config.default_locale, Locale::De);
        assert_eq!(config.public_scheme, "https");
        assert_eq!(config.mail_from, "crowd-lobbying@publicbeta.ch");
    }

    #[test]
    fn test_campaign_base_url() {
        let mut config = Config::from_env().unwrap();
        config.public_scheme = "https".to_string();
        config.domain = "crowdlobbying.ch".to_string();

        assert_eq!(
            config.campaign_base_url("klima"),
            "https://klima.crowdlobbying.ch"
        );
    }
}
