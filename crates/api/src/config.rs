//! Process configuration, read from the environment.
//!
//! Every setting has a default so the service starts with no environment at
//! all, listening on `0.0.0.0:8000`.

use std::net::{AddrParseError, SocketAddr};

use itemreg_observability::{LogFormat, UnknownLogFormat};
use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "ITEMREG_BIND_ADDR";
pub const LOG_FORMAT_ENV: &str = "ITEMREG_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ITEMREG_BIND_ADDR={value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("ITEMREG_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] UnknownLogFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_ENV) {
            let parsed: Result<SocketAddr, AddrParseError> = value.trim().parse();
            config.bind_addr = match parsed {
                Ok(addr) => addr,
                Err(source) => return Err(ConfigError::InvalidBindAddr { value, source }),
            };
        }

        if let Some(value) = lookup(LOG_FORMAT_ENV) {
            config.log_format = value.parse()?;
        }

        Ok(config)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            log_format: LogFormat::Json,
        }
    }
}
