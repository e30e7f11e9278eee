use axum::http::HeaderValue;
use std::env;
use std::str::FromStr;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_HUB_CAPACITY: usize = 256;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid allowed origin {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` lets any origin open the handshake.
    pub allowed_origin: Option<String>,
    pub hub_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            allowed_origin: None,
            hub_capacity: DEFAULT_HUB_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `ALLOWED_ORIGIN` and `HUB_CAPACITY`, falling back
    /// to the defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port)?,
            allowed_origin: lookup("ALLOWED_ORIGIN")
                .map(|o| o.trim().to_owned())
                .filter(|o| !o.is_empty() && o != "*"),
            hub_capacity: parse_or(
                "HUB_CAPACITY",
                lookup("HUB_CAPACITY"),
                defaults.hub_capacity,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but cannot run, such as a zero-sized hub queue.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hub_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "HUB_CAPACITY",
                value: self.hub_capacity.to_string(),
            });
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let origin = match &self.allowed_origin {
            None => AllowOrigin::from(Any),
            Some(o) => {
                let value =
                    HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.clone()))?;
                AllowOrigin::exact(value)
            }
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any))
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
