// src/config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_QUOTE_API_URL: &str = "https://api.api-ninjas.com/v1/stockprice";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3030";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("Invalid bind address: {0}")]
    InvalidBindAddr(String),
}

/// Runtime configuration, injected entirely through the environment. The
/// provider credential is never hardcoded.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub quote_api_url: String,
    pub quote_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        let quote_api_key =
            env::var("QUOTE_API_KEY").map_err(|_| ConfigError::MissingVar("QUOTE_API_KEY"))?;
        let quote_api_url =
            env::var("QUOTE_API_URL").unwrap_or_else(|_| DEFAULT_QUOTE_API_URL.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        Ok(Config {
            bind_addr,
            quote_api_url,
            quote_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: process environment is shared across test threads.
    #[test]
    fn from_env_requires_the_key_and_fills_defaults() {
        env::remove_var("QUOTE_API_KEY");
        env::remove_var("QUOTE_API_URL");
        env::remove_var("BIND_ADDR");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("QUOTE_API_KEY"))
        ));

        env::set_var("QUOTE_API_KEY", "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.quote_api_key, "test-key");
        assert_eq!(config.quote_api_url, DEFAULT_QUOTE_API_URL);
        assert_eq!(config.bind_addr.port(), 3030);

        env::set_var("BIND_ADDR", "not an address");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidBindAddr(_))
        ));
        env::remove_var("BIND_ADDR");
        env::remove_var("QUOTE_API_KEY");
    }
}
