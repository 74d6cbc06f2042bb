//! Process configuration read from environment variables.
//!
//! `main` loads a `.env` file first (when present), then builds one
//! [`AppConfig`] and injects it downward; nothing else reads the
//! environment.

use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::outbound::persistence::StoreConfig;

/// Configuration errors surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT value {value:?}: {message}")]
    InvalidPort { value: String, message: String },

    /// `HOST` is not a valid IP address.
    #[error("invalid HOST value {value:?}: {message}")]
    InvalidHost { value: String, message: String },
}

/// Application configuration assembled at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Document store connection settings.
    pub store: StoreConfig,
}

impl AppConfig {
    /// Read configuration from the environment with local-development
    /// defaults: `0.0.0.0:8080` and `mongodb://localhost:27017/collecthub`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_owned());
        let connection_string = env::var("MONGODB_CONNECTION_STRING")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_owned());
        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "collecthub".to_owned());

        Ok(Self {
            bind_addr: parse_bind_addr(&host, &port)?,
            store: StoreConfig::new(connection_string, database_name),
        })
    }
}

/// Combine host and port strings into a socket address.
fn parse_bind_addr(host: &str, port: &str) -> Result<SocketAddr, ConfigError> {
    let port: u16 = port.parse().map_err(|err: std::num::ParseIntError| {
        ConfigError::InvalidPort {
            value: port.to_owned(),
            message: err.to_string(),
        }
    })?;
    let ip: IpAddr = host.parse().map_err(|err: std::net::AddrParseError| {
        ConfigError::InvalidHost {
            value: host.to_owned(),
            message: err.to_string(),
        }
    })?;
    Ok(SocketAddr::new(ip, port))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0.0.0.0", "8080", "0.0.0.0:8080")]
    #[case("127.0.0.1", "3000", "127.0.0.1:3000")]
    #[case("::1", "8080", "[::1]:8080")]
    fn parse_bind_addr_accepts_valid_input(
        #[case] host: &str,
        #[case] port: &str,
        #[case] expected: &str,
    ) {
        let addr = parse_bind_addr(host, port).expect("valid address");
        assert_eq!(addr.to_string(), expected);
    }

    #[test]
    fn parse_bind_addr_rejects_a_bad_port() {
        let err = parse_bind_addr("0.0.0.0", "eighty").expect_err("invalid port");
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn parse_bind_addr_rejects_a_bad_host() {
        let err = parse_bind_addr("localhost", "8080").expect_err("invalid host");
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }
}
