//! Configuration management for the HTTP service
//!
//! Centralizes configuration options and provides validation.

use crate::{error::CalcError, service::ServiceArgs};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Port the service listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 8080;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// HTTP server configuration
    pub server: ServerConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &ServiceArgs) -> Result<Self, CalcError> {
        let config = Self {
            debug: args.debug,
            server: ServerConfig {
                listen_addr: args.listen,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.server.listen_addr.port() == 0 {
            return Err(CalcError::config(format!(
                "Listen port must be non-zero: {}",
                self.server.listen_addr
            )));
        }

        Ok(())
    }
}
