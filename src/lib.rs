//! # Calculator
//!
//! Integer addition exposed as a command-line tool and an HTTP service.
//!
//! ## Features
//!
//! - Wrapping 64-bit addition with strict decimal operand parsing
//! - `calculator <int> <int>` command-line front-end
//! - `GET /add/{a}/{b}` JSON endpoint with request logging and panic recovery
//!
//! ## Example
//!
//! ```
//! use calculator::core::{add, parse_operand};
//!
//! let a = parse_operand("40")?;
//! assert_eq!(add(a, 2), 42);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod service;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
