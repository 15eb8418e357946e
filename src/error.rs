//! Error types for the calculator
//!
//! Provides structured error handling with context and proper error chains.

use std::num::ParseIntError;
use thiserror::Error;

/// Main error type for the calculator
#[derive(Error, Debug)]
pub enum CalcError {
    /// An operand was not a decimal integer
    #[error("parsing {input:?}: {source}")]
    InvalidOperand {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// The request path could not be decoded into operands
    #[error("{message}")]
    InvalidPath { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Listener or serving failures
    #[error("Server error: {message}")]
    Server {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl CalcError {
    /// Create a new operand parsing error
    pub fn invalid_operand(input: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidOperand {
            input: input.into(),
            source,
        }
    }

    /// Create a new path decoding error
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new server error
    pub fn server(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Server {
            message: message.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CalcError>;
