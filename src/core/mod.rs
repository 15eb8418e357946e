//! Core arithmetic
//!
//! Everything here is pure and shared by the CLI and the HTTP service.

pub mod arithmetic;

pub use arithmetic::{add, parse_operand};
