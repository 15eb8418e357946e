//! HTTP service
//!
//! Exposes `GET /add/{a}/{b}` behind request logging and panic recovery.

pub mod args;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use args::{parse_args, ServiceArgs};
pub use handlers::{AddResponse, ErrorBody};
pub use server::Server;
