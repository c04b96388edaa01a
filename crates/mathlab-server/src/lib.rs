//! MathLab HTTP API server library.

pub mod server;

pub use server::{ServerConfig, create_app, start_server};
