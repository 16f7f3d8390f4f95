//! Logging infrastructure
//!
//! The default writer-backed implementation of the `Logger` port:
//! - JSON and human-readable text handlers
//! - Key/value sanitization
//! - OpenTelemetry trace correlation
//! - Builder-based configuration

pub mod config;
pub(crate) mod handlers;
pub mod logger;
mod otel;
pub mod sanitize;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerBuilder;
pub use sanitize::sanitize_kv;
