//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Logging infrastructure (default logger, writer handlers, sanitization,
//!   trace correlation)
//!
//! Infrastructure implementations satisfy the port traits defined in the
//! domain layer.

pub mod logging;
