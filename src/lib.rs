//! Ctxlog - Context-First Structured Logging Facade
//!
//! Ctxlog is a minimal logging contract for services, one default
//! implementation backed by leveled JSON/text writer handlers, explicit
//! context-based logger injection, and OpenTelemetry trace correlation.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): The [`Logger`] port, the immutable
//!   [`Context`] value, and configuration errors
//! - **Infrastructure Layer** (`infrastructure`): The default logger adapter,
//!   writer handlers, key/value sanitization, and trace correlation
//!
//! Services depend on the [`Logger`] trait only; the concrete backend is an
//! implementation detail and can be swapped without touching call sites.
//!
//! # Example
//!
//! ```
//! use ctxlog::{kv, Context, Logger, LoggerBuilder};
//!
//! let log = LoggerBuilder::new()
//!     .service("payments")
//!     .level("debug")
//!     .build();
//!
//! let ctx = Context::new().with_logger(log);
//! let ctx = ctx.with_fields([("request_id", "r-42")]);
//!
//! ctx.logger().for_ctx(&ctx).info_ctx(&ctx, "processing", &kv!["order_id", 42]);
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::context::Context;
pub use domain::error::ConfigError;
pub use domain::ports::{Level, Logger, NoopLogger, SharedLogger};
pub use infrastructure::logging::{sanitize_kv, LogConfig, LogFormat, LoggerBuilder};

// The span-context type consumed by [`Context::with_span`], re-exported so
// callers do not need a direct `opentelemetry` dependency.
pub use opentelemetry::trace::SpanContext;

#[doc(hidden)]
pub use serde_json as __serde_json;

/// Builds a `Vec<serde_json::Value>` of alternating keys and values for the
/// emission methods on [`Logger`].
///
/// Every argument is converted through `serde_json::json!`, so any
/// serializable expression is accepted.
///
/// # Example
///
/// ```
/// use ctxlog::kv;
///
/// let pairs = kv!["user_id", "12345", "attempt", 3];
/// assert_eq!(pairs.len(), 4);
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::__serde_json::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::__serde_json::json!($item)),+]
    };
}
