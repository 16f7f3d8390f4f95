use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::context::Context;
use crate::domain::error::ConfigError;

/// Log level enumeration for structured logging
///
/// Levels are ordered from most verbose (Debug) to most severe (Error),
/// which allows filtering and comparison operations.
///
/// # Examples
///
/// ```
/// use ctxlog::Level;
///
/// assert!(Level::Error > Level::Info);
/// assert!(Level::Debug < Level::Warn);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Debug information useful during development
    Debug,
    /// Informational messages about normal operations
    Info,
    /// Warning messages for potentially problematic situations
    Warn,
    /// Error messages for failure conditions
    Error,
}

impl Level {
    /// Returns the string representation of the log level
    ///
    /// # Examples
    ///
    /// ```
    /// use ctxlog::Level;
    ///
    /// assert_eq!(Level::Info.as_str(), "INFO");
    /// assert_eq!(Level::Error.as_str(), "ERROR");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level string, falling back to [`Level::Info`] when the input
    /// is not recognized.
    ///
    /// This is the lossy counterpart of the [`FromStr`] implementation and
    /// backs the never-failing construction path.
    pub fn parse_lossy(level: &str) -> Self {
        level.parse().unwrap_or(Self::Info)
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(level: &str) -> Result<Self, Self::Err> {
        match level.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" | "" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidLevel(level.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared handle to any logging backend.
pub type SharedLogger = Arc<dyn Logger>;

/// Port trait for structured logging operations following hexagonal architecture
///
/// Services must depend on this trait only. The concrete backend (the default
/// writer-based logger, the no-op null object, or any future adapter) is an
/// infrastructure concern and can be swapped without changing call sites.
///
/// # Structured key/value pairs
///
/// The emission methods accept a slice of `serde_json::Value` meant to
/// represent alternating keys and values. Keys must be strings; malformed
/// input is normalized rather than rejected, so a log call never panics and
/// never fails. The [`crate::kv!`] macro builds argument lists from
/// heterogeneous expressions.
///
/// # Context enrichment
///
/// [`Logger::for_ctx`] derives a logger from the given [`Context`]. If the
/// context carries predefined fields (see [`Context::with_fields`]), the
/// returned logger is enriched with those fields; when no fields are present
/// the original instance is returned unchanged.
///
/// # Error records
///
/// When the error argument to [`Logger::error_ctx`] is `None`, no `error`
/// attribute is emitted; a record never carries a misleading empty error
/// indicator.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`. Instances are immutable after
/// construction, so a [`SharedLogger`] can be used concurrently without
/// locking.
///
/// # Examples
///
/// ```
/// use ctxlog::{kv, Context, Logger, LoggerBuilder};
///
/// fn do_work(ctx: &Context) {
///     // Log line will include any fields attached to the context.
///     ctx.logger().for_ctx(ctx).info_ctx(ctx, "doing work", &kv!["step", 1]);
/// }
///
/// let log = LoggerBuilder::new().service("worker").build();
/// let ctx = Context::new()
///     .with_logger(log)
///     .with_fields([("trace_id", "abc-123")]);
/// do_work(&ctx);
/// ```
pub trait Logger: Send + Sync {
    /// Derives a logger enriched with the fields attached to `ctx`, if any.
    ///
    /// Returns the receiver itself (same allocation) when the context carries
    /// no fields. The receiver is never mutated.
    fn for_ctx(self: Arc<Self>, ctx: &Context) -> SharedLogger;

    /// Emits a debug-level record.
    #[track_caller]
    fn debug_ctx(&self, ctx: &Context, msg: &str, kv: &[Value]);

    /// Emits an info-level record.
    #[track_caller]
    fn info_ctx(&self, ctx: &Context, msg: &str, kv: &[Value]);

    /// Emits a warn-level record.
    #[track_caller]
    fn warn_ctx(&self, ctx: &Context, msg: &str, kv: &[Value]);

    /// Emits an error-level record.
    ///
    /// When `err` is `Some`, an `error` attribute holding its display string
    /// is appended after trace correlation; when `None`, no error attribute
    /// is added.
    #[track_caller]
    fn error_ctx(&self, ctx: &Context, msg: &str, err: Option<&dyn Error>, kv: &[Value]);
}
