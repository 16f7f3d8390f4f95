//! Default writer-backed implementation of the `Logger` port.

use std::error::Error;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::Value;

use super::config::{LogConfig, LogFormat};
use super::handlers::{Handler, JsonHandler, Record, SharedSink, TextHandler};
use super::otel;
use super::sanitize;
use crate::domain::context::Context;
use crate::domain::error::ConfigError;
use crate::domain::ports::{Level, Logger, SharedLogger};

/// Builder for the default logger.
///
/// Steps are applied in order over the defaults (level `info`, JSON output,
/// no caller info, stdout sink); later steps override earlier ones.
///
/// Two finalization contracts exist and are intentionally separate:
/// [`LoggerBuilder::build`] always succeeds and silently corrects an
/// unrecognized level to `info`, while [`LoggerBuilder::try_build`] and
/// [`LoggerBuilder::must_init`] reject it.
///
/// # Example
///
/// ```
/// use ctxlog::LoggerBuilder;
///
/// let log = LoggerBuilder::new()
///     .service("auth")
///     .level("debug")
///     .caller(true)
///     .build();
/// ```
pub struct LoggerBuilder {
    config: LogConfig,
    writer: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Starts from the default configuration.
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
            writer: None,
        }
    }

    /// Bulk-applies a deserialized [`LogConfig`]; later steps still override.
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the service name bound to every record.
    pub fn service(mut self, name: impl Into<String>) -> Self {
        self.config.service = Some(name.into());
        self
    }

    /// Sets the minimum level (`debug`, `info`, `warn`, `error`).
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Selects human-readable text output (`true`) or JSON (`false`).
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.format = if pretty {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        };
        self
    }

    /// Toggles call-site capture (`source` attribute).
    pub fn caller(mut self, enabled: bool) -> Self {
        self.config.with_caller = enabled;
        self
    }

    /// Overrides the output sink; defaults to process standard output.
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Finalizes the logger; never fails.
    ///
    /// An unrecognized level string silently falls back to `info`.
    pub fn build(self) -> SharedLogger {
        let level = Level::parse_lossy(&self.config.level);
        Arc::new(self.into_logger(level))
    }

    /// Finalizes the logger, rejecting invalid configuration.
    pub fn try_build(self) -> Result<SharedLogger, ConfigError> {
        let level: Level = self.config.level.parse()?;
        Ok(Arc::new(self.into_logger(level)))
    }

    /// Finalizes the logger, panicking on invalid configuration.
    ///
    /// For callers that explicitly opt into a non-recoverable initialization
    /// path instead of a silently downgraded config.
    pub fn must_init(self) -> SharedLogger {
        match self.try_build() {
            Ok(logger) => logger,
            Err(err) => panic!("logger initialization failed: {err}"),
        }
    }

    fn into_logger(self, min_level: Level) -> DefaultLogger {
        let sink: SharedSink = Arc::new(Mutex::new(
            self.writer.unwrap_or_else(|| Box::new(io::stdout())),
        ));
        let handler: Arc<dyn Handler> = match self.config.format {
            LogFormat::Json => Arc::new(JsonHandler::new(sink)),
            LogFormat::Pretty => Arc::new(TextHandler::new(sink)),
        };

        let mut base = Vec::new();
        if let Some(service) = self.config.service {
            if !service.is_empty() {
                base.push(("service".to_string(), Value::String(service)));
            }
        }

        DefaultLogger {
            handler,
            min_level,
            with_caller: self.config.with_caller,
            base,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Default `Logger` implementation composing sanitization, trace
/// correlation, and a writer handler.
///
/// Immutable after construction; `for_ctx` derives new instances sharing
/// the handler instead of mutating the receiver.
struct DefaultLogger {
    handler: Arc<dyn Handler>,
    min_level: Level,
    with_caller: bool,
    /// Service attribute plus any `for_ctx` enrichment, in bind order.
    base: Vec<(String, Value)>,
}

impl DefaultLogger {
    fn emit(
        &self,
        level: Level,
        ctx: &Context,
        msg: &str,
        err: Option<&dyn Error>,
        kv: &[Value],
        location: &'static Location<'static>,
    ) {
        if level < self.min_level {
            return;
        }

        let mut attrs = sanitize::into_pairs(sanitize::sanitize_kv(kv));
        otel::append_trace_kv(ctx, &mut attrs);
        if let Some(err) = err {
            attrs.push(("error".to_string(), Value::String(err.to_string())));
        }

        let record = Record {
            time: Utc::now(),
            level,
            msg,
            source: self
                .with_caller
                .then(|| format!("{}:{}", location.file(), location.line())),
            base: &self.base,
            attrs: &attrs,
        };

        // Fire-and-forget: sink failures are not surfaced to call sites.
        let _ = self.handler.emit(&record);
    }
}

impl Logger for DefaultLogger {
    fn for_ctx(self: Arc<Self>, ctx: &Context) -> SharedLogger {
        match ctx.fields() {
            Some(fields) if !fields.is_empty() => {
                let mut base = self.base.clone();
                base.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
                Arc::new(Self {
                    handler: Arc::clone(&self.handler),
                    min_level: self.min_level,
                    with_caller: self.with_caller,
                    base,
                })
            }
            _ => self,
        }
    }

    #[track_caller]
    fn debug_ctx(&self, ctx: &Context, msg: &str, kv: &[Value]) {
        self.emit(Level::Debug, ctx, msg, None, kv, Location::caller());
    }

    #[track_caller]
    fn info_ctx(&self, ctx: &Context, msg: &str, kv: &[Value]) {
        self.emit(Level::Info, ctx, msg, None, kv, Location::caller());
    }

    #[track_caller]
    fn warn_ctx(&self, ctx: &Context, msg: &str, kv: &[Value]) {
        self.emit(Level::Warn, ctx, msg, None, kv, Location::caller());
    }

    #[track_caller]
    fn error_ctx(&self, ctx: &Context, msg: &str, err: Option<&dyn Error>, kv: &[Value]) {
        self.emit(Level::Error, ctx, msg, err, kv, Location::caller());
    }
}
