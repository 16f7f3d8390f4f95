//! Writer handlers for the default logger.
//!
//! A handler serializes one [`Record`] per emission to a shared sink. Two
//! modes exist, mirroring the two output formats: one JSON object per line,
//! and single-line human-readable text.

pub(crate) mod json;
pub(crate) mod text;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::domain::ports::Level;

pub(crate) use json::JsonHandler;
pub(crate) use text::TextHandler;

/// Output sink shared by a handler and every logger derived from it.
pub(crate) type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// A single log record; assembled per emission call, never retained.
pub(crate) struct Record<'a> {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub msg: &'a str,
    /// Call site as `file:line` when caller capture is enabled.
    pub source: Option<String>,
    /// Base attributes (service and `for_ctx` enrichment) in bind order.
    pub base: &'a [(String, Value)],
    /// Sanitized call attributes in call order, trace IDs and error last.
    pub attrs: &'a [(String, Value)],
}

impl Record<'_> {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub(crate) fn timestamp(&self) -> String {
        self.time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Serializes records to a sink.
///
/// `emit` reports I/O failures so sinks other than stdout can be tested; the
/// logger itself treats emission as fire-and-forget.
pub(crate) trait Handler: Send + Sync {
    fn emit(&self, record: &Record<'_>) -> io::Result<()>;
}

pub(crate) fn write_line(sink: &SharedSink, line: &[u8]) -> io::Result<()> {
    let mut sink = sink.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    sink.write_all(line)
}
