//! No-op logger implementation.
//!
//! Used when no logger has been stored in a context, so uninstrumented
//! code paths never need nil-checks and never crash.

use std::error::Error;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use super::{Logger, SharedLogger};
use crate::domain::context::Context;

/// A no-op logger that drops every record.
///
/// [`Context::logger`] resolves to this implementation when the context
/// carries no logger.
#[derive(Debug, Clone, Default)]
pub struct NoopLogger;

impl NoopLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoopLogger {
    fn for_ctx(self: Arc<Self>, _ctx: &Context) -> SharedLogger {
        self
    }

    fn debug_ctx(&self, _ctx: &Context, _msg: &str, _kv: &[Value]) {}

    fn info_ctx(&self, _ctx: &Context, _msg: &str, _kv: &[Value]) {}

    fn warn_ctx(&self, _ctx: &Context, _msg: &str, _kv: &[Value]) {}

    fn error_ctx(&self, _ctx: &Context, _msg: &str, _err: Option<&dyn Error>, _kv: &[Value]) {}
}

/// Returns the shared no-op instance; registry misses allocate nothing.
pub(crate) fn shared() -> SharedLogger {
    static NOOP: OnceLock<SharedLogger> = OnceLock::new();
    NOOP.get_or_init(|| Arc::new(NoopLogger)).clone()
}
