//! Execution context for logger injection and field enrichment.
//!
//! [`Context`] is an immutable chain of frames. Attaching a value pushes a
//! new frame in O(1) without touching prior frames, so every context ever
//! handed out keeps observing exactly the state it was built with. Lookups
//! walk the chain newest-first.
//!
//! Three kinds of frames exist: enrichment fields (picked up by
//! [`crate::Logger::for_ctx`]), a logger handle (the context logger
//! registry), and an OpenTelemetry span context (consumed by trace
//! correlation).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use opentelemetry::trace::SpanContext;
use serde_json::Value;

use crate::domain::ports::{noop, SharedLogger};

/// Field map attached to a context frame.
///
/// Sorted so enrichment attributes are bound in a deterministic order.
pub(crate) type FieldMap = BTreeMap<String, Value>;

/// An immutable, cheaply clonable execution context.
///
/// Cloning is O(1): contexts share their frame chain through `Arc`.
/// `Context::default()` (or [`Context::new`]) is the empty base context.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Frame>>,
}

struct Frame {
    slot: Slot,
    parent: Option<Arc<Frame>>,
}

enum Slot {
    Fields(Arc<FieldMap>),
    Logger(SharedLogger),
    Span(SpanContext),
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, slot: Slot) -> Self {
        Self {
            head: Some(Arc::new(Frame {
                slot,
                parent: self.head.clone(),
            })),
        }
    }

    /// Returns a context carrying the union of the fields already visible and
    /// `fields`, with new keys overwriting old keys on conflict.
    ///
    /// Previously derived contexts keep their own map untouched; attaching an
    /// empty collection returns the receiver unchanged without a new frame.
    ///
    /// # Example
    ///
    /// ```
    /// use ctxlog::Context;
    /// use serde_json::json;
    ///
    /// let base = Context::new().with_fields([("tenant", json!("t1"))]);
    /// let child = base.with_fields([("user", json!("u1"))]);
    /// // `base` still carries only the tenant field; `child` carries both.
    /// ```
    pub fn with_fields<I, K, V>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let fresh: FieldMap = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if fresh.is_empty() {
            return self.clone();
        }

        let merged = match self.fields() {
            Some(base) => {
                let mut merged = (*base).clone();
                merged.extend(fresh);
                merged
            }
            None => fresh,
        };

        self.push(Slot::Fields(Arc::new(merged)))
    }

    /// The newest field map visible from this context, if any.
    ///
    /// Retrieval is internal; callers enrich through
    /// [`crate::Logger::for_ctx`].
    pub(crate) fn fields(&self) -> Option<Arc<FieldMap>> {
        let mut current = self.head.as_ref();
        while let Some(frame) = current {
            if let Slot::Fields(map) = &frame.slot {
                return Some(Arc::clone(map));
            }
            current = frame.parent.as_ref();
        }
        None
    }

    /// Returns a context carrying `logger` for downstream retrieval.
    pub fn with_logger(&self, logger: SharedLogger) -> Self {
        self.push(Slot::Logger(logger))
    }

    /// Retrieves the logger stored in this context.
    ///
    /// Resolves to the shared no-op logger when none was stored, so the
    /// result is always usable.
    pub fn logger(&self) -> SharedLogger {
        let mut current = self.head.as_ref();
        while let Some(frame) = current {
            if let Slot::Logger(logger) = &frame.slot {
                return Arc::clone(logger);
            }
            current = frame.parent.as_ref();
        }
        noop::shared()
    }

    /// Returns a context carrying `span` for trace correlation.
    ///
    /// The span context is consumed by the emission methods; this crate never
    /// creates or manages spans itself.
    pub fn with_span(&self, span: SpanContext) -> Self {
        self.push(Slot::Span(span))
    }

    /// The newest span context visible from this context, if any.
    pub(crate) fn span_context(&self) -> Option<SpanContext> {
        let mut current = self.head.as_ref();
        while let Some(frame) = current {
            if let Slot::Span(span) = &frame.slot {
                return Some(span.clone());
            }
            current = frame.parent.as_ref();
        }
        None
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frames = 0usize;
        let mut current = self.head.as_ref();
        while let Some(frame) = current {
            frames += 1;
            current = frame.parent.as_ref();
        }
        f.debug_struct("Context").field("frames", &frames).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{Logger, NoopLogger};
    use serde_json::json;

    #[test]
    fn test_with_fields_merges_and_overwrites() {
        let ctx = Context::new()
            .with_fields([("trace_id", json!("abc")), ("user", json!("u0"))])
            .with_fields([("user", json!("u1"))]);

        let fields = ctx.fields().unwrap();
        assert_eq!(fields.get("trace_id"), Some(&json!("abc")));
        assert_eq!(fields.get("user"), Some(&json!("u1")));
    }

    #[test]
    fn test_with_fields_copy_on_write() {
        let base = Context::new().with_fields([("trace_id", json!("abc"))]);
        let child = base.with_fields([("user", json!("u1"))]);

        let base_fields = base.fields().unwrap();
        assert_eq!(base_fields.len(), 1);
        assert_eq!(base_fields.get("trace_id"), Some(&json!("abc")));
        assert!(base_fields.get("user").is_none());

        let child_fields = child.fields().unwrap();
        assert_eq!(child_fields.len(), 2);
    }

    #[test]
    fn test_with_empty_fields_pushes_no_frame() {
        let base = Context::new().with_fields([("k", json!("v"))]);
        let same = base.with_fields(std::iter::empty::<(String, Value)>());
        assert!(Arc::ptr_eq(
            &base.fields().unwrap(),
            &same.fields().unwrap()
        ));
    }

    #[test]
    fn test_logger_roundtrip() {
        let logger: SharedLogger = Arc::new(NoopLogger::new());
        let ctx = Context::new().with_logger(Arc::clone(&logger));
        assert!(Arc::ptr_eq(&ctx.logger(), &logger));
    }

    #[test]
    fn test_logger_falls_back_to_noop() {
        // Never panics, never yields an unusable handle.
        let ctx = Context::new();
        let logger = ctx.logger();
        logger.info_ctx(&ctx, "dropped", &[]);
    }

    #[test]
    fn test_newest_frame_shadows() {
        let first: SharedLogger = Arc::new(NoopLogger::new());
        let second: SharedLogger = Arc::new(NoopLogger::new());
        let ctx = Context::new()
            .with_logger(Arc::clone(&first))
            .with_logger(Arc::clone(&second));
        assert!(Arc::ptr_eq(&ctx.logger(), &second));
    }

    #[test]
    fn test_span_context_absent_by_default() {
        assert!(Context::new().span_context().is_none());
    }
}
