//! OpenTelemetry trace correlation.

use serde_json::Value;

use crate::domain::context::Context;

/// Appends `trace_id` and `span_id` attributes when `ctx` carries a valid
/// span context.
///
/// A span context is usable only when both identifiers are non-zero; an
/// empty or invalid span (including one originating from a no-op tracer
/// provider) leaves `attrs` untouched. Identifiers are encoded as lowercase
/// hexadecimal, 32 characters for the trace ID and 16 for the span ID.
pub(crate) fn append_trace_kv(ctx: &Context, attrs: &mut Vec<(String, Value)>) {
    let Some(span) = ctx.span_context() else {
        return;
    };
    if !span.is_valid() {
        return;
    }

    attrs.push((
        "trace_id".to_string(),
        Value::String(span.trace_id().to_string()),
    ));
    attrs.push((
        "span_id".to_string(),
        Value::String(span.span_id().to_string()),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{SpanContext, SpanId, TraceFlags, TraceId, TraceState};
    use serde_json::json;

    fn valid_span() -> SpanContext {
        SpanContext::new(
            TraceId::from_bytes([
                0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16,
                0x17, 0x18, 0x19,
            ]),
            SpanId::from_bytes([0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]),
            TraceFlags::SAMPLED,
            false,
            TraceState::default(),
        )
    }

    #[test]
    fn test_valid_span_appends_ids_in_order() {
        let ctx = Context::new().with_span(valid_span());
        let mut attrs = vec![("k".to_string(), json!("v"))];
        append_trace_kv(&ctx, &mut attrs);

        assert_eq!(attrs[0], ("k".to_string(), json!("v")));
        assert_eq!(
            attrs[1],
            (
                "trace_id".to_string(),
                json!("0a0b0c0d0e0f10111213141516171819")
            )
        );
        assert_eq!(attrs[2], ("span_id".to_string(), json!("0102030405060708")));
    }

    #[test]
    fn test_no_span_leaves_attrs_unchanged() {
        let ctx = Context::new();
        let mut attrs = vec![("k".to_string(), json!("v"))];
        append_trace_kv(&ctx, &mut attrs);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_invalid_span_leaves_attrs_unchanged() {
        let ctx = Context::new().with_span(SpanContext::empty_context());
        let mut attrs = Vec::new();
        append_trace_kv(&ctx, &mut attrs);
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_zero_span_id_is_invalid() {
        let span = SpanContext::new(
            TraceId::from_bytes([1; 16]),
            SpanId::from_bytes([0; 8]),
            TraceFlags::default(),
            false,
            TraceState::default(),
        );
        let ctx = Context::new().with_span(span);
        let mut attrs = Vec::new();
        append_trace_kv(&ctx, &mut attrs);
        assert!(attrs.is_empty());
    }
}
