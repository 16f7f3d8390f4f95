//! Key/value sanitization for the emission methods.

use serde_json::Value;

/// Normalizes key-value pairs for structured logging.
///
/// - If the length is odd, the dangling element is dropped and
///   `kv_error="odd_length"` is appended.
/// - Keys must be strings; a non-string key degrades to an empty string
///   (value preserved) to avoid panics.
///
/// Pure and side-effect free; safe for empty input and arbitrarily large
/// sequences.
///
/// # Example
///
/// ```
/// use ctxlog::sanitize_kv;
/// use serde_json::json;
///
/// let out = sanitize_kv(&[json!("port"), json!(8080), json!("dangling")]);
/// assert_eq!(
///     out,
///     vec![json!("port"), json!(8080), json!("kv_error"), json!("odd_length")]
/// );
/// ```
pub fn sanitize_kv(kv: &[Value]) -> Vec<Value> {
    if kv.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(kv.len() + 2);

    for pair in kv.chunks_exact(2) {
        let key = match &pair[0] {
            Value::String(key) => key.clone(),
            _ => String::new(),
        };
        out.push(Value::String(key));
        out.push(pair[1].clone());
    }

    if kv.len() % 2 != 0 {
        out.push(Value::String("kv_error".to_string()));
        out.push(Value::String("odd_length".to_string()));
    }

    out
}

/// Pairs a sanitized sequence into `(key, value)` tuples.
///
/// Keys are guaranteed to be strings after [`sanitize_kv`].
pub(crate) fn into_pairs(kv: Vec<Value>) -> Vec<(String, Value)> {
    let mut pairs = Vec::with_capacity(kv.len() / 2);
    let mut values = kv.into_iter();
    while let (Some(key), Some(value)) = (values.next(), values.next()) {
        let key = match key {
            Value::String(key) => key,
            other => other.to_string(),
        };
        pairs.push((key, value));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_even_input_passes_through() {
        let kv = vec![json!("a"), json!(1), json!("b"), json!("two")];
        assert_eq!(sanitize_kv(&kv), kv);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(sanitize_kv(&[]).is_empty());
    }

    #[test]
    fn test_odd_input_appends_marker() {
        let out = sanitize_kv(&[json!("a"), json!(1), json!("dangling")]);
        assert_eq!(
            out,
            vec![json!("a"), json!(1), json!("kv_error"), json!("odd_length")]
        );
    }

    #[test]
    fn test_single_element_becomes_marker_only() {
        let out = sanitize_kv(&[json!("dangling")]);
        assert_eq!(out, vec![json!("kv_error"), json!("odd_length")]);
    }

    #[test]
    fn test_non_string_key_degrades_to_empty() {
        let out = sanitize_kv(&[json!(42), json!("value")]);
        assert_eq!(out, vec![json!(""), json!("value")]);
    }

    #[test]
    fn test_into_pairs() {
        let pairs = into_pairs(vec![json!("a"), json!(1), json!("b"), json!(null)]);
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), json!(1)),
                ("b".to_string(), json!(null))
            ]
        );
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z0-9_]{0,12}".prop_map(Value::from),
        ]
    }

    proptest! {
        #[test]
        fn prop_output_is_well_formed(kv in proptest::collection::vec(arb_value(), 0..32)) {
            let out = sanitize_kv(&kv);
            prop_assert_eq!(out.len() % 2, 0);
            for pair in out.chunks(2) {
                prop_assert!(pair[0].is_string());
            }
        }

        #[test]
        fn prop_values_survive_at_their_position(kv in proptest::collection::vec(arb_value(), 0..32)) {
            let out = sanitize_kv(&kv);
            for (i, pair) in kv.chunks_exact(2).enumerate() {
                prop_assert_eq!(&out[i * 2 + 1], &pair[1]);
            }
        }
    }
}
