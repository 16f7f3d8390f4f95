//! Text handler: single-line logfmt-style output.

use std::io;

use serde_json::Value;

use super::{write_line, Handler, Record, SharedSink};

/// Serializes records as human-readable `key=value` lines.
///
/// Values containing whitespace, quotes, or `=` are quoted; non-string
/// values render as compact JSON. Field order matches the JSON handler.
pub(crate) struct TextHandler {
    sink: SharedSink,
}

impl TextHandler {
    pub(crate) fn new(sink: SharedSink) -> Self {
        Self { sink }
    }
}

impl Handler for TextHandler {
    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        let mut line = String::with_capacity(128);

        push_pair(&mut line, "time", &record.timestamp());
        push_pair(&mut line, "level", record.level.as_str());
        push_pair(&mut line, "msg", record.msg);
        if let Some(source) = &record.source {
            push_pair(&mut line, "source", source);
        }
        for (key, value) in record.base.iter().chain(record.attrs) {
            push_pair(&mut line, key, &render(value));
        }
        line.push('\n');

        write_line(&self.sink, line.as_bytes())
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn push_pair(line: &mut String, key: &str, value: &str) {
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(key);
    line.push('=');
    if needs_quoting(value) {
        line.push_str(&format!("{value:?}"));
    } else {
        line.push_str(value);
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty() || value.contains([' ', '\t', '\n', '"', '='])
}
