//! JSON handler: one structured object per line.

use std::io;

use serde_json::{Map, Value};

use super::{write_line, Handler, Record, SharedSink};

/// Serializes records as newline-delimited JSON objects.
///
/// Key order is insertion order: `time`, `level`, `msg`, optional `source`,
/// base attributes, then call attributes. Duplicate keys resolve to the last
/// write.
pub(crate) struct JsonHandler {
    sink: SharedSink,
}

impl JsonHandler {
    pub(crate) fn new(sink: SharedSink) -> Self {
        Self { sink }
    }
}

impl Handler for JsonHandler {
    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        let mut object = Map::with_capacity(4 + record.base.len() + record.attrs.len());
        object.insert("time".to_string(), Value::String(record.timestamp()));
        object.insert(
            "level".to_string(),
            Value::String(record.level.as_str().to_string()),
        );
        object.insert("msg".to_string(), Value::String(record.msg.to_string()));
        if let Some(source) = &record.source {
            object.insert("source".to_string(), Value::String(source.clone()));
        }
        for (key, value) in record.base.iter().chain(record.attrs) {
            object.insert(key.clone(), value.clone());
        }

        let mut line = serde_json::to_vec(&Value::Object(object))?;
        line.push(b'\n');
        write_line(&self.sink, &line)
    }
}
