use serde::{Deserialize, Serialize};

/// Logging configuration
///
/// Serde-derived with per-field defaults so host applications can embed it
/// in their own configuration files. The output sink is not part of the
/// config; it is supplied through [`crate::LoggerBuilder::writer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Service name bound to every record as a base attribute
    #[serde(default)]
    pub service: Option<String>,

    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Capture call-site file and line on each record
    #[serde(default)]
    pub with_caller: bool,
}

/// Output format for log records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Human-readable single-line text
    Pretty,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service: None,
            level: default_log_level(),
            format: default_format(),
            with_caller: false,
        }
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::Json
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> LogFormat {
    LogFormat::Json
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.service, None);
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_caller);
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let config: LogConfig = serde_json::from_str(r#"{"service": "auth"}"#).unwrap();
        assert_eq!(config.service.as_deref(), Some("auth"));
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_deserialize_format() {
        let config: LogConfig =
            serde_json::from_str(r#"{"level": "debug", "format": "pretty"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.level, "debug");
    }
}
