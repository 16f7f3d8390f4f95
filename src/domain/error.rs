use thiserror::Error;

/// Configuration errors surfaced by the strict construction path.
///
/// The lossy path ([`crate::LoggerBuilder::build`]) corrects these silently;
/// only [`crate::LoggerBuilder::try_build`] and
/// [`crate::LoggerBuilder::must_init`] report them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
}
