use thiserror::Error;

/// Rejected severity input.
///
/// Only the fallible APIs return this. `Logger::with_severity` and
/// `Logger::set_severity` fall back silently instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeverityError {
    #[error("Invalid severity '{input}'. Valid severities: {valid_levels:?}")]
    Invalid {
        input: String,
        valid_levels: Vec<String>,
    },
}

/// Failure while writing a log entry to a caller-supplied sink.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("IO error while writing log entry: {0}")]
    Io(#[from] std::io::Error),
}
