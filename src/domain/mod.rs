//! Domain layer for gcp-log.
//!
//! Contains the canonical types shared across all modules:
//! - `Severity`: Cloud Logging severity token (DEFAULT through DEBUG)
//! - `LogRecord`: The `{severity, message}` pair written per call
//! - `SeverityError` / `EmitError`: Error types

pub mod error;
pub mod log_record;
pub mod severity;

pub use error::{EmitError, SeverityError};
pub use log_record::LogRecord;
pub use severity::{CRIT, ERR, Severity, WARN, is_valid_severity};
