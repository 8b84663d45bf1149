//! Structured logging for Google Cloud Logging.
//!
//! Plain stdout lines are all recorded at severity `DEFAULT`. This crate wraps each
//! message in a single-line JSON object carrying a `severity` field, which the
//! Cloud Logging agent picks up as the entry's level:
//!
//! ```text
//! {"severity":"WARNING","message":"This is a Warning Message"}
//! ```
//!
//! Create one [`Logger`] per severity you need and call the print-style methods
//! on it:
//!
//! ```
//! use gcp_log::{Logger, Severity, gcp_printf};
//!
//! let warn = Logger::from(Severity::Warning);
//! let error = Logger::from(gcp_log::ERR);
//! warn.print(["This is a Warning Message"]);
//! gcp_printf!(error, "{} failed after {} attempts", "upload", 3);
//! ```
//!
//! The `prefix_*` variants also put the severity at the front of the message
//! text (`"WARNING: Hello World"`), which helps when the entries are routed on
//! to a system that only sees the message.
//!
//! The `fatal*` variants emit and then exit the process with status 1 without
//! unwinding. Use the plain variants when cleanup must run first.

// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::module_name_repetitions, // e.g. LoggerConfig in config module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Severity tokens like EMERGENCY read as code
)]

pub mod config;
pub mod domain;
pub mod logger;
mod macros;
pub mod operand;

pub use config::LoggerConfig;
pub use domain::{
    CRIT, ERR, EmitError, LogRecord, Severity, SeverityError, WARN, is_valid_severity,
};
pub use logger::{FATAL_EXIT_CODE, Logger};
pub use operand::{Operand, sprint};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
