//! The `Logger` value and its print-style entry points.
//!
//! Every entry point funnels into [`Logger::write_entry`], which trims the
//! formatted text, wraps it in a [`LogRecord`] and writes the compact JSON
//! encoding with no trailing newline. The public print family targets stdout;
//! `write_entry` can be pointed at any `io::Write` sink.

use crate::config::LoggerConfig;
use crate::domain::{EmitError, LogRecord, Severity, SeverityError};
use crate::operand::{Operand, sprint};
use std::fmt;
use std::io::{self, Write};
use std::process;

/// Exit status used by the fatal variants.
pub const FATAL_EXIT_CODE: i32 = 1;

/// A structured logger carrying exactly one severity.
///
/// There is no global instance and no internal synchronization; mutation
/// requires `&mut self`, so sharing a logger across threads while changing its
/// severity needs the caller's own lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Logger {
    severity: Severity,
}

impl Logger {
    /// A logger at `DEFAULT` severity.
    pub const fn new() -> Self {
        Self::from_severity(Severity::Default)
    }

    pub const fn from_severity(severity: Severity) -> Self {
        Self { severity }
    }

    /// Builds a logger from a severity token.
    ///
    /// The token must match a canonical name exactly, including case; anything
    /// else yields a `DEFAULT` logger.
    pub fn with_severity(candidate: &str) -> Self {
        Severity::parse_exact(candidate)
            .map(Self::from_severity)
            .unwrap_or_default()
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::from_severity(config.severity)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Sets the severity if `candidate`, uppercased, is a canonical token.
    /// Invalid input leaves the logger unchanged and is not reported.
    pub fn set_severity(&mut self, candidate: &str) {
        let _ = self.try_set_severity(candidate);
    }

    /// Like [`Logger::set_severity`] but reports rejection.
    pub fn try_set_severity(&mut self, candidate: &str) -> Result<Severity, SeverityError> {
        let severity = candidate.parse::<Severity>()?;
        self.severity = severity;
        Ok(severity)
    }

    /// `"<SEVERITY>: "` followed by `text`.
    pub fn prefixed(&self, text: &str) -> String {
        format!("{}: {}", self.severity, text)
    }

    /// The record this logger would emit for `text`.
    pub fn record<'a>(&self, text: &'a str) -> LogRecord<'a> {
        LogRecord::new(self.severity, text)
    }

    /// Encodes `text` as a log entry and writes it to `writer`.
    pub fn write_entry<W: Write>(&self, writer: &mut W, text: &str) -> Result<(), EmitError> {
        let line = serde_json::to_vec(&self.record(text))?;
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }

    pub fn print<'a, I>(&self, operands: I)
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a>>,
    {
        self.emit(&sprint(operands));
    }

    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(&fmt::format(args));
    }

    pub fn prefix_print<'a, I>(&self, operands: I)
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a>>,
    {
        self.emit(&self.prefixed(&sprint(operands)));
    }

    pub fn prefix_printf(&self, args: fmt::Arguments<'_>) {
        self.emit(&self.prefixed(&fmt::format(args)));
    }

    /// Same as [`Logger::print`], then exits with [`FATAL_EXIT_CODE`].
    pub fn fatal<'a, I>(&self, operands: I) -> !
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a>>,
    {
        self.emit_then_exit(&sprint(operands))
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_then_exit(&fmt::format(args))
    }

    pub fn prefix_fatal<'a, I>(&self, operands: I) -> !
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a>>,
    {
        self.emit_then_exit(&self.prefixed(&sprint(operands)))
    }

    pub fn prefix_fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_then_exit(&self.prefixed(&fmt::format(args)))
    }

    /// Writes to stdout. The print family has no error channel, so a failed
    /// write only produces a diagnostic event.
    fn emit(&self, text: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.emit_to(&mut handle, text);
    }

    fn emit_to<W: Write>(&self, writer: &mut W, text: &str) {
        if let Err(error) = self.write_entry(writer, text) {
            tracing::warn!(
                severity = %self.severity,
                %error,
                "Failed to write structured log entry"
            );
        }
    }

    /// No destructors run past this point.
    fn emit_then_exit(&self, text: &str) -> ! {
        self.emit(text);
        tracing::debug!(
            severity = %self.severity,
            exit_code = FATAL_EXIT_CODE,
            "Terminating after fatal log entry"
        );
        process::exit(FATAL_EXIT_CODE)
    }
}

impl From<Severity> for Logger {
    fn from(severity: Severity) -> Self {
        Self::from_severity(severity)
    }
}

impl From<&LoggerConfig> for Logger {
    fn from(config: &LoggerConfig) -> Self {
        Self::from_config(config)
    }
}
