use super::error::SeverityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry, as understood by Cloud Logging's structured
/// logging schema.
///
/// Serializes to the uppercase canonical token (`"WARNING"`, `"ERROR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Default,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
    Debug,
}

/// Alias of [`Severity::Warning`].
pub const WARN: Severity = Severity::Warning;
/// Alias of [`Severity::Error`].
pub const ERR: Severity = Severity::Error;
/// Alias of [`Severity::Critical`].
pub const CRIT: Severity = Severity::Critical;

impl Severity {
    /// Every canonical severity, in table order.
    pub const ALL: [Severity; 9] = [
        Severity::Default,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
        Severity::Debug,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Default => "DEFAULT",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Alert => "ALERT",
            Severity::Emergency => "EMERGENCY",
            Severity::Debug => "DEBUG",
        }
    }

    /// Exact-case lookup of a canonical token. `"warning"` and `"WARN"` both miss.
    pub fn parse_exact(candidate: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == candidate)
    }

    fn valid_levels() -> Vec<String> {
        Self::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SeverityError;

    /// Case-insensitive match against the canonical tokens. Alias names such as
    /// `WARN` exist only as constants and are not accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_exact(&s.to_uppercase()).ok_or_else(|| SeverityError::Invalid {
            input: s.to_string(),
            valid_levels: Self::valid_levels(),
        })
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Severity::Error,
            tracing::Level::WARN => Severity::Warning,
            tracing::Level::INFO => Severity::Info,
            _ => Severity::Debug,
        }
    }
}

/// Reports whether `candidate`, once uppercased, is one of the nine canonical
/// severity tokens.
pub fn is_valid_severity(candidate: &str) -> bool {
    candidate.parse::<Severity>().is_ok()
}
