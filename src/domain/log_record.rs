use super::severity::Severity;
use serde::Serialize;

/// One structured log entry, built per call and encoded immediately.
///
/// Field order is part of the wire format: `severity` always precedes `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Builds a record, trimming leading and trailing whitespace from `text`.
    pub fn new(severity: Severity, text: &'a str) -> Self {
        Self {
            severity,
            message: text.trim(),
        }
    }

    /// Compact single-line JSON, no trailing newline. `<`, `>`, `&`, U+2028 and
    /// U+2029 are written unescaped.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_compact_encoding() {
        let record = LogRecord::new(Severity::Default, "Hello World");
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"severity":"DEFAULT","message":"Hello World"}"#
        );
    }

    #[test]
    fn test_trims_outer_whitespace_only() {
        let record = LogRecord::new(Severity::Info, "\n\t  spaced   out \r\n ");
        assert_eq!(record.message, "spaced   out");
    }

    #[test]
    fn test_escapes_message() {
        let record = LogRecord::new(Severity::Error, "quote \" and\nnewline \\ tab\t end");
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"severity":"ERROR","message":"quote \" and\nnewline \\ tab\t end"}"#
        );
    }

    #[test]
    fn test_html_and_line_separators_written_raw() {
        let record = LogRecord::new(Severity::Default, "a<b>&c \u{2028} \u{2029} x");
        assert_eq!(
            record.to_json().unwrap(),
            "{\"severity\":\"DEFAULT\",\"message\":\"a<b>&c \u{2028} \u{2029} x\"}"
        );
    }

    #[test]
    fn test_empty_message() {
        let record = LogRecord::new(Severity::Notice, "   ");
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"severity":"NOTICE","message":""}"#
        );
    }

    #[test]
    fn test_output_parses_back() {
        let record = LogRecord::new(Severity::Alert, "ünïcødé ✓");
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["severity"], "ALERT");
        assert_eq!(value["message"], "ünïcødé ✓");
    }
}
