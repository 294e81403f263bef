//! # Structured Logger
//!
//! JSON logs with deterministic key ordering: one line per event, the
//! event name first, remaining fields alphabetical. Synchronous, no
//! buffering.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured JSON logger
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Log to stderr (for errors)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        let mut output = String::with_capacity(128);
        output.push('{');
        output.push_str(&format!(
            "\"event\":{},\"severity\":\"{}\"",
            json_string(event),
            severity
        ));
        for (key, value) in sorted {
            output.push(',');
            output.push_str(&format!("{}:{}", json_string(key), json_string(value)));
        }
        output.push('}');

        // A failed log write is not worth failing the request over
        let _ = writeln!(writer, "{}", output);
    }
}

fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        Logger::log_to_writer(severity, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_event_and_severity_lead() {
        let line = render(Severity::Info, "server_started", &[]);
        assert_eq!(
            line.trim(),
            r#"{"event":"server_started","severity":"INFO"}"#
        );
    }

    #[test]
    fn test_fields_are_alphabetical() {
        let line = render(
            Severity::Error,
            "request_failed",
            &[("path", "/v1/products"), ("error", "boom")],
        );
        let error_pos = line.find("\"error\"").unwrap();
        let path_pos = line.find("\"path\"").unwrap();
        assert!(error_pos < path_pos);
    }

    #[test]
    fn test_values_are_escaped() {
        let line = render(Severity::Warn, "odd", &[("msg", "a \"quoted\" value")]);
        assert!(serde_json::from_str::<serde_json::Value>(line.trim()).is_ok());
    }
}
