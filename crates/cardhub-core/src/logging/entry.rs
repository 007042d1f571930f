//! One structured log line.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event severity, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<&tracing::Level> for Severity {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE => Severity::Trace,
            tracing::Level::DEBUG => Severity::Debug,
            tracing::Level::INFO => Severity::Info,
            tracing::Level::WARN => Severity::Warn,
            tracing::Level::ERROR => Severity::Error,
        }
    }
}

/// A log event as stored in the session file.
///
/// ```json
/// {"at":"2026-10-17T09:30:00.120Z","severity":"debug","window":"main",
///  "source":"cardhub_core::filter","message":"Applied category filter",
///  "data":{"category":"video","visible":2},"scope":["tab_click"]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// UTC, millisecond precision
    pub at: String,
    pub severity: Severity,
    /// App instance that wrote the line
    pub window: String,
    /// tracing target, usually the module path
    pub source: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
    /// Enclosing spans, outermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
}

impl LogRecord {
    /// Record stamped with the current time.
    pub fn now(severity: Severity, window: &str, source: &str, message: impl Into<String>) -> Self {
        Self {
            at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            severity,
            window: window.to_owned(),
            source: source.to_owned(),
            message: message.into(),
            data: Map::new(),
            scope: Vec::new(),
        }
    }

    pub fn with_data(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_owned(), value.into());
        self
    }

    pub fn within(mut self, scope: Vec<String>) -> Self {
        self.scope = scope;
        self
    }

    /// Scope rendered as `outer > inner`.
    pub fn scope_path(&self) -> String {
        self.scope.join(" > ")
    }

    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn parse_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_and_scope_are_omitted() {
        let record = LogRecord::now(Severity::Info, "main", "cardhub", "Starting Card Hub");
        let line = record.to_line().unwrap();
        assert!(!line.contains("\"data\""));
        assert!(!line.contains("\"scope\""));
        assert!(line.contains("\"severity\":\"info\""));
        assert_eq!(LogRecord::parse_line(&line).unwrap(), record);
    }

    #[test]
    fn data_and_scope_survive_parsing() {
        let record = LogRecord::now(Severity::Debug, "main", "cardhub_core::filter", "Applied category filter")
            .with_data("visible", 3)
            .with_data("category", "video")
            .within(vec!["page".to_string(), "tab_click".to_string()]);
        let parsed = LogRecord::parse_line(&record.to_line().unwrap()).unwrap();
        assert_eq!(parsed.data["visible"], 3);
        assert_eq!(parsed.scope_path(), "page > tab_click");
    }

    #[test]
    fn severity_follows_tracing_order() {
        assert_eq!(Severity::from(&tracing::Level::WARN), Severity::Warn);
        assert!(Severity::Error > Severity::Info);
    }
}
