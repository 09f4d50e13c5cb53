//! Log entries and their text renderings

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::level::{LogComplexity, LogLevel};

/// Where a log call was made
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    /// Source file path
    pub file: String,
    /// Line number within the file
    pub line: u32,
    /// Enclosing function
    pub function: String,
}

impl CallSite {
    /// Create a call site from its parts
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }
}

/// A single logged event
///
/// Entries are immutable once created; the store only appends and evicts them.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    id: Uuid,
    timestamp: DateTime<Utc>,
    messages: Vec<String>,
    level: LogLevel,
    complexity: LogComplexity,
    call_site: CallSite,
}

impl LogEntry {
    /// Create a new entry stamped with the current time
    pub fn new(
        messages: Vec<String>,
        level: LogLevel,
        complexity: LogComplexity,
        call_site: CallSite,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            messages,
            level,
            complexity,
            call_site,
        }
    }

    /// Identity for list rendering; not an ordering key
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn complexity(&self) -> LogComplexity {
        self.complexity
    }

    pub fn call_site(&self) -> &CallSite {
        &self.call_site
    }

    /// Glyph followed by the comma-joined message parts
    pub fn simple_line(&self) -> String {
        format!("{} {}", self.level.glyph(), self.messages.join(", "))
    }

    /// Simple rendering plus call-site detail
    pub fn complex_line(&self) -> String {
        format!(
            "{} - {} @ line {}, in function {}",
            self.simple_line(),
            self.call_site.file,
            self.call_site.line,
            self.call_site.function
        )
    }

    /// Rendering selected by the given complexity
    pub fn render(&self, complexity: LogComplexity) -> String {
        match complexity {
            LogComplexity::Simple => self.simple_line(),
            LogComplexity::Complex => self.complex_line(),
        }
    }

    /// Line sent to the diagnostic sink
    ///
    /// Fatal entries always carry call-site context.
    pub fn diagnostic_line(&self) -> String {
        if self.level.is_fatal() {
            self.complex_line()
        } else {
            self.render(self.complexity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, complexity: LogComplexity, parts: &[&str]) -> LogEntry {
        LogEntry::new(
            parts.iter().map(|p| p.to_string()).collect(),
            level,
            complexity,
            CallSite::new("src/app.rs", 42, "app::run"),
        )
    }

    #[test]
    fn test_simple_line_joins_parts() {
        let e = entry(LogLevel::Info, LogComplexity::Simple, &["a", "b", "c"]);
        assert_eq!(e.simple_line(), "🤖 a, b, c");
    }

    #[test]
    fn test_simple_line_without_parts() {
        let e = entry(LogLevel::Success, LogComplexity::Simple, &[]);
        assert_eq!(e.simple_line(), "✅ ");
    }

    #[test]
    fn test_complex_line_has_call_site() {
        let e = entry(LogLevel::Warn, LogComplexity::Complex, &["disk low"]);
        assert_eq!(
            e.complex_line(),
            "⚠️ disk low - src/app.rs @ line 42, in function app::run"
        );
    }

    #[test]
    fn test_diagnostic_line_follows_complexity() {
        let simple = entry(LogLevel::Debug, LogComplexity::Simple, &["x"]);
        assert!(!simple.diagnostic_line().contains("src/app.rs"));

        let complex = entry(LogLevel::Debug, LogComplexity::Complex, &["x"]);
        assert!(complex.diagnostic_line().contains("@ line 42"));
    }

    #[test]
    fn test_fatal_diagnostic_line_always_complex() {
        let e = entry(LogLevel::Fatal, LogComplexity::Simple, &["boom"]);
        assert_eq!(e.diagnostic_line(), e.complex_line());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = entry(LogLevel::Info, LogComplexity::Simple, &["a"]);
        let b = entry(LogLevel::Info, LogComplexity::Simple, &["a"]);
        assert_ne!(a.id(), b.id());
    }
}
