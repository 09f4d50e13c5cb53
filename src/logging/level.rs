//! Log levels and rendering complexity
//!
//! Every per-level property (glyph, report labels) lives in one lookup table
//! indexed by the level's declaration position.

use serde::{Deserialize, Serialize};

/// Log level of an entry
///
/// Levels carry no severity ordering; only identity matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Success,
    Working,
    Debug,
}

/// Static properties of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelInfo {
    /// Glyph prefixed to every rendering of the entry
    pub glyph: &'static str,
    /// Label used in the report's per-level count line
    pub report_label: &'static str,
    /// Label used in the report's percentage summary line
    pub percent_label: &'static str,
    /// Lowercase name, matches the serde representation
    pub name: &'static str,
}

const LEVEL_TABLE: [LevelInfo; LogLevel::COUNT] = [
    LevelInfo {
        glyph: "🛑",
        report_label: "Fatal Error",
        percent_label: "Fatal",
        name: "fatal",
    },
    LevelInfo {
        glyph: "🥲",
        report_label: "Error",
        percent_label: "Error",
        name: "error",
    },
    LevelInfo {
        glyph: "⚠️",
        report_label: "Warn",
        percent_label: "Warn",
        name: "warn",
    },
    LevelInfo {
        glyph: "🤖",
        report_label: "Info",
        percent_label: "Info",
        name: "info",
    },
    LevelInfo {
        glyph: "✅",
        report_label: "Success",
        percent_label: "Success",
        name: "success",
    },
    LevelInfo {
        glyph: "⚙️",
        report_label: "Working",
        percent_label: "Working",
        name: "working",
    },
    LevelInfo {
        glyph: "🔵",
        report_label: "Debug",
        percent_label: "Debug",
        name: "debug",
    },
];

impl LogLevel {
    /// Number of levels
    pub const COUNT: usize = 7;

    /// All levels in declaration order (also the report order)
    pub const ALL: [LogLevel; LogLevel::COUNT] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Success,
        LogLevel::Working,
        LogLevel::Debug,
    ];

    /// Position of this level in declaration order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Table entry for this level
    pub fn info(self) -> &'static LevelInfo {
        &LEVEL_TABLE[self.index()]
    }

    /// Display glyph
    pub fn glyph(self) -> &'static str {
        self.info().glyph
    }

    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        self.info().name
    }

    /// Whether logging at this level terminates the process
    pub fn is_fatal(self) -> bool {
        self == LogLevel::Fatal
    }
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        }
    }
}

/// Which rendering of an entry is used for interactive display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogComplexity {
    /// Glyph and message parts only
    #[default]
    Simple,
    /// Simple rendering plus file, line and function
    Complex,
}
