//! Per-level statistics over the retained entries

use serde::Serialize;

use super::entry::LogEntry;
use super::level::LogLevel;

/// Counts and percentages per level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogStatistics {
    total: usize,
    counts: [usize; LogLevel::COUNT],
}

impl LogStatistics {
    /// Count the levels of the given entries
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            stats.counts[entry.level().index()] += 1;
            stats.total += 1;
        }
        stats
    }

    /// Total number of entries counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of entries at `level`
    pub fn count(&self, level: LogLevel) -> usize {
        self.counts[level.index()]
    }

    /// Share of entries at `level`, in percent
    ///
    /// An empty store divides by 1, so every percentage is 0.
    pub fn percentage(&self, level: LogLevel) -> f64 {
        self.count(level) as f64 * 100.0 / self.total.max(1) as f64
    }

    /// Percentage with two decimals, e.g. `33.33`
    pub fn format_percentage(&self, level: LogLevel) -> String {
        format!("{:.2}", self.percentage(level))
    }

    /// `(level, count, percentage)` in level order
    pub fn rows(&self) -> impl Iterator<Item = (LogLevel, usize, f64)> + '_ {
        LogLevel::ALL
            .into_iter()
            .map(move |level| (level, self.count(level), self.percentage(level)))
    }
}
