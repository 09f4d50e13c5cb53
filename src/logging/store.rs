//! In-memory log store
//!
//! A thread-safe, capacity-bounded ring of log entries. Appends evict the
//! oldest entry once the configured history length is exceeded.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::config::LoggerConfig;
use crate::error::ExportError;

use super::entry::{CallSite, LogEntry};
use super::level::{LogComplexity, LogLevel};
use super::report::{render_report, write_report};
use super::sink::{DiagnosticSink, ProcessExit, Terminator, TracingSink};
use super::stats::LogStatistics;

/// Per-call overrides of the configured defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    pub level: Option<LogLevel>,
    pub complexity: Option<LogComplexity>,
}

impl LogOptions {
    /// Override only the level
    pub fn level(level: LogLevel) -> Self {
        Self {
            level: Some(level),
            complexity: None,
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_complexity(mut self, complexity: LogComplexity) -> Self {
        self.complexity = Some(complexity);
        self
    }
}

/// Bounded, ordered store of log entries
pub struct LogStore {
    config: LoggerConfig,
    /// Retained entries, oldest first
    entries: RwLock<VecDeque<LogEntry>>,
    sink: Arc<dyn DiagnosticSink>,
    terminator: Arc<dyn Terminator>,
}

impl LogStore {
    /// Create a store that emits through `tracing` and exits on fatal entries
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_parts(config, Arc::new(TracingSink), Arc::new(ProcessExit))
    }

    /// Create a store with a custom sink and terminator
    pub fn with_parts(
        config: LoggerConfig,
        sink: Arc<dyn DiagnosticSink>,
        terminator: Arc<dyn Terminator>,
    ) -> Self {
        let capacity = config.history_length.get().min(4096);
        Self {
            config,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            sink,
            terminator,
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Maximum number of retained entries
    pub fn history_length(&self) -> NonZeroUsize {
        self.config.history_length
    }

    /// Directory exports are written to
    pub fn logs_dir(&self) -> PathBuf {
        self.config.logs_dir()
    }

    // Entries are only ever pushed or popped whole, so a poisoned lock still
    // guards a consistent deque.
    fn read(&self) -> RwLockReadGuard<'_, VecDeque<LogEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<LogEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Build an entry from `messages` and append it
    ///
    /// Level and complexity fall back to the configured defaults.
    pub fn log(&self, messages: Vec<String>, options: LogOptions, call_site: CallSite) {
        let entry = LogEntry::new(
            messages,
            options.level.unwrap_or(self.config.default_level),
            options
                .complexity
                .unwrap_or(self.config.default_complexity),
            call_site,
        );
        self.append(entry);
    }

    /// Append an entry, evict the oldest if over capacity, then emit it
    ///
    /// A fatal entry terminates the process once it is stored and emitted.
    pub fn append(&self, entry: LogEntry) {
        let level = entry.level();
        let line = entry.diagnostic_line();

        {
            let mut entries = self.write();
            entries.push_back(entry);
            if entries.len() > self.config.history_length.get() {
                entries.pop_front();
            }
        }

        self.sink.emit(level, &line);

        if level.is_fatal() {
            self.terminator.terminate(&line);
        }
    }

    /// Snapshot of the retained entries in insertion order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.read().iter().cloned().collect()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-level counts over the retained entries
    pub fn statistics(&self) -> LogStatistics {
        LogStatistics::from_entries(self.read().iter())
    }

    /// Write a report of the current history to `<base_dir>/logs`
    pub fn export(&self) -> Result<PathBuf, ExportError> {
        self.export_at(Utc::now())
    }

    /// Export using `now` as the report timestamp
    pub fn export_at(&self, now: DateTime<Utc>) -> Result<PathBuf, ExportError> {
        let timestamp = self.config.format_timestamp(now);

        let (entries, stats) = {
            let guard = self.read();
            let entries: Vec<LogEntry> = guard.iter().cloned().collect();
            let stats = LogStatistics::from_entries(&entries);
            (entries, stats)
        };

        let report = render_report(&self.config.app_name, &timestamp, &stats, &entries);
        let path = write_report(&self.config.logs_dir(), &timestamp, &report)?;

        tracing::debug!(
            "Exported {} log entries to {}",
            stats.total(),
            path.display()
        );
        Ok(path)
    }
}

impl std::fmt::Debug for LogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStore")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
