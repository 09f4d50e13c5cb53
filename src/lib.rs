//! glyphlog - bounded in-process log store
//!
//! Leveled entries with call-site metadata go into a capacity-bounded store
//! that evicts oldest-first, reports per-level statistics, and exports its
//! history to a timestamped report file. Fatal entries terminate the process
//! once they are stored and emitted.

pub mod config;
pub mod error;
pub mod logging;
mod macros;

pub use config::{LoggerConfig, Zone};
pub use error::ExportError;
pub use logging::{
    CallSite, DiagnosticSink, LogComplexity, LogEntry, LogLevel, LogOptions, LogStatistics,
    LogStore, Terminator,
};
