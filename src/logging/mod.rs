//! Logging system for glyphlog
//!
//! Provides the bounded log store, its statistics and report export, the
//! diagnostic sink seam, and tracing integration.

mod entry;
mod layer;
mod level;
mod report;
mod retention;
mod sink;
mod stats;
mod store;

pub use entry::{CallSite, LogEntry};
pub use layer::{init_tracing, StoreLayer};
pub use level::{LevelInfo, LogComplexity, LogLevel};
pub use report::{
    is_report_file_name, render_report, report_file_path, END_DELIMITER, START_DELIMITER,
};
pub use retention::cleanup_old_reports;
pub use sink::{
    is_internal_target, DiagnosticSink, ProcessExit, Terminator, TracingSink, FATAL_EXIT_CODE,
    INTERNAL_TARGET_PREFIX, SINK_TARGET,
};
pub use stats::LogStatistics;
pub use store::{LogOptions, LogStore};
