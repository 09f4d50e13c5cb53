//! Diagnostic sink and fatal termination seams
//!
//! The store hands every rendered entry to a [`DiagnosticSink`] and, for
//! fatal entries, to a [`Terminator`] afterwards. The defaults forward to
//! `tracing` and exit the process.

use std::io::Write;

use super::level::LogLevel;

/// Prefix of every tracing target emitted from inside this crate
pub const INTERNAL_TARGET_PREFIX: &str = "glyphlog::";

/// Target used for sink output, ignored by the store's tracing layer
pub const SINK_TARGET: &str = "glyphlog::sink";

/// Whether `target` belongs to the crate's own diagnostics or sink output
///
/// Module-path targets of the library (`glyphlog::logging::store`,
/// `glyphlog::config`, ...) all share the prefix.
pub fn is_internal_target(target: &str) -> bool {
    target.starts_with(INTERNAL_TARGET_PREFIX)
}

/// Exit status used when a fatal entry terminates the process (EX_SOFTWARE)
pub const FATAL_EXIT_CODE: i32 = 70;

/// Receives each entry's pre-rendered line as it is logged
pub trait DiagnosticSink: Send + Sync {
    /// Emit `line` exactly as given
    fn emit(&self, level: LogLevel, line: &str);
}

/// Ends the process after a fatal entry
pub trait Terminator: Send + Sync {
    fn terminate(&self, message: &str) -> !;
}

/// Sink that forwards lines to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Fatal | LogLevel::Error => tracing::error!(target: SINK_TARGET, "{}", line),
            LogLevel::Warn => tracing::warn!(target: SINK_TARGET, "{}", line),
            LogLevel::Info | LogLevel::Success | LogLevel::Working => {
                tracing::info!(target: SINK_TARGET, "{}", line)
            }
            LogLevel::Debug => tracing::debug!(target: SINK_TARGET, "{}", line),
        }
    }
}

/// Terminator that writes the message to stderr and exits
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, message: &str) -> ! {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "fatal: {}", message);
        let _ = stderr.flush();
        std::process::exit(FATAL_EXIT_CODE)
    }
}
