//! Report composition and report files
//!
//! A report is a header, a statistics block and every retained entry in its
//! complex rendering, written to a file named after the export timestamp.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

use super::entry::LogEntry;
use super::level::LogLevel;
use super::stats::LogStatistics;

/// Prefix of every report file name
pub const REPORT_FILE_PREFIX: &str = "log[";
/// Suffix of every report file name
pub const REPORT_FILE_SUFFIX: &str = "]";

pub const START_DELIMITER: &str = "=== START LOGS ===";
pub const END_DELIMITER: &str = "=== END LOGS ===";

/// Build the full report text
pub fn render_report(
    app_name: &str,
    timestamp: &str,
    stats: &LogStatistics,
    entries: &[LogEntry],
) -> String {
    let mut lines = Vec::with_capacity(entries.len() + LogLevel::COUNT + 5);

    lines.push(format!("{} logs for {}", app_name, timestamp));
    lines.push(format!("--- ✨ Total Logs: {} ---", stats.total()));
    for level in LogLevel::ALL {
        let info = level.info();
        lines.push(format!(
            "--- {} Total {} Logs: {} ---",
            info.glyph,
            info.report_label,
            stats.count(level)
        ));
    }

    let percentages: Vec<String> = LogLevel::ALL
        .into_iter()
        .map(|level| {
            format!(
                "{} % {}",
                level.info().percent_label,
                stats.format_percentage(level)
            )
        })
        .collect();
    lines.push(format!("--- {} ---", percentages.join(" - ")));

    lines.push(START_DELIMITER.to_string());
    lines.extend(entries.iter().map(LogEntry::complex_line));
    lines.push(END_DELIMITER.to_string());

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Report file path for an export at `timestamp`
pub fn report_file_path(logs_dir: &Path, timestamp: &str) -> PathBuf {
    logs_dir.join(format!("{}{}{}", REPORT_FILE_PREFIX, timestamp, REPORT_FILE_SUFFIX))
}

/// Whether a file name looks like an exported report
pub fn is_report_file_name(name: &str) -> bool {
    name.len() > REPORT_FILE_PREFIX.len() + REPORT_FILE_SUFFIX.len()
        && name.starts_with(REPORT_FILE_PREFIX)
        && name.ends_with(REPORT_FILE_SUFFIX)
}

/// Write `report` into `logs_dir`, creating the directory if needed
///
/// On a failed write the partial file is removed.
pub fn write_report(
    logs_dir: &Path,
    timestamp: &str,
    report: &str,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(logs_dir).map_err(|source| ExportError::CreateDir {
        path: logs_dir.to_path_buf(),
        source,
    })?;

    let path = report_file_path(logs_dir, timestamp);
    if let Err(source) = fs::write(&path, report) {
        let _ = fs::remove_file(&path);
        return Err(ExportError::Write { path, source });
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::entry::CallSite;
    use crate::logging::level::LogComplexity;
    use tempfile::TempDir;

    fn entry(level: LogLevel, msg: &str) -> LogEntry {
        LogEntry::new(
            vec![msg.to_string()],
            level,
            LogComplexity::Simple,
            CallSite::new("src/main.rs", 7, "main"),
        )
    }

    #[test]
    fn test_render_empty_report() {
        let stats = LogStatistics::default();
        let report = render_report("Demo", "2026-01-01_00-00-00.000", &stats, &[]);
        let expected = "\
Demo logs for 2026-01-01_00-00-00.000
--- ✨ Total Logs: 0 ---
--- 🛑 Total Fatal Error Logs: 0 ---
--- 🥲 Total Error Logs: 0 ---
--- ⚠️ Total Warn Logs: 0 ---
--- 🤖 Total Info Logs: 0 ---
--- ✅ Total Success Logs: 0 ---
--- ⚙️ Total Working Logs: 0 ---
--- 🔵 Total Debug Logs: 0 ---
--- Fatal % 0.00 - Error % 0.00 - Warn % 0.00 - Info % 0.00 - Success % 0.00 - Working % 0.00 - Debug % 0.00 ---
=== START LOGS ===
=== END LOGS ===
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_uses_complex_lines() {
        let entries = vec![entry(LogLevel::Info, "a"), entry(LogLevel::Warn, "b")];
        let stats = LogStatistics::from_entries(&entries);
        let report = render_report("Demo", "ts", &stats, &entries);

        assert!(report.contains("🤖 a - src/main.rs @ line 7, in function main\n"));
        assert!(report.contains("⚠️ b - src/main.rs @ line 7, in function main\n"));
        assert!(report.contains("--- Fatal % 0.00 - Error % 0.00 - Warn % 50.00 - Info % 50.00"));
    }

    #[test]
    fn test_report_file_path() {
        let path = report_file_path(Path::new("/tmp/app/logs"), "2026-01-21_14-30-45.000");
        assert_eq!(
            path,
            PathBuf::from("/tmp/app/logs/log[2026-01-21_14-30-45.000]")
        );
    }

    #[test]
    fn test_is_report_file_name() {
        assert!(is_report_file_name("log[2026-01-21_14-30-45.000]"));
        assert!(!is_report_file_name("log[]"));
        assert!(!is_report_file_name("app-2026-01-21.log"));
        assert!(!is_report_file_name("log[unterminated"));
    }

    #[test]
    fn test_write_report_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let logs_dir = temp_dir.path().join("a").join("b").join("logs");

        let path = write_report(&logs_dir, "ts", "body\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "body\n");

        // Second export into the existing directory must not fail
        let path = write_report(&logs_dir, "ts2", "again\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_report_fails_when_dir_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("logs");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_report(&blocker, "ts", "body").unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }));
    }
}
