use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use glyphlog::config::LoggerConfig;
use glyphlog::logging::{self, LogStore};
use glyphlog::{log_debug, log_info, log_success, log_warn, log_working};

fn usage() -> &'static str {
    "usage: glyphlog [--config <path>] [--json]"
}

fn main() -> Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context(usage())?;
                config_path = Some(PathBuf::from(path));
            }
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", usage());
                return Ok(());
            }
            other => anyhow::bail!("unknown argument '{}'\n{}", other, usage()),
        }
    }

    let config = match config_path {
        Some(path) => LoggerConfig::load_from(&path)?,
        None => LoggerConfig::load()?,
    };
    let retention_days = config.report_retention_days;
    let glyph = config.leading_glyph.clone();

    let store = Arc::new(LogStore::new(config));
    logging::init_tracing(Arc::clone(&store), "glyphlog=info")?;

    // Clean up old reports
    match logging::cleanup_old_reports(&store.logs_dir(), retention_days) {
        Ok(count) if count > 0 => tracing::info!("Cleaned up {} old reports", count),
        Ok(_) => {}
        Err(e) => tracing::warn!("Report cleanup failed: {:#}", e),
    }

    log_working!(store, "collecting sample entries");
    log_info!(store, "history length", store.history_length());
    log_warn!(store, "this is what a warning looks like");
    log_debug!(store, "pid", std::process::id());
    log_success!(store, "sample run complete");

    let stats = store.statistics();
    if json {
        let levels: serde_json::Map<String, serde_json::Value> = stats
            .rows()
            .map(|(level, count, percentage)| {
                (
                    level.as_str().to_string(),
                    serde_json::json!({ "count": count, "percentage": percentage }),
                )
            })
            .collect();
        let summary = serde_json::json!({ "total": stats.total(), "levels": levels });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    let path = store.export().context("Failed to export logs")?;
    println!("{} Exported logs to {}", glyph, path.display());
    Ok(())
}
