//! Configuration management for glyphlog

use std::fmt::Write as _;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::logging::{LogComplexity, LogLevel};

/// Timezone used when rendering export timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    /// The host's local timezone
    Local,
    Utc,
    /// A fixed offset such as `+09:00`
    Fixed(FixedOffset),
}

impl TryFrom<String> for Zone {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        parse_zone(&value).ok_or_else(|| {
            format!(
                "invalid timezone '{}': expected \"local\", \"utc\" or an offset like \"+02:00\"",
                value
            )
        })
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        match zone {
            Zone::Local => "local".to_string(),
            Zone::Utc => "utc".to_string(),
            Zone::Fixed(offset) => offset.to_string(),
        }
    }
}

fn parse_zone(value: &str) -> Option<Zone> {
    let trimmed = value.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "local" => return Some(Zone::Local),
        "utc" | "z" | "gmt" => return Some(Zone::Utc),
        _ => {}
    }

    let (sign, rest) = match trimmed.as_bytes().first()? {
        b'+' => (1, &trimmed[1..]),
        b'-' => (-1, &trimmed[1..]),
        _ => return None,
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => (rest.get(..2)?, rest.get(2..)?),
        None => (rest, "0"),
    };
    let hours = parse_digits(hours)?;
    let minutes = parse_digits(minutes)?;
    if !(0..60).contains(&minutes) {
        return None;
    }
    let seconds = hours.checked_mul(3600)?.checked_add(minutes * 60)?;
    FixedOffset::east_opt(sign * seconds).map(Zone::Fixed)
}

/// Unsigned decimal field of an offset; no sign, no empty string
fn parse_digits(field: &str) -> Option<i32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Logger configuration, fixed once the store is built
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Application name shown in the report header
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Level used when a call does not override it
    #[serde(default = "default_level")]
    pub default_level: LogLevel,

    /// Complexity used when a call does not override it
    #[serde(default)]
    pub default_complexity: LogComplexity,

    /// Cosmetic glyph the host may prefix to its own output
    #[serde(default = "default_leading_glyph")]
    pub leading_glyph: String,

    /// Locale identifier of the host (timestamps use numeric fields only)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Timezone for export timestamps: "local", "utc" or "+HH:MM"
    #[serde(default = "default_timezone")]
    pub timezone: Zone,

    /// strftime format for export timestamps; also embedded in the file name
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Maximum number of retained entries
    #[serde(default = "default_history_length")]
    pub history_length: NonZeroUsize,

    /// Directory under which `logs/` is created for exports
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Exported reports older than this are removed by cleanup (default: 7)
    #[serde(default = "default_report_retention_days")]
    pub report_retention_days: u64,
}

fn default_app_name() -> String {
    "App".to_string()
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

fn default_leading_glyph() -> String {
    "▶".to_string()
}

fn default_locale() -> String {
    "en_US_POSIX".to_string()
}

fn default_timezone() -> Zone {
    Zone::Local
}

fn default_date_format() -> String {
    "%Y-%m-%d_%H-%M-%S%.3f".to_string()
}

fn default_history_length() -> NonZeroUsize {
    NonZeroUsize::new(1000).unwrap_or(NonZeroUsize::MIN)
}

fn default_base_dir() -> PathBuf {
    std::env::temp_dir()
}

fn default_report_retention_days() -> u64 {
    7
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            default_level: default_level(),
            default_complexity: LogComplexity::default(),
            leading_glyph: default_leading_glyph(),
            locale: default_locale(),
            timezone: default_timezone(),
            date_format: default_date_format(),
            history_length: default_history_length(),
            base_dir: default_base_dir(),
            report_retention_days: default_report_retention_days(),
        }
    }
}

impl LoggerConfig {
    /// Load configuration from the default path, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Check fields serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("Invalid date_format '{}'", self.date_format);
        }
        // The rendered timestamp becomes part of the report file name
        let sample = self.format_timestamp(Utc::now());
        if sample.contains(std::path::is_separator) || sample.contains('\\') {
            anyhow::bail!(
                "date_format '{}' renders a path separator ('{}')",
                self.date_format,
                sample
            );
        }
        Ok(())
    }

    /// Set the retained history length
    pub fn with_history_length(mut self, history_length: NonZeroUsize) -> Self {
        self.history_length = history_length;
        self
    }

    /// Set the export base directory
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Set the application name
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Directory where reports are written
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Render `at` in the configured timezone and date format
    ///
    /// Falls back to RFC 3339 if the format cannot be rendered.
    pub fn format_timestamp(&self, at: DateTime<Utc>) -> String {
        let mut out = String::new();
        let rendered = match self.timezone {
            Zone::Local => write!(out, "{}", at.with_timezone(&Local).format(&self.date_format)),
            Zone::Utc => write!(out, "{}", at.format(&self.date_format)),
            Zone::Fixed(offset) => {
                write!(out, "{}", at.with_timezone(&offset).format(&self.date_format))
            }
        };
        match rendered {
            Ok(()) => out,
            Err(_) => at.to_rfc3339(),
        }
    }
}

/// Get the base configuration directory (~/.glyphlog)
/// Falls back to ./.glyphlog if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".glyphlog")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".glyphlog"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.app_name, "App");
        assert_eq!(config.default_level, LogLevel::Info);
        assert_eq!(config.default_complexity, LogComplexity::Simple);
        assert_eq!(config.history_length.get(), 1000);
        assert_eq!(config.timezone, Zone::Local);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = LoggerConfig::default();
        config.timezone = Zone::Fixed(FixedOffset::east_opt(2 * 3600).unwrap());
        config.default_level = LogLevel::Working;

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: LoggerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.timezone, config.timezone);
        assert_eq!(parsed.default_level, LogLevel::Working);
        assert_eq!(parsed.history_length, config.history_length);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: LoggerConfig =
            toml::from_str("app_name = \"Demo\"\nhistory_length = 5\ndefault_complexity = \"complex\"")
                .unwrap();
        assert_eq!(parsed.app_name, "Demo");
        assert_eq!(parsed.history_length.get(), 5);
        assert_eq!(parsed.default_complexity, LogComplexity::Complex);
        assert_eq!(parsed.date_format, default_date_format());
    }

    #[test]
    fn test_zero_history_length_rejected() {
        assert!(toml::from_str::<LoggerConfig>("history_length = 0").is_err());
    }

    #[test]
    fn test_bad_timezone_rejected() {
        assert!(toml::from_str::<LoggerConfig>("timezone = \"Mars/Olympus\"").is_err());
        assert!(toml::from_str::<LoggerConfig>("timezone = \"+02:75\"").is_err());
        // Multi-byte characters and oversized hours are errors, not panics
        assert!(toml::from_str::<LoggerConfig>("timezone = \"+1é1\"").is_err());
        assert!(toml::from_str::<LoggerConfig>("timezone = \"+999999999\"").is_err());
        assert!(toml::from_str::<LoggerConfig>("timezone = \"+99999999999\"").is_err());
        assert!(toml::from_str::<LoggerConfig>("timezone = \"+-5:00\"").is_err());
        assert!(toml::from_str::<LoggerConfig>("timezone = \"+\"").is_err());
    }

    #[test]
    fn test_load_from_bad_timezone_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "timezone = \"+1é1\"\n").unwrap();
        assert!(LoggerConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_parse_zone() {
        assert_eq!(parse_zone("local"), Some(Zone::Local));
        assert_eq!(parse_zone("UTC"), Some(Zone::Utc));
        assert_eq!(
            parse_zone("+09:00"),
            Some(Zone::Fixed(FixedOffset::east_opt(9 * 3600).unwrap()))
        );
        assert_eq!(
            parse_zone("-0330"),
            Some(Zone::Fixed(FixedOffset::west_opt(3 * 3600 + 1800).unwrap()))
        );
        assert_eq!(parse_zone("nowhere"), None);
    }

    #[test]
    fn test_format_timestamp_fixed_offset() {
        let mut config = LoggerConfig::default();
        config.timezone = Zone::Fixed(FixedOffset::east_opt(3600).unwrap());
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(config.format_timestamp(at), "2026-03-04_06-06-07.000");
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let mut config = LoggerConfig::default();
        config.date_format = "%Y-%".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_path_separators() {
        let mut config = LoggerConfig::default();
        config.date_format = "%Y/%m/%d".to_string();
        assert!(config.validate().is_err());

        // %D expands to %m/%d/%y
        config.date_format = "%D".to_string();
        assert!(config.validate().is_err());

        config.date_format = "%Y\\%m".to_string();
        assert!(config.validate().is_err());

        config.date_format = default_date_format();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_rejects_separator_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "date_format = \"%Y/%m/%d\"\n").unwrap();
        assert!(LoggerConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = LoggerConfig::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.app_name, "App");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let config = LoggerConfig::default()
            .with_app_name("Roundtrip")
            .with_base_dir(temp_dir.path());

        config.save_to(&path).unwrap();
        let loaded = LoggerConfig::load_from(&path).unwrap();
        assert_eq!(loaded.app_name, "Roundtrip");
        assert_eq!(loaded.base_dir, temp_dir.path());
    }

    #[test]
    fn test_config_dir_does_not_panic() {
        let dir = config_dir();
        assert!(dir.ends_with(".glyphlog"));
    }
}
