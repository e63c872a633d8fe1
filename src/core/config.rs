//! # Configuration
//!
//! Two inputs, both resolved before the terminal is touched:
//!
//! - **Mode** from the single CLI argument: a duration (`30s`, `5m`,
//!   `1h30m`) or the word `tomato`.
//! - **Log settings** from the environment: `TIMER_LOG` picks the level
//!   (default `off`), `TIMER_LOG_FILE` the destination.

use log::LevelFilter;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const TOMATO_ARG: &str = "tomato";

pub const USAGE: &str = "\
Usage: timer <duration> OR timer tomato
Examples:
  timer 30s    # 30 seconds
  timer 5m     # 5 minutes
  timer 1h30m  # 1 hour 30 minutes
  timer tomato # 25 min focus + 5 min break
";

// ============================================================================
// Mode
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Count down a single user-supplied duration.
    Simple(Duration),
    /// Focus then break, fixed lengths.
    Pomodoro,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDuration { input: String, reason: String },
    NonPositiveDuration { input: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDuration { input, reason } => {
                write!(f, "invalid duration {input:?}: {reason}")
            }
            ConfigError::NonPositiveDuration { input } => {
                write!(f, "duration must be positive, got {input:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse the CLI argument into a [`Mode`]. Used as clap's `value_parser`.
pub fn parse_mode(arg: &str) -> Result<Mode, ConfigError> {
    if arg == TOMATO_ARG {
        return Ok(Mode::Pomodoro);
    }
    parse_duration(arg).map(Mode::Simple)
}

/// Parse a human-readable, strictly positive duration.
pub fn parse_duration(input: &str) -> Result<Duration, ConfigError> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(ConfigError::NonPositiveDuration {
            input: input.to_string(),
        });
    }

    let duration = humantime::parse_duration(trimmed.trim_start_matches('+')).map_err(|e| {
        ConfigError::InvalidDuration {
            input: input.to_string(),
            reason: e.to_string(),
        }
    })?;

    if duration.is_zero() {
        return Err(ConfigError::NonPositiveDuration {
            input: input.to_string(),
        });
    }
    Ok(duration)
}

// ============================================================================
// Log Settings
// ============================================================================

pub const LOG_LEVEL_ENV: &str = "TIMER_LOG";
pub const LOG_FILE_ENV: &str = "TIMER_LOG_FILE";
const DEFAULT_LOG_FILE_NAME: &str = "timer.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub path: PathBuf,
}

impl LogSettings {
    pub fn enabled(&self) -> bool {
        self.level != LevelFilter::Off
    }
}

/// Read log settings from `TIMER_LOG` / `TIMER_LOG_FILE`.
pub fn log_settings_from_env() -> LogSettings {
    resolve_log_settings(
        std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
        std::env::var(LOG_FILE_ENV).ok().as_deref(),
    )
}

/// Collapse explicit values over defaults. Unknown levels mean `off`.
pub fn resolve_log_settings(level: Option<&str>, path: Option<&str>) -> LogSettings {
    let level = level
        .and_then(|l| LevelFilter::from_str(l.trim()).ok())
        .unwrap_or(LevelFilter::Off);

    let path = path
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_log_path);

    LogSettings { level, path }
}

/// `<cache dir>/timer/timer.log`, or `./timer.log` without a cache dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("timer").join(DEFAULT_LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_NAME))
}
