//! Logging configuration sourced from environment variables.
//!
//! - `RUST_LOG`: `EnvFilter` directives (default `info`).
//! - `ROSESTOCK_LOG_FORMAT`: `json` (default) or `pretty`.

use core::str::FromStr;

use thiserror::Error;

pub const FILTER_ENV: &str = "RUST_LOG";
pub const FORMAT_ENV: &str = "ROSESTOCK_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported log format: {0} (expected `json` or `pretty`)")]
    UnsupportedFormat(String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl LogConfig {
    /// Read from the process environment.
    ///
    /// Each variable falls back to its default independently; the returned
    /// errors describe what was ignored so the caller can report it once
    /// logging is up.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lenient variant of [`LogConfig::try_from_lookup`]: a bad format keeps the filter.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();
        let filter = read_filter(&lookup);
        let format = match read_format(&lookup) {
            Ok(format) => format,
            Err(e) => {
                errors.push(e);
                LogFormat::default()
            }
        };

        (Self { filter, format }, errors)
    }

    /// Build from an arbitrary variable lookup (tests pass a closure over a map).
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            filter: read_filter(&lookup),
            format: read_format(&lookup)?,
        })
    }
}

fn read_filter<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(FILTER_ENV)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| LogConfig::default().filter)
}

fn read_format<F>(lookup: &F) -> Result<LogFormat, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(FORMAT_ENV) {
        Some(raw) if !raw.trim().is_empty() => raw.parse(),
        _ => Ok(LogFormat::default()),
    }
}
