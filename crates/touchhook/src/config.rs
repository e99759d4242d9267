//! Environment-driven settings for the hook process.

use std::env;

use touchhook_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig};

/// Environment variable selecting the log level.
pub const ENV_LOG_LEVEL: &str = "TOUCHHOOK_LOG_LEVEL";
/// Environment variable selecting the log format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "TOUCHHOOK_LOG_FORMAT";

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookSettings {
    /// Level passed to the tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Output format for log lines on stderr.
    pub log_format: LogFormat,
}

impl HookSettings {
    /// Resolve settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(ENV_LOG_LEVEL)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_format = lookup(ENV_LOG_FORMAT)
            .map_or_else(LogFormat::infer, |value| LogFormat::from_label(&value));
        Self {
            log_level,
            log_format,
        }
    }

    /// Logging configuration borrowed from these settings.
    #[must_use]
    pub fn logging_config(&self) -> LoggingConfig<'_> {
        LoggingConfig {
            level: &self.log_level,
            format: self.log_format,
        }
    }
}

impl Default for HookSettings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
