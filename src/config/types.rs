use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub async_state: AsyncStateConfig,
}

/// Tracing output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Install a subscriber at all (default: true).
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    /// Write logs to `{file}.{timestamp}.{pid}` instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Defaults applied to async containers built with `with_config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsyncStateConfig {
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

/// How results of overlapping triggers on one provider are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Every result is applied in the order it resolves.
    #[default]
    LastWriteWins,
    /// Only the most recently issued request may write its result.
    LatestOnly,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            filter: default_logging_filter(),
            file: None,
        }
    }
}
