//! Logging via the tracing crate.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Output format for log.
    #[serde(default)]
    format: LoggingFormat,
    /// Emit ANSI color codes in text output.
    #[serde(default)]
    color: bool,
}

impl LoggingConfig {
    /// Creates a new instance of LoggingConfig.
    pub fn new(format: LoggingFormat, color: bool) -> Self {
        LoggingConfig { format, color }
    }

    /// Returns the configured output format.
    pub fn format(&self) -> LoggingFormat {
        self.format
    }
}

/// Logging output format.
///
/// Defaults to "text".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingFormat {
    /// Text format.
    #[default]
    Text,
    /// JSON format.
    Json,
}

/// Initializes the logging system with the default parameters.
///
/// See `init_with_config` for details.
pub fn init() -> anyhow::Result<()> {
    init_with_config(&Default::default())
}

/// Initializes the logging system.
///
/// The installed subscriber is global, so only the first call in a process succeeds; test code
/// should ignore the returned error. Output goes through the test writer so it is captured per
/// test, and filtering follows `RUST_LOG`.
pub fn init_with_config(config: &LoggingConfig) -> anyhow::Result<()> {
    match config.format {
        LoggingFormat::Text => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(EnvFilter::from_default_env())
                .with_ansi(config.color)
                .finish(),
        )?,
        LoggingFormat::Json => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(EnvFilter::from_default_env())
                .json()
                .with_current_span(false)
                .finish(),
        )?,
    }

    Ok(())
}
