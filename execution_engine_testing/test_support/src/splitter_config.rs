use std::{
    fs, io,
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use casper_types::U512;

use crate::logging::LoggingConfig;

/// The name of the splitter config file on disk.
pub const CONFIG_NAME: &str = "splitter.toml";

/// Default nesting limit for re-entrant calls made by receiving accounts.
pub const DEFAULT_MAX_CALL_DEPTH: u32 = 10;

/// Default initial main purse balance of accounts registered through the test builder.
pub static DEFAULT_ACCOUNT_BALANCE: Lazy<U512> = Lazy::new(|| U512::from(1_000_000_000_000u64));

/// Path to the local splitter config.
pub static LOCAL_PATH: Lazy<PathBuf> = Lazy::new(|| {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources/local/")
        .join(CONFIG_NAME)
});

/// Errors raised while loading a [`SplitterConfig`].
#[derive(Debug, Error)]
pub enum Error {
    /// The config file could not be read.
    #[error("failed to load splitter config from {}: {error}", path.display())]
    FailedToLoadConfig {
        /// Path that failed to be read.
        path: PathBuf,
        /// The underlying OS error.
        error: io::Error,
    },
    /// The config file is not valid TOML for a [`SplitterConfig`].
    #[error("failed to parse splitter config: {0}")]
    FailedToParseConfig(#[from] toml::de::Error),
    /// The config parsed but holds unusable values.
    #[error("invalid splitter config")]
    Validation,
}

/// Parameters of the in-memory host.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Maximum height of nested call frames opened by receiving accounts.
    pub(crate) max_call_depth: u32,
    /// Initial main purse balance of accounts registered through the test builder.
    pub(crate) default_account_balance: U512,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            default_account_balance: *DEFAULT_ACCOUNT_BALANCE,
        }
    }
}

/// This struct can be parsed from a TOML-encoded splitter config file.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct SplitterConfig {
    #[serde(rename = "core")]
    pub(crate) core_config: CoreConfig,
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl SplitterConfig {
    /// Creates a config with the given core parameters and default logging.
    pub fn new(max_call_depth: u32, default_account_balance: U512) -> Self {
        SplitterConfig {
            core_config: CoreConfig {
                max_call_depth,
                default_account_balance,
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Parses and validates a TOML-encoded config.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let text = String::from_utf8_lossy(bytes);
        let config: SplitterConfig = toml::from_str(&text)?;

        if !config.is_valid() {
            return Err(Error::Validation);
        }

        Ok(config)
    }

    /// Reads, parses and validates the config file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|error| Error::FailedToLoadConfig {
            path: path.to_path_buf(),
            error,
        })?;
        SplitterConfig::from_bytes(&bytes)
    }

    /// Loads the config shipped in `resources/local/`.
    pub fn from_local_path() -> Result<Self, Error> {
        Self::from_path(&*LOCAL_PATH)
    }

    /// Maximum height of nested call frames.
    pub fn max_call_depth(&self) -> u32 {
        self.core_config.max_call_depth
    }

    /// Initial main purse balance of registered accounts.
    pub fn default_account_balance(&self) -> U512 {
        self.core_config.default_account_balance
    }

    /// Logging section.
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    fn is_valid(&self) -> bool {
        if self.core_config.max_call_depth == 0 {
            error!("max call depth must allow at least the top level frame");
            return false;
        }

        true
    }
}
