//! TOML configuration for the norma text utilities.
//!
//! Every section is optional; a missing key takes its documented default and an
//! unknown key is a parse error.

mod logging;

use std::path::Path;
use std::time::Duration;

use norma_core::{HumanNumber, DEFAULT_DELIMITER, DEFAULT_WHITESPACE};
use norma_process::RunOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use logging::{init_tracing, LoggingConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormaConfig {
    pub text: TextConfig,
    pub process: ProcessConfig,
    pub logging: LoggingConfig,
}

/// Tokenizing defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Characters stripped by [`TextConfig::trim`].
    pub whitespace: String,
    /// Separator used by [`TextConfig::split`]. Must not be empty.
    pub delimiter: String,
    /// Keep empty tokens between adjacent delimiters.
    pub keep_empty: bool,
}

impl TextConfig {
    pub fn trim<'a>(&self, s: &'a str) -> &'a str {
        norma_core::trim_with(s, &self.whitespace)
    }

    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        norma_core::split(line, &self.delimiter, self.keep_empty)
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            whitespace: DEFAULT_WHITESPACE.to_owned(),
            delimiter: DEFAULT_DELIMITER.to_owned(),
            keep_empty: false,
        }
    }
}

/// Limits applied to shell commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessConfig {
    /// Kill commands still running after this many milliseconds.
    pub timeout_ms: Option<u64>,
    /// Bytes of stdout/stderr kept per stream. Accepts `16777216` or `"16M"`.
    pub max_output_bytes: HumanNumber,
}

impl ProcessConfig {
    pub fn run_options(&self) -> RunOptions {
        let defaults = RunOptions::default();
        let max_bytes = self
            .max_output_bytes
            .as_u64()
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .unwrap_or(defaults.max_bytes);

        RunOptions {
            timeout: self.timeout_ms.map(Duration::from_millis),
            max_bytes,
            ..defaults
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            max_output_bytes: HumanNumber(RunOptions::default().max_bytes as f64),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
    #[error("invalid value for `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // `Display` quotes the offending source line; keep just the message.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl NormaConfig {
    /// Parse and validate a TOML document.
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        let config: NormaConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::load_from_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Check the values `serde` cannot: non-empty separators and a usable
    /// output limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.delimiter.is_empty() {
            return Err(ConfigError::Invalid {
                field: "text.delimiter",
                message: "must not be empty".to_owned(),
            });
        }
        if self.text.whitespace.is_empty() {
            return Err(ConfigError::Invalid {
                field: "text.whitespace",
                message: "must contain at least one character".to_owned(),
            });
        }
        if self.process.max_output_bytes.as_u64().is_none() {
            return Err(ConfigError::Invalid {
                field: "process.max_output_bytes",
                message: format!(
                    "expected a non-negative whole number of bytes, got {}",
                    self.process.max_output_bytes
                ),
            });
        }
        Ok(())
    }
}
