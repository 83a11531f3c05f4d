//! Configuration types for rawc-rs.

use serde::Deserialize;
use std::str::FromStr;

use crate::error::{RawcError, Result};
use crate::primitives::Primitive;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Dispatch configuration.
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dispatch configuration.
#[derive(Debug, Deserialize)]
pub struct DispatchConfig {
    /// Operation used when none is given on the command line.
    #[serde(default = "default_op")]
    pub default_op: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_op: default_op(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output format (json, pretty).
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Maximum log level (trace, debug, info, warn, error).
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-line JSON.
    Json,
    /// Indented JSON.
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = RawcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(RawcError::config(format!("Invalid output format: {}", other))),
        }
    }
}

fn default_op() -> String {
    "add".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RawcError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured default operation.
    pub fn default_primitive(&self) -> Result<Primitive> {
        self.dispatch.default_op.parse()
    }

    /// The configured output format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.format.parse()
    }

    /// The configured log level.
    pub fn log_level(&self) -> Result<tracing::Level> {
        self.logging
            .level
            .parse()
            .map_err(|_| RawcError::config(format!("Invalid log level: {}", self.logging.level)))
    }

    fn validate(&self) -> Result<()> {
        self.default_primitive()
            .map_err(|e| RawcError::config(format!("dispatch.default_op: {}", e)))?;
        self.log_level()?;
        self.output_format()?;
        Ok(())
    }
}
