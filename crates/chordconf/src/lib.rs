//! Layered configuration for chordshift.
//!
//! # Usage
//!
//! ```rust,no_run
//! use chordconf::ChordConfig;
//!
//! let config = ChordConfig::load().expect("Failed to load config");
//! println!("Default interval: {}", config.transpose.interval);
//! ```
//!
//! # Config File Locations
//!
//! Files are loaded in order (later wins):
//! 1. `/etc/chordshift/config.toml` (system)
//! 2. `~/.config/chordshift/config.toml` (user)
//! 3. `./chordshift.toml` (local override, or the `--config` path)
//! 4. Environment variables (`CHORDSHIFT_*`, `RUST_LOG`)
//!
//! # Example Config
//!
//! ```toml
//! [transpose]
//! action = "increase"
//! interval = 1.0
//!
//! [chart]
//! chord_line_threshold = 0.5
//!
//! [output]
//! format = "text"
//! explanations = true
//!
//! [logging]
//! log_level = "warn"
//! ```

pub mod loader;
pub mod sections;

pub use loader::{discover_config_files_with_override, ConfigSources};
pub use sections::{ChartConfig, LoggingConfig, OutputConfig, OutputFormat, TransposeConfig};

use chordshift::{ChartOptions, TransposeRequest};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Complete chordshift configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChordConfig {
    #[serde(default)]
    pub transpose: TransposeConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ChordConfig {
    /// Load configuration from all sources.
    ///
    /// Load order (later wins):
    /// 1. Compiled defaults
    /// 2. `/etc/chordshift/config.toml`
    /// 3. `~/.config/chordshift/config.toml`
    /// 4. `./chordshift.toml`
    /// 5. Environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(None)?;
        Ok(config)
    }

    /// Load configuration with `config_path` standing in for `./chordshift.toml`.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(config_path)?;
        Ok(config)
    }

    /// Load configuration and return information about sources.
    pub fn load_with_sources() -> Result<(Self, ConfigSources), ConfigError> {
        Self::load_with_sources_from(None)
    }

    /// Load configuration from optional path and return information about sources.
    ///
    /// The merged result is validated before it is returned.
    pub fn load_with_sources_from(
        config_path: Option<&Path>,
    ) -> Result<(Self, ConfigSources), ConfigError> {
        let mut sources = ConfigSources::default();
        let mut config = ChordConfig::default();

        for path in loader::discover_config_files_with_override(config_path) {
            loader::load_from_file(&mut config, &path)?;
            sources.files.push(path);
        }

        loader::apply_env_overrides(&mut config, &mut sources)?;
        config.validate()?;

        Ok((config, sources))
    }

    /// Reject values no transposition could use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let interval = self.transpose.interval;
        if !interval.is_finite() || interval < 0.0 {
            return Err(ConfigError::Invalid {
                key: "transpose.interval".to_string(),
                message: format!("expected a non-negative number, got {}", interval),
            });
        }

        let threshold = self.chart.chord_line_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Invalid {
                key: "chart.chord_line_threshold".to_string(),
                message: format!("expected a value in (0, 1], got {}", threshold),
            });
        }

        Ok(())
    }

    /// The configured default request.
    pub fn request(&self) -> Result<TransposeRequest, ConfigError> {
        TransposeRequest::new(self.transpose.action, self.transpose.interval).map_err(|e| {
            ConfigError::Invalid {
                key: "transpose.interval".to_string(),
                message: e.to_string(),
            }
        })
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            chord_line_threshold: self.chart.chord_line_threshold,
        }
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> String {
        // Build TOML manually for nicer formatting
        let mut output = String::new();

        output.push_str("# chordshift configuration\n\n");

        output.push_str("[transpose]\n");
        output.push_str(&format!("action = \"{}\"\n", self.transpose.action));
        output.push_str(&format!("interval = {:?}\n", self.transpose.interval));

        output.push_str("\n[chart]\n");
        output.push_str(&format!(
            "chord_line_threshold = {:?}\n",
            self.chart.chord_line_threshold
        ));

        output.push_str("\n[output]\n");
        output.push_str(&format!("format = \"{}\"\n", self.output.format));
        output.push_str(&format!("explanations = {}\n", self.output.explanations));

        output.push_str("\n[logging]\n");
        output.push_str(&format!("log_level = \"{}\"\n", self.logging.log_level));

        output
    }
}
