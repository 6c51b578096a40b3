//! Configuration sections.

use chordshift::{Action, CHORD_LINE_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default direction and size of a transposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransposeConfig {
    /// Default: increase
    #[serde(default = "TransposeConfig::default_action")]
    pub action: Action,

    /// Interval in whole tones; semitones = trunc(interval * 2).
    /// Default: 1.0
    #[serde(default = "TransposeConfig::default_interval")]
    pub interval: f64,
}

impl TransposeConfig {
    fn default_action() -> Action {
        Action::Increase
    }

    fn default_interval() -> f64 {
        1.0
    }
}

impl Default for TransposeConfig {
    fn default() -> Self {
        Self {
            action: Self::default_action(),
            interval: Self::default_interval(),
        }
    }
}

/// Chart line classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Fraction of chord-shaped words that makes a chord line.
    /// Default: 0.5
    #[serde(default = "ChartConfig::default_chord_line_threshold")]
    pub chord_line_threshold: f64,
}

impl ChartConfig {
    fn default_chord_line_threshold() -> f64 {
        CHORD_LINE_THRESHOLD
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chord_line_threshold: Self::default_chord_line_threshold(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print enharmonic notes after a sequence result.
    /// Default: true
    #[serde(default = "OutputConfig::default_explanations")]
    pub explanations: bool,
}

impl OutputConfig {
    fn default_explanations() -> bool {
        true
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            explanations: Self::default_explanations(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing-subscriber filter directive.
    /// Default: warn
    #[serde(default = "LoggingConfig::default_log_level")]
    pub log_level: String,
}

impl LoggingConfig {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
        }
    }
}
