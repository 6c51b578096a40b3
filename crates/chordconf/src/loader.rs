//! Config file discovery, loading, and environment variable overlay.

use crate::{ChordConfig, ConfigError};
use std::env;
use std::path::{Path, PathBuf};

/// Information about where config values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config files that were loaded (in order)
    pub files: Vec<PathBuf>,
    /// Environment variables that overrode config values
    pub env_overrides: Vec<String>,
}

/// Discover config files in standard locations.
///
/// Returns paths in load order (system, user, local).
/// Only returns files that exist.
pub fn discover_config_files() -> Vec<PathBuf> {
    discover_config_files_with_override(None)
}

/// Discover config files, optionally with a CLI override path.
///
/// If `cli_path` is provided, it replaces the local override. A CLI path
/// that does not exist is still returned so loading reports it.
pub fn discover_config_files_with_override(cli_path: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let system = PathBuf::from("/etc/chordshift/config.toml");
    if system.exists() {
        files.push(system);
    }

    // User config (XDG_CONFIG_HOME or ~/.config)
    if let Some(config_dir) = directories::BaseDirs::new().map(|d| d.config_dir().to_path_buf()) {
        let user = config_dir.join("chordshift/config.toml");
        if user.exists() {
            files.push(user);
        }
    }

    if let Some(path) = cli_path {
        files.push(path.to_path_buf());
        return files;
    }

    let local = PathBuf::from("chordshift.toml");
    if local.exists() {
        files.push(local);
    }

    files
}

/// Read a TOML file and apply its keys on top of `config`.
pub fn load_from_file(config: &mut ChordConfig, path: &Path) -> Result<(), ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    apply_toml(config, &contents, path)
}

/// Apply the keys present in a TOML document; absent keys keep their value.
pub fn apply_toml(config: &mut ChordConfig, contents: &str, path: &Path) -> Result<(), ConfigError> {
    let table: toml::Table = contents.parse().map_err(|e: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let parse_err = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    if let Some(transpose) = section(&table, "transpose").map_err(&parse_err)? {
        if let Some(v) = string_key(transpose, "transpose.action", "action").map_err(&parse_err)? {
            config.transpose.action = v.parse().map_err(|e| parse_err(format!("transpose.action: {}", e)))?;
        }
        if let Some(v) = number_key(transpose, "transpose.interval", "interval").map_err(&parse_err)? {
            config.transpose.interval = v;
        }
    }

    if let Some(chart) = section(&table, "chart").map_err(&parse_err)? {
        if let Some(v) = number_key(chart, "chart.chord_line_threshold", "chord_line_threshold")
            .map_err(&parse_err)?
        {
            config.chart.chord_line_threshold = v;
        }
    }

    if let Some(output) = section(&table, "output").map_err(&parse_err)? {
        if let Some(v) = string_key(output, "output.format", "format").map_err(&parse_err)? {
            config.output.format = v.parse().map_err(|e| parse_err(format!("output.format: {}", e)))?;
        }
        if let Some(v) = output.get("explanations") {
            config.output.explanations = v
                .as_bool()
                .ok_or_else(|| parse_err(type_mismatch("output.explanations", "a boolean", v)))?;
        }
    }

    if let Some(logging) = section(&table, "logging").map_err(&parse_err)? {
        if let Some(v) = string_key(logging, "logging.log_level", "log_level").map_err(&parse_err)? {
            config.logging.log_level = v.to_string();
        }
    }

    Ok(())
}

fn type_mismatch(key: &str, expected: &str, found: &toml::Value) -> String {
    format!("{}: expected {}, found {}", key, expected, found.type_str())
}

fn section<'t>(table: &'t toml::Table, name: &str) -> Result<Option<&'t toml::Table>, String> {
    match table.get(name) {
        None => Ok(None),
        Some(toml::Value::Table(t)) => Ok(Some(t)),
        Some(other) => Err(type_mismatch(name, "a table", other)),
    }
}

fn string_key<'t>(table: &'t toml::Table, key: &str, name: &str) -> Result<Option<&'t str>, String> {
    match table.get(name) {
        None => Ok(None),
        Some(toml::Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(type_mismatch(key, "a string", other)),
    }
}

/// TOML integers are accepted where a float is expected (`interval = 2`).
fn number_key(table: &toml::Table, key: &str, name: &str) -> Result<Option<f64>, String> {
    match table.get(name) {
        None => Ok(None),
        Some(toml::Value::Float(f)) => Ok(Some(*f)),
        Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
        Some(other) => Err(type_mismatch(key, "a number", other)),
    }
}

/// Apply environment variable overrides to config.
pub fn apply_env_overrides(
    config: &mut ChordConfig,
    sources: &mut ConfigSources,
) -> Result<(), ConfigError> {
    apply_env_overrides_from(config, sources, env::vars())
}

/// Apply overrides from an explicit set of variables.
pub fn apply_env_overrides_from(
    config: &mut ChordConfig,
    sources: &mut ConfigSources,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<(), ConfigError> {
    let invalid = |key: &str, message: String| ConfigError::Invalid {
        key: key.to_string(),
        message,
    };

    let mut rust_log = None;
    for (key, value) in vars {
        match key.as_str() {
            "CHORDSHIFT_ACTION" => {
                config.transpose.action = value.parse().map_err(|e| invalid(&key, format!("{}", e)))?;
            }
            "CHORDSHIFT_INTERVAL" => {
                config.transpose.interval = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(&key, format!("not a number: {}", value)))?;
            }
            "CHORDSHIFT_CHORD_LINE_THRESHOLD" => {
                config.chart.chord_line_threshold = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(&key, format!("not a number: {}", value)))?;
            }
            "CHORDSHIFT_OUTPUT_FORMAT" => {
                config.output.format = value.parse().map_err(|e| invalid(&key, e))?;
            }
            "CHORDSHIFT_LOG_LEVEL" => {
                config.logging.log_level = value;
            }
            // RUST_LOG wins over CHORDSHIFT_LOG_LEVEL regardless of order
            "RUST_LOG" => {
                rust_log = Some(value);
                continue;
            }
            _ => continue,
        }
        sources.env_overrides.push(key);
    }

    if let Some(value) = rust_log {
        config.logging.log_level = value;
        sources.env_overrides.push("RUST_LOG".to_string());
    }

    Ok(())
}
