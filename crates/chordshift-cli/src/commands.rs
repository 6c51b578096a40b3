//! CLI command implementations

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use chordconf::{ChordConfig, ConfigSources, OutputFormat};
use chordshift::{
    classify_chart, split_sequence, transpose_sequence_by, Action, ChartOptions, LineClass,
    SequenceTransposition, TransposeRequest,
};

/// Install the stderr subscriber. A filter that fails to parse falls back to `warn`.
pub fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Command-line flags win over the configured defaults.
pub fn resolve_request(
    config: &ChordConfig,
    action: Option<Action>,
    interval: Option<f64>,
) -> Result<TransposeRequest> {
    let mut config = config.clone();
    if let Some(action) = action {
        config.transpose.action = action;
    }
    if let Some(interval) = interval {
        config.transpose.interval = interval;
    }
    config.request().context("Invalid transposition")
}

pub fn chart_options(config: &ChordConfig, threshold: Option<f64>) -> Result<ChartOptions> {
    let mut options = config.chart_options();
    if let Some(threshold) = threshold {
        if !(threshold > 0.0 && threshold <= 1.0) {
            bail!("--threshold must be in (0, 1], got {}", threshold);
        }
        options.chord_line_threshold = threshold;
    }
    Ok(options)
}

/// Read a whole file, or stdin for `None` and `-`.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Write to stdout exactly as given.
pub fn emit(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write output")
}

/// Transpose chords given as separate arguments or whitespace-separated strings.
pub fn seq(
    args: &[String],
    request: TransposeRequest,
    format: OutputFormat,
    explanations: bool,
) -> Result<String> {
    let chords: Vec<&str> = args.iter().flat_map(|a| split_sequence(a)).collect();
    let result = transpose_sequence_by(&chords, request.semitones());
    render_sequence(&result, format, explanations)
}

pub fn render_sequence(
    result: &SequenceTransposition,
    format: OutputFormat,
    explanations: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut output = result.transposed_chords.join(" ");
            output.push('\n');
            if explanations {
                for note in &result.explanations {
                    output.push_str(&format!("note: {}\n", note));
                }
            }
            Ok(output)
        }
    }
}

pub fn classify(text: &str, options: &ChartOptions, format: OutputFormat) -> Result<String> {
    let classes = classify_chart(text, options);
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&classes)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_classification(text, &classes)),
    }
}

fn render_classification(text: &str, classes: &[LineClass]) -> String {
    let mut output = String::new();
    for (line, class) in text.split('\n').zip(classes) {
        let marker = if class.is_chord_line { 'C' } else { '-' };
        output.push_str(&format!("{} {}\n", marker, line));
    }
    output
}

pub fn render_config(config: &ChordConfig, sources: &ConfigSources) -> String {
    let mut output = config.to_toml();

    output.push('\n');
    if sources.files.is_empty() {
        output.push_str("# loaded from: (defaults only)\n");
    }
    for path in &sources.files {
        output.push_str(&format!("# loaded from: {}\n", path.display()));
    }
    for var in &sources.env_overrides {
        output.push_str(&format!("# overridden by: {}\n", var));
    }

    output
}
