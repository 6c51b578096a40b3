//! chordshift - transpose chord sequences and chord charts
//!
//! Subcommands:
//! - `chordshift seq <CHORDS>...` - Transpose a list of chords
//! - `chordshift chart [FILE]` - Transpose a chart read from a file or stdin
//! - `chordshift classify [FILE]` - Show which chart lines count as chord lines
//! - `chordshift config` - Print the effective configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use chordconf::{ChordConfig, OutputFormat};
use chordshift::Action;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "chordshift")]
#[command(about = "Transpose chord sequences and chord charts")]
#[command(version)]
struct Cli {
    /// Config file used in place of ./chordshift.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transpose a list of chords
    Seq {
        /// Chords, separately or as one quoted string (e.g. "Am F C G")
        #[arg(required = true)]
        chords: Vec<String>,

        /// increase or decrease (aliases: aumentar, diminuir, up, down)
        #[arg(short, long)]
        action: Option<Action>,

        /// Interval in whole tones (0.5 = one semitone)
        #[arg(short, long)]
        interval: Option<f64>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Do not print enharmonic notes
        #[arg(long)]
        no_explanations: bool,
    },

    /// Transpose a plain-text chart
    Chart {
        /// Chart file; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        #[arg(short, long)]
        action: Option<Action>,

        #[arg(short, long)]
        interval: Option<f64>,

        /// Fraction of chord-shaped words that makes a chord line
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Mark each chart line as chord (C) or text (-)
    Classify {
        file: Option<PathBuf>,

        #[arg(long)]
        threshold: Option<f64>,

        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration and where it came from
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, sources) = ChordConfig::load_with_sources_from(cli.config.as_deref())
        .context("Failed to load configuration")?;

    commands::init_tracing(&config.logging.log_level);
    tracing::debug!(files = ?sources.files, env = ?sources.env_overrides, "configuration loaded");

    match cli.command {
        Commands::Seq {
            chords,
            action,
            interval,
            json,
            no_explanations,
        } => {
            let request = commands::resolve_request(&config, action, interval)?;
            let format = if json { OutputFormat::Json } else { config.output.format };
            let explanations = config.output.explanations && !no_explanations;
            let output = commands::seq(&chords, request, format, explanations)?;
            commands::emit(&output)?;
        }
        Commands::Chart {
            file,
            action,
            interval,
            threshold,
        } => {
            let request = commands::resolve_request(&config, action, interval)?;
            let options = commands::chart_options(&config, threshold)?;
            let text = commands::read_input(file.as_deref())?;
            let output = chordshift::transpose_chart_with(&text, request.semitones(), &options);
            commands::emit(&output)?;
        }
        Commands::Classify {
            file,
            threshold,
            json,
        } => {
            let options = commands::chart_options(&config, threshold)?;
            let text = commands::read_input(file.as_deref())?;
            let format = if json { OutputFormat::Json } else { config.output.format };
            let output = commands::classify(&text, &options, format)?;
            commands::emit(&output)?;
        }
        Commands::Config => {
            commands::emit(&commands::render_config(&config, &sources))?;
        }
    }

    Ok(())
}
