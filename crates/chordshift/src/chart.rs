//! Whole-chart transposition: classify lines, rewrite chords on chord lines.
//!
//! Lyrics and anything else that does not look like a line of chords is
//! copied through byte-for-byte. Chart mode produces no explanation notes.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::grammar::{is_chord_shape, scan_line, Segment};
use crate::interval::{resolve_semitone_shift, Action};

/// Fraction of chord-shaped words at which a line counts as a chord line.
///
/// Pinned at 0.5 since the second revision of the classifier; the first
/// used 0.75.
pub const CHORD_LINE_THRESHOLD: f64 = 0.5;

/// Knobs for chart transposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub chord_line_threshold: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            chord_line_threshold: CHORD_LINE_THRESHOLD,
        }
    }
}

/// How one line of a chart was classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineClass {
    /// 1-based line number.
    pub line: usize,
    pub words: usize,
    pub chord_words: usize,
    pub is_chord_line: bool,
}

/// Count (chord-shaped words, words) after stripping bar markers.
fn word_census(line: &str) -> (usize, usize) {
    let cleaned = line.trim().replace("/:", "").replace('|', "");
    let mut words = 0;
    let mut chord_words = 0;
    for word in cleaned.split_whitespace() {
        words += 1;
        if is_chord_shape(word) {
            chord_words += 1;
        }
    }
    (chord_words, words)
}

fn meets_threshold(chord_words: usize, words: usize, threshold: f64) -> bool {
    words > 0 && (chord_words as f64 / words as f64) >= threshold
}

/// Whether a line is mostly chords, using [`CHORD_LINE_THRESHOLD`].
pub fn is_chord_line(line: &str) -> bool {
    is_chord_line_with(line, CHORD_LINE_THRESHOLD)
}

/// Whether at least `threshold` of the line's words are chord-shaped.
///
/// Repeat markers (`/:`) and bar separators (`|`) are removed before the
/// line is split on whitespace. Blank lines are never chord lines.
pub fn is_chord_line_with(line: &str, threshold: f64) -> bool {
    let (chord_words, words) = word_census(line);
    meets_threshold(chord_words, words, threshold)
}

/// Classify every line of a chart.
pub fn classify_chart(text: &str, options: &ChartOptions) -> Vec<LineClass> {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| {
            let (chord_words, words) = word_census(line);
            LineClass {
                line: idx + 1,
                words,
                chord_words,
                is_chord_line: meets_threshold(chord_words, words, options.chord_line_threshold),
            }
        })
        .collect()
}

/// Transpose every chord line in `text`.
///
/// ```
/// use chordshift::{transpose_chart, Action};
///
/// let out = transpose_chart("C G\nHello world", Action::Increase, 1.0);
/// assert_eq!(out, "D A\nHello world");
/// ```
pub fn transpose_chart(text: &str, action: Action, interval: f64) -> String {
    transpose_chart_with(
        text,
        resolve_semitone_shift(action, interval),
        &ChartOptions::default(),
    )
}

/// Transpose every chord line in `text` by an explicit semitone count.
pub fn transpose_chart_with(text: &str, semitones: i32, options: &ChartOptions) -> String {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| {
            if is_chord_line_with(line, options.chord_line_threshold) {
                trace!(line = idx + 1, "rewriting chord line");
                transpose_line(line, semitones)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrite the chords of a single line, keeping every other byte.
pub fn transpose_line(line: &str, semitones: i32) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    for segment in scan_line(line) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Chord { boundary, token } => {
                out.push_str(boundary);
                out.push_str(&token.transpose(semitones, None));
            }
        }
    }
    out
}
