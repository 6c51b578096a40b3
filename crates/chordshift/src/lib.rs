//! Chord chart and chord sequence transposition.
//!
//! This crate shifts chord symbols by a number of semitones while keeping
//! chord qualities, slash-bass notes and all surrounding text intact. It
//! works on two kinds of input: an explicit list of chord tokens, or a whole
//! chart where chord lines are interleaved with lyrics.
//!
//! # Example
//!
//! ```
//! use chordshift::{transpose_chart, transpose_sequence, Action};
//!
//! // Interval is in whole tones: 1.0 means two semitones.
//! let result = transpose_sequence(&["E#", "Bb/D"], Action::Increase, 1.0);
//! assert_eq!(result.transposed_chords, ["G", "C/E"]);
//! assert_eq!(result.explanations.len(), 1);
//!
//! let chart = "Am       F\nAmazing grace, how sweet";
//! assert_eq!(
//!     transpose_chart(chart, Action::Decrease, 0.5),
//!     "G#m       E\nAmazing grace, how sweet"
//! );
//! ```
//!
//! Output notes are always spelled with sharps. Nothing here fails: a token
//! that does not start with a note is echoed back with a `?` marker.

pub mod chart;
pub mod explain;
pub mod grammar;
pub mod interval;
pub mod note;
pub mod sequence;

pub use chart::{
    classify_chart, is_chord_line, is_chord_line_with, transpose_chart, transpose_chart_with,
    ChartOptions, LineClass, CHORD_LINE_THRESHOLD,
};
pub use explain::{ExplanationCollector, TokenOutcome};
pub use grammar::ChordToken;
pub use interval::{resolve_semitone_shift, Action, ActionParseError, RequestError, TransposeRequest};
pub use note::{
    normalize_spelling, resolve_pitch_class, theoretical_explanation, transpose_note, PitchClass,
};
pub use sequence::{split_sequence, transpose_sequence, transpose_sequence_by, SequenceTransposition};
