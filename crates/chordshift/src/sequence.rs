//! Transposition of an explicit list of chord tokens.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::explain::{ExplanationCollector, TokenOutcome};
use crate::grammar::ChordToken;
use crate::interval::{resolve_semitone_shift, Action};

/// Result of transposing a chord sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceTransposition {
    pub original_chords: Vec<String>,
    pub transposed_chords: Vec<String>,
    /// Enharmonic notes about the input spellings, deduplicated.
    pub explanations: Vec<String>,
    /// One entry per input token.
    #[serde(default)]
    pub outcomes: Vec<TokenOutcome>,
}

impl SequenceTransposition {
    /// Whether every token had a readable root.
    pub fn fully_parsed(&self) -> bool {
        self.outcomes.iter().all(|o| o.was_fully_parsed())
    }
}

/// Transpose each chord by the shift implied by `action` and `interval`.
///
/// ```
/// use chordshift::{transpose_sequence, Action};
///
/// let result = transpose_sequence(&["C", "G/B", "Dm7"], Action::Increase, 1.0);
/// assert_eq!(result.transposed_chords, ["D", "A/C#", "Em7"]);
/// ```
pub fn transpose_sequence<S: AsRef<str>>(
    chords: &[S],
    action: Action,
    interval: f64,
) -> SequenceTransposition {
    transpose_sequence_by(chords, resolve_semitone_shift(action, interval))
}

/// Transpose each chord by an explicit number of semitones.
///
/// Tokens without a leading note come back with a `?` appended; they never
/// abort the rest of the batch.
pub fn transpose_sequence_by<S: AsRef<str>>(chords: &[S], semitones: i32) -> SequenceTransposition {
    let mut notes = ExplanationCollector::new();
    let mut transposed = Vec::with_capacity(chords.len());
    let mut outcomes = Vec::with_capacity(chords.len());

    for chord in chords {
        let chord = chord.as_ref();
        match ChordToken::from_sequence(chord) {
            Some(token) => {
                transposed.push(token.transpose(semitones, Some(&mut notes)));
                outcomes.push(TokenOutcome::Transposed);
            }
            None => {
                debug!(token = %chord, "no root note, passing token through");
                transposed.push(format!("{}?", chord));
                outcomes.push(TokenOutcome::Unparsed);
            }
        }
    }

    SequenceTransposition {
        original_chords: chords.iter().map(|c| c.as_ref().to_string()).collect(),
        transposed_chords: transposed,
        explanations: notes.into_notes(),
        outcomes,
    }
}

/// Split a sequence typed as free text into tokens.
pub fn split_sequence(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
