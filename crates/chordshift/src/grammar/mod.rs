//! Chord token grammar.
//!
//! A chord is a root note, an opaque quality suffix and an optional
//! `/bass`. The quality is never interpreted; it is carried through
//! byte-for-byte so that reassembling a token reproduces its input.

mod root;
mod scan;
mod shape;

use std::fmt;

use crate::explain::ExplanationCollector;
use crate::note::{normalize_spelling, theoretical_explanation, transpose_note};

pub use root::{chart_chord, chart_root, sequence_root, split_sequence_root};
pub use scan::{scan_line, Segment};
pub use shape::{is_chord_shape, QUALITY_MARKERS};

/// One chord symbol, borrowed from its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordToken<'a> {
    pub root: &'a str,
    pub quality: &'a str,
    pub bass: Option<&'a str>,
}

impl<'a> ChordToken<'a> {
    /// Decompose a standalone sequence token.
    ///
    /// The root is matched case-insensitively. Everything after it up to the
    /// first `/` is the quality; the text between the first and second `/` is
    /// the bass. Anything after a second `/` is dropped.
    /// Returns `None` when the token does not start with a note.
    pub fn from_sequence(token: &'a str) -> Option<Self> {
        let (root, rest) = split_sequence_root(token)?;
        let mut parts = rest.split('/');
        let quality = parts.next().unwrap_or(rest);
        let bass = parts.next();
        Some(ChordToken {
            root,
            quality,
            bass,
        })
    }

    /// Rewrite root and bass by `semitones`, keeping the quality as-is.
    ///
    /// When a collector is given, enharmonic notes for both spellings are
    /// recorded in it.
    pub fn transpose(&self, semitones: i32, mut notes: Option<&mut ExplanationCollector>) -> String {
        let root = shift_spelling(self.root, semitones, notes.as_deref_mut());
        match self.bass {
            Some(bass) => {
                let bass = shift_spelling(bass, semitones, notes);
                format!("{}{}/{}", root, self.quality, bass)
            }
            None => format!("{}{}", root, self.quality),
        }
    }
}

impl fmt::Display for ChordToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// Normalize then transpose one spelling, explaining odd spellings.
///
/// The historical table (E#, B#, Fb, Cb) is only consulted when no double
/// accidental was folded, so a spelling never gets two notes.
fn shift_spelling(spelling: &str, semitones: i32, notes: Option<&mut ExplanationCollector>) -> String {
    let normalized = normalize_spelling(spelling);
    if let Some(notes) = notes {
        match &normalized.explanation {
            Some(text) => notes.add(text.as_str()),
            None => {
                if let Some(text) = theoretical_explanation(spelling) {
                    notes.add(text);
                }
            }
        }
    }
    transpose_note(&normalized.spelling, semitones)
}
