//! Note engine: pitch-class arithmetic and enharmonic normalization.
//!
//! Every spelling a user can type resolves to one of twelve pitch classes.
//! Output is always spelled with sharps, whatever the input looked like.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Display names, indexed by pitch class.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Spellings that resolve directly to a pitch class.
///
/// Double accidentals are not listed; [`normalize_spelling`] folds them
/// onto one of these first.
const SPELLINGS: [(&str, u8); 21] = [
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
    // Historical spellings
    ("E#", 5),
    ("B#", 0),
    ("Fb", 4),
    ("Cb", 11),
];

/// Explanations for the four letter spellings that sit on a natural.
const HISTORICAL_EXPLANATIONS: [(&str, &str); 4] = [
    ("E#", "Mi sustenido (E#) é enarmônica de Fá (F)."),
    ("B#", "Si sustenido (B#) é enarmônica de Dó (C)."),
    ("Fb", "Fá bemol (Fb) é enarmônica de Mi (E)."),
    ("Cb", "Dó bemol (Cb) é enarmônica de Si (B)."),
];

/// One of the twelve equal-tempered pitch classes (0 = C, 11 = B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build from any integer, wrapping into 0..12.
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Shift by a signed number of semitones. Any `i32` is accepted.
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(i32::from(self.0) + semitones.rem_euclid(12))
    }

    /// Canonical sharp-spelled name.
    pub fn name(self) -> &'static str {
        SHARP_NAMES[usize::from(self.0)]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a spelling (case-insensitive). `None` means the spelling is not
/// a known note; callers pass the original text through untouched.
pub fn resolve_pitch_class(spelling: &str) -> Option<PitchClass> {
    SPELLINGS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(spelling))
        .map(|&(_, value)| PitchClass(value))
}

/// The explanation attached to E#, B#, Fb or Cb, if `spelling` is one of them.
pub fn theoretical_explanation(spelling: &str) -> Option<&'static str> {
    HISTORICAL_EXPLANATIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(spelling))
        .map(|&(_, text)| text)
}

/// Result of folding a double accidental onto a plain spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<'a> {
    pub spelling: Cow<'a, str>,
    /// Present only when a double sharp or double flat was folded.
    pub explanation: Option<String>,
}

impl Normalized<'_> {
    /// Whether normalization rewrote the spelling.
    pub fn fired(&self) -> bool {
        self.explanation.is_some()
    }
}

/// Fold `##` / `bb` spellings onto their sharp-spelled equivalent.
///
/// `C##` becomes `D`, `Dbb` becomes `C`. The suffix check is case-sensitive.
/// Anything else, including a double accidental on an unknown base, comes
/// back unchanged with no explanation.
pub fn normalize_spelling(spelling: &str) -> Normalized<'_> {
    if spelling.ends_with("##") {
        if let Some(base) = resolve_pitch_class(&spelling.replace("##", "")) {
            let name = base.transpose(2).name();
            return Normalized {
                spelling: Cow::Borrowed(name),
                explanation: Some(format!(
                    "A nota {} é enarmônica de {} (Duplo Sustenido).",
                    spelling, name
                )),
            };
        }
    }

    if spelling.ends_with("bb") {
        if let Some(base) = resolve_pitch_class(&spelling.replace("bb", "")) {
            let name = base.transpose(-2).name();
            return Normalized {
                spelling: Cow::Borrowed(name),
                explanation: Some(format!(
                    "A nota {} é enarmônica de {} (Duplo Bemol).",
                    spelling, name
                )),
            };
        }
    }

    Normalized {
        spelling: Cow::Borrowed(spelling),
        explanation: None,
    }
}

/// Transpose one note spelling by `semitones`, rendering with sharps.
///
/// Double accidentals are normalized first. Unknown spellings are returned
/// as-is.
pub fn transpose_note(spelling: &str, semitones: i32) -> String {
    let normalized = normalize_spelling(spelling);
    match resolve_pitch_class(&normalized.spelling) {
        Some(pc) => pc.transpose(semitones).name().to_string(),
        None => spelling.to_string(),
    }
}
