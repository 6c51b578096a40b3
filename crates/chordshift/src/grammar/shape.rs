//! Strict single-word chord shape used by the line classifier.
//!
//! A word has chord shape when it reads as
//!
//! ```text
//! root  marker?  digits?  "("? free-run ")"?  ("/" root)?
//! ```
//!
//! where `marker` is one of `m M dim aug sus add maj º ° / - +` and
//! `free-run` is any run without `)` or whitespace. Because the free run
//! absorbs markers, digits and slashes alike, the optional groups before it
//! never decide a match. What decides it is the first `)`: it closes the
//! run, and only a bare `/bass` may follow it.

use winnow::prelude::*;

use super::root::{chart_root, is_bare_bass};

/// Quality markers recognized right after the root.
pub const QUALITY_MARKERS: [&str; 12] = [
    "m", "M", "dim", "aug", "sus", "add", "maj", "º", "°", "/", "-", "+",
];

/// Whether a single whitespace-free word looks like a chord symbol.
pub fn is_chord_shape(word: &str) -> bool {
    let mut rest = word;
    if chart_root.parse_next(&mut rest).is_err() {
        return false;
    }
    if rest.chars().any(char::is_whitespace) {
        return false;
    }

    match rest.find(')') {
        None => true,
        Some(close) => {
            let tail = &rest[close + 1..];
            tail.is_empty() || is_bare_bass(tail)
        }
    }
}
