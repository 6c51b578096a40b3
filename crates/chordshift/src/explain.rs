//! Explanation notes and per-token outcomes.
//!
//! Transposition never fails. Tokens that cannot be read are passed through
//! with a `?` marker, and spellings worth commenting on (E#, Cb, double
//! accidentals) produce a human-readable note on the side.

use serde::{Deserialize, Serialize};

/// What happened to one input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenOutcome {
    /// Root was recognized and the chord rewritten.
    Transposed,
    /// No root at the start of the token; echoed back with a `?` suffix.
    Unparsed,
}

impl TokenOutcome {
    pub fn was_fully_parsed(self) -> bool {
        self == TokenOutcome::Transposed
    }
}

/// Collector for explanation notes, deduplicated by exact text.
///
/// Notes keep the order in which they were first seen.
#[derive(Debug, Default)]
pub struct ExplanationCollector {
    notes: Vec<String>,
}

impl ExplanationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a note unless the same text is already present.
    pub fn add(&mut self, note: impl Into<String>) {
        let note = note.into();
        if !self.notes.contains(&note) {
            self.notes.push(note);
        }
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<String> {
        self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_dedups_exact_text() {
        let mut collector = ExplanationCollector::new();
        collector.add("A nota C## é enarmônica de D (Duplo Sustenido).");
        collector.add("A nota C## é enarmônica de D (Duplo Sustenido).");
        collector.add("A nota c## é enarmônica de D (Duplo Sustenido).");

        // Different casing is different text
        assert_eq!(collector.notes().len(), 2);
    }

    #[test]
    fn test_collector_keeps_first_seen_order() {
        let mut collector = ExplanationCollector::new();
        collector.add("b");
        collector.add("a");
        collector.add("b");

        assert_eq!(collector.into_notes(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_outcome() {
        assert!(TokenOutcome::Transposed.was_fully_parsed());
        assert!(!TokenOutcome::Unparsed.was_fully_parsed());
    }
}
