//! Cross-module behaviour checks for the public API.

use chordshift::{
    is_chord_line, resolve_pitch_class, resolve_semitone_shift, transpose_chart, transpose_note,
    transpose_sequence, transpose_sequence_by, Action, TransposeRequest,
};
use chordshift::note::SHARP_NAMES;
use pretty_assertions::assert_eq;

const ROOTS: [&str; 21] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb",
    "B", "E#", "B#", "Fb", "Cb",
];

#[test]
fn shift_then_unshift_restores_pitch_class() {
    for root in ROOTS {
        for shift in -24..=24 {
            let there = transpose_note(root, shift);
            let back = transpose_note(&there, -shift);
            assert_eq!(resolve_pitch_class(&back), resolve_pitch_class(root), "{root} {shift}");
        }
    }
}

#[test]
fn output_is_always_sharp_spelled() {
    for root in ROOTS {
        for shift in 0..12 {
            let out = transpose_note(root, shift);
            assert!(!out.ends_with('b'), "{root} + {shift} gave {out}");
            assert!(SHARP_NAMES.contains(&out.as_str()), "{out}");
        }
    }
}

#[test]
fn interval_units_are_whole_tones() {
    assert_eq!(resolve_semitone_shift(Action::Increase, 1.5), 3);
    assert_eq!(resolve_semitone_shift(Action::Increase, 1.4), 2);
    assert_eq!(TransposeRequest::new(Action::Decrease, 6.0).unwrap().semitones(), -12);
}

#[test]
fn huge_valid_intervals_wrap_instead_of_overflowing() {
    let request = TransposeRequest::new(Action::Increase, 1.2e9).unwrap();
    assert_eq!(request.semitones(), i32::MAX);

    // i32::MAX leaves remainder 7, a fifth up
    let result = transpose_sequence_by(&["B", "C/E"], request.semitones());
    assert_eq!(result.transposed_chords, ["F#", "G/B"]);

    assert_eq!(transpose_chart("B E", Action::Increase, 1.2e9), "F# B");
    assert_eq!(transpose_chart("B E", Action::Decrease, 1.2e9), "E A");
    assert_eq!(transpose_note("B", i32::MAX), "F#");
}

#[test]
fn explicit_shift_matches_action_interval() {
    let chords = ["Am", "F", "C/E", "G7sus4"];
    let by_action = transpose_sequence(&chords, Action::Decrease, 1.5);
    let by_shift = transpose_sequence_by(&chords, -3);
    assert_eq!(by_action, by_shift);
    assert_eq!(by_action.transposed_chords, ["F#m", "D", "A/C#", "E7sus4"]);
}

#[test]
fn theoretical_spellings_only_add_notes() {
    let plain = transpose_sequence(&["F", "C"], Action::Increase, 1.0);
    let odd = transpose_sequence(&["E#", "B#"], Action::Increase, 1.0);
    assert_eq!(plain.transposed_chords, odd.transposed_chords);
    assert!(plain.explanations.is_empty());
    assert_eq!(odd.explanations.len(), 2);
}

#[test]
fn chord_line_examples() {
    assert!(is_chord_line("Am  F  C  G"));
    assert!(!is_chord_line("Amazing grace, how sweet the sound"));
}

#[test]
fn sequence_result_serializes_like_the_api_response() {
    let result = transpose_sequence(&["C", "H"], Action::Increase, 1.0);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["original_chords"], serde_json::json!(["C", "H"]));
    assert_eq!(json["transposed_chords"], serde_json::json!(["D", "H?"]));
    assert_eq!(json["explanations"], serde_json::json!([]));
    assert_eq!(json["outcomes"], serde_json::json!(["transposed", "unparsed"]));
}
