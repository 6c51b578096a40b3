//! Root and bass note parsing using winnow combinators.

use winnow::ascii::Caseless;
use winnow::combinator::{alt, opt, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::ChordToken;

type PResult<T> = winnow::ModalResult<T>;

/// Parse an accidental suffix. Doubles are tried before singles so the
/// longest spelling wins.
fn accidental<'i>(input: &mut &'i str) -> PResult<&'i str> {
    alt(("##", "bb", "#", "b")).parse_next(input)
}

/// Same as [`accidental`] but the flat sign may be upper case (`CB`, `EBB`).
fn caseless_accidental<'i>(input: &mut &'i str) -> PResult<&'i str> {
    alt(("##", Caseless("bb"), "#", Caseless("b"))).parse_next(input)
}

/// Chart root: uppercase letter A-G plus optional accidental.
pub fn chart_root<'i>(input: &mut &'i str) -> PResult<&'i str> {
    (one_of('A'..='G'), opt(accidental))
        .take()
        .parse_next(input)
}

/// Sequence root: like [`chart_root`] but ignoring case throughout.
pub fn sequence_root<'i>(input: &mut &'i str) -> PResult<&'i str> {
    (one_of(('A'..='G', 'a'..='g')), opt(caseless_accidental))
        .take()
        .parse_next(input)
}

/// Characters that end a chart quality run.
fn ends_quality(c: char) -> bool {
    matches!(c, 'A'..='G' | ',' | '.' | '/') || c.is_whitespace()
}

/// Parse a chord as it appears inside a chart line: root, quality run and an
/// optional `/bass`. A `/` not followed by a note is left in the input.
pub fn chart_chord<'i>(input: &mut &'i str) -> PResult<ChordToken<'i>> {
    let root = chart_root.parse_next(input)?;
    let quality = take_while(0.., |c: char| !ends_quality(c)).parse_next(input)?;
    let bass = opt(preceded('/', chart_root)).parse_next(input)?;
    Ok(ChordToken {
        root,
        quality,
        bass,
    })
}

/// Split a sequence token into its root and the remainder after it.
pub fn split_sequence_root(token: &str) -> Option<(&str, &str)> {
    let mut input = token;
    let root = sequence_root.parse_next(&mut input).ok()?;
    Some((root, input))
}

/// True when `input` is exactly `/` followed by a chart root.
pub fn is_bare_bass(input: &str) -> bool {
    let mut rest = input;
    preceded('/', chart_root).parse_next(&mut rest).is_ok() && rest.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_root_longest_accidental() {
        let mut input = "Ebbm7";
        assert_eq!(chart_root.parse_next(&mut input).unwrap(), "Ebb");
        assert_eq!(input, "m7");

        let mut input = "F##";
        assert_eq!(chart_root.parse_next(&mut input).unwrap(), "F##");

        let mut input = "Bbm";
        assert_eq!(chart_root.parse_next(&mut input).unwrap(), "Bb");
        assert_eq!(input, "m");
    }

    #[test]
    fn test_chart_root_is_case_sensitive() {
        let mut input = "am";
        assert!(chart_root.parse_next(&mut input).is_err());

        let mut input = "CB";
        assert_eq!(chart_root.parse_next(&mut input).unwrap(), "C");
    }

    #[test]
    fn test_sequence_root_ignores_case() {
        assert_eq!(split_sequence_root("am7"), Some(("a", "m7")));
        assert_eq!(split_sequence_root("CB7"), Some(("CB", "7")));
        assert_eq!(split_sequence_root("dBB"), Some(("dBB", "")));
        assert_eq!(split_sequence_root("C#m/G#"), Some(("C#", "m/G#")));
    }

    #[test]
    fn test_sequence_root_rejects_non_notes() {
        assert_eq!(split_sequence_root("H7"), None);
        assert_eq!(split_sequence_root(""), None);
        assert_eq!(split_sequence_root("#C"), None);
    }

    #[test]
    fn test_chart_chord_parts() {
        let mut input = "C#m7/G# rest";
        let chord = chart_chord.parse_next(&mut input).unwrap();
        assert_eq!(chord.root, "C#");
        assert_eq!(chord.quality, "m7");
        assert_eq!(chord.bass, Some("G#"));
        assert_eq!(input, " rest");
    }

    #[test]
    fn test_chart_chord_quality_stops_at_uppercase_note() {
        let mut input = "C7(9)G";
        let chord = chart_chord.parse_next(&mut input).unwrap();
        assert_eq!(chord.quality, "7(9)");
        assert_eq!(input, "G");
    }

    #[test]
    fn test_chart_chord_slash_without_note() {
        let mut input = "Am/x";
        let chord = chart_chord.parse_next(&mut input).unwrap();
        assert_eq!(chord.quality, "m");
        assert_eq!(chord.bass, None);
        assert_eq!(input, "/x");
    }

    #[test]
    fn test_is_bare_bass() {
        assert!(is_bare_bass("/E"));
        assert!(is_bare_bass("/Ebb"));
        assert!(is_bare_bass("/F#"));
        assert!(!is_bare_bass("/Eb#"));
        assert!(!is_bare_bass("/e"));
        assert!(!is_bare_bass("E"));
    }
}
