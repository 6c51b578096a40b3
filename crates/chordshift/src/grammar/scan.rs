//! Left-to-right chord scanner for chart lines.
//!
//! A chord is recognized at the start of the line, or right after a single
//! boundary character that is not a note letter (`A-G`, `a-g`) or `#`. The
//! boundary belongs to the match: once consumed it cannot start the next
//! chord, so `C-G` yields `C-` and leaves `G` as plain text.

use winnow::prelude::*;

use super::root::chart_chord;
use super::ChordToken;

/// A piece of a scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through untouched.
    Text(&'a str),
    /// A recognized chord and the boundary character in front of it
    /// (empty at the start of the line).
    Chord {
        boundary: &'a str,
        token: ChordToken<'a>,
    },
}

fn is_boundary(c: char) -> bool {
    !matches!(c, 'A'..='G' | 'a'..='g' | '#')
}

/// Try to read a chord body at the start of `input`, returning it together
/// with the number of bytes it spans.
fn chord_at(input: &str) -> Option<(ChordToken<'_>, usize)> {
    let mut rest = input;
    let token = chart_chord.parse_next(&mut rest).ok()?;
    Some((token, input.len() - rest.len()))
}

/// Try to match a chord starting at byte offset `pos` of `line`.
///
/// Returns the segment and the offset just past it.
fn match_at(line: &str, pos: usize) -> Option<(Segment<'_>, usize)> {
    let here = &line[pos..];

    if pos == 0 {
        if let Some((token, len)) = chord_at(here) {
            return Some((Segment::Chord { boundary: "", token }, len));
        }
    }

    let c = here.chars().next()?;
    if !is_boundary(c) {
        return None;
    }
    let width = c.len_utf8();
    let (token, len) = chord_at(&here[width..])?;
    Some((
        Segment::Chord {
            boundary: &here[..width],
            token,
        },
        pos + width + len,
    ))
}

/// Split a line into plain text and chord segments.
///
/// Concatenating the segments (chords via their `Display`, boundaries
/// included) reproduces the line exactly.
pub fn scan_line(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < line.len() {
        if let Some((segment, end)) = match_at(line, pos) {
            if text_start < pos {
                segments.push(Segment::Text(&line[text_start..pos]));
            }
            segments.push(segment);
            pos = end;
            text_start = end;
            continue;
        }
        pos += line[pos..].chars().next().map_or(1, char::len_utf8);
    }

    if text_start < line.len() {
        segments.push(Segment::Text(&line[text_start..]));
    }

    segments
}
