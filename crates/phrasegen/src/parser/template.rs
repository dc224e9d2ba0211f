//! Marker scanner using winnow.
//!
//! A marker is `[` followed by the shortest run of text up to the next `]`
//! on the same line. Everything else is literal, including a `[` that never
//! closes.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::take_till;

use super::ast::{Marker, Segment, Template};

/// Scan a string into literal and marker segments.
///
/// Adjacent literal segments are merged, so a string without markers
/// produces at most one `Segment::Literal`.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    let mut segments: Vec<Segment> = repeat(0.., segment)
        .parse_next(&mut remaining)
        .unwrap_or_default();

    // Not reachable with the current grammar; keep unconsumed text as-is.
    if !remaining.is_empty() {
        segments.push(Segment::Literal(remaining.to_string()));
    }

    Template {
        segments: merge_literals(segments),
    }
}

/// Cheap pre-check used before recursing into a chosen candidate.
///
/// A string can only contain a marker if it has both bracket characters.
pub fn has_markers(text: &str) -> bool {
    text.contains('[') && text.contains(']')
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Marker(_) => result.push(other),
        }
    }

    result
}

/// Parse a single segment (marker, literal run, or a stray `[`).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((marker, literal_run, stray_bracket)).parse_next(input)
}

/// Parse a marker: `[` name `]`, where name stops at the first `]` or newline.
fn marker(input: &mut &str) -> ModalResult<Segment> {
    delimited('[', take_till(0.., ['\n', ']']), ']')
        .map(|name: &str| Segment::Marker(Marker::new(name)))
        .parse_next(input)
}

/// Parse a run of text up to the next `[`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., '[')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// Parse a `[` that does not open a marker.
fn stray_bracket(input: &mut &str) -> ModalResult<Segment> {
    '['.value(Segment::Literal("[".to_string()))
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    fn mark(s: &str) -> Segment {
        Segment::Marker(Marker::new(s))
    }

    #[test]
    fn stray_brackets_merge_into_surrounding_literal() {
        let t = parse_template("a [b c");
        assert_eq!(t.segments, vec![lit("a [b c")]);
    }

    #[test]
    fn closing_bracket_alone_is_literal() {
        let t = parse_template("x] [y");
        assert_eq!(t.segments, vec![lit("x] [y")]);
    }

    #[test]
    fn marker_does_not_cross_newline() {
        let t = parse_template("[a\n[b]");
        assert_eq!(t.segments, vec![lit("[a\n"), mark("b")]);
    }
}
