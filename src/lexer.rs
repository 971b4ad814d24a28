//! # Marker Lexer
//!
//! Splits marked-up chord text into [`Segment`]s and joins them back.
//!
//! ```text
//! "[ch]C[/ch] Amazing [ch]G/B[/ch] grace"
//!   -> Chord("C"), Literal(" Amazing "), Chord("G/B"), Literal(" grace")
//! ```
//!
//! `join(split(s)) == s` for every input. Malformed markup is never an
//! error for the caller:
//! - a start marker with no end marker is kept as literal text
//! - a start marker followed by another start marker before any end marker
//!   is literal; the chord begins at the last start marker
//!
//! Each byte of the input is scanned a bounded number of times.
//!
//! Adjacent literal text is merged into a single segment.

use crate::ast::Segment;
use crate::config::ChordMarkers;
use crate::error::SheetError;
use log::{debug, warn};

/// Lexer for chord-marked text
pub struct Lexer<'a> {
    input: &'a str,
    markers: &'a ChordMarkers,
    position: usize,
}

/// A chord found by [`Lexer::scan_chord`]
struct ChordSpan<'a> {
    /// Position of the start marker that opens the chord
    open: usize,
    inner: &'a str,
    /// Position just past the end marker
    next: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, markers: &'a ChordMarkers) -> Self {
        Self {
            input,
            markers,
            position: 0,
        }
    }

    /// Scan for the chord opened by the start marker at `open`.
    ///
    /// When more start markers follow before the end marker, the chord opens
    /// at the last of them.
    fn scan_chord(&self, open: usize) -> Result<ChordSpan<'a>, SheetError> {
        let start = self.markers.start.as_str();
        let body_start = open + start.len();
        let body = &self.input[body_start..];

        let end = body
            .find(self.markers.end.as_str())
            .ok_or(SheetError::UnterminatedMarker { offset: open })?;

        let open = match body[..end].rfind(start) {
            Some(inner_open) => {
                debug!("superseded chord marker at byte {}", open);
                body_start + inner_open
            }
            None => open,
        };

        Ok(ChordSpan {
            open,
            inner: &self.input[open + start.len()..body_start + end],
            next: body_start + end + self.markers.end.len(),
        })
    }

    pub fn tokenize(mut self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut literal = String::new();

        if self.markers.start.is_empty() || self.markers.end.is_empty() {
            if !self.input.is_empty() {
                segments.push(Segment::Literal(self.input.to_string()));
            }
            return segments;
        }

        while self.position < self.input.len() {
            let rest = &self.input[self.position..];
            let Some(found) = rest.find(self.markers.start.as_str()) else {
                literal.push_str(rest);
                break;
            };

            literal.push_str(&rest[..found]);
            let open = self.position + found;

            match self.scan_chord(open) {
                Ok(span) => {
                    literal.push_str(&self.input[open..span.open]);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Chord(span.inner.to_string()));
                    self.position = span.next;
                }
                Err(e) => {
                    // No end marker anywhere after `open`, so nothing later can close
                    warn!("{}; keeping the rest of the text as is", e);
                    literal.push_str(&self.input[open..]);
                    break;
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        segments
    }
}

/// Split `source` into literal and chord segments
pub fn split(source: &str, markers: &ChordMarkers) -> Vec<Segment> {
    Lexer::new(source, markers).tokenize()
}

/// Inverse of [`split`]: re-insert the markers around every chord segment
pub fn join(segments: &[Segment], markers: &ChordMarkers) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg {
            Segment::Literal(text) => out.push_str(text),
            Segment::Chord(inner) => {
                out.push_str(&markers.start);
                out.push_str(inner);
                out.push_str(&markers.end);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    fn chord(s: &str) -> Segment {
        Segment::Chord(s.to_string())
    }

    #[test]
    fn test_split_chords_and_text() {
        let markers = ChordMarkers::default();
        let segments = split("[ch]C[/ch] Amazing [ch]G/B[/ch] grace", &markers);
        assert_eq!(
            segments,
            vec![chord("C"), lit(" Amazing "), chord("G/B"), lit(" grace")]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split("", &ChordMarkers::default()).is_empty());
    }

    #[test]
    fn test_adjacent_chords() {
        let segments = split("[ch]A[/ch][ch]E[/ch]", &ChordMarkers::default());
        assert_eq!(segments, vec![chord("A"), chord("E")]);
    }

    #[test]
    fn test_empty_chord_body() {
        let segments = split("x[ch][/ch]y", &ChordMarkers::default());
        assert_eq!(segments, vec![lit("x"), chord(""), lit("y")]);
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        let segments = split("[ch]C", &ChordMarkers::default());
        assert_eq!(segments, vec![lit("[ch]C")]);

        let segments = split("[ch]G[/ch] then [ch]Am", &ChordMarkers::default());
        assert_eq!(segments, vec![chord("G"), lit(" then [ch]Am")]);
    }

    #[test]
    fn test_nested_start_marker() {
        let segments = split("[ch]A[ch]B[/ch]", &ChordMarkers::default());
        assert_eq!(segments, vec![lit("[ch]A"), chord("B")]);
    }

    #[test]
    fn test_stray_end_marker_is_literal() {
        let segments = split("a[/ch]b", &ChordMarkers::default());
        assert_eq!(segments, vec![lit("a[/ch]b")]);
    }

    #[test]
    fn test_round_trip() {
        let markers = ChordMarkers::default();
        for source in [
            "",
            "no chords at all",
            "[ch]C[/ch]",
            "[tab][ch]D[/ch]   [ch]A/C#[/ch]\\r\\nWords here[/tab]",
            "[ch]A[ch]B[/ch][/ch]",
            "trailing [ch]",
            "[ch]é[/ch]ü",
        ] {
            assert_eq!(join(&split(source, &markers), &markers), source);
        }
    }

    #[test]
    fn test_custom_markers() {
        let markers = ChordMarkers {
            start: "{".to_string(),
            end: "}".to_string(),
        };
        let segments = split("{Em}la {D}", &markers);
        assert_eq!(segments, vec![chord("Em"), lit("la "), chord("D")]);
        assert_eq!(join(&segments, &markers), "{Em}la {D}");
    }

    #[test]
    fn test_empty_markers_keep_everything_literal() {
        let markers = ChordMarkers {
            start: String::new(),
            end: "]".to_string(),
        };
        assert_eq!(split("[C]", &markers), vec![lit("[C]")]);
    }

    #[test]
    fn test_many_unterminated_markers() {
        let source = "[ch]C ".repeat(50_000);
        let segments = split(&source, &ChordMarkers::default());
        assert_eq!(segments.len(), 1);
        assert_eq!(join(&segments, &ChordMarkers::default()), source);
    }

    #[test]
    fn test_unterminated_after_chords() {
        let source = format!("{}{}", "[ch]D[/ch] la ".repeat(3), "[ch]E ".repeat(3));
        let segments = split(&source, &ChordMarkers::default());
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[5], lit(" la [ch]E [ch]E [ch]E "));
    }

    #[test]
    fn test_many_nested_start_markers() {
        let source = format!("{}G[/ch]", "[ch]A ".repeat(50_000));
        let segments = split(&source, &ChordMarkers::default());
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1], chord("A G"));
        assert_eq!(join(&segments, &ChordMarkers::default()), source);
    }

    #[test]
    fn test_lexer_matches_split() {
        let markers = ChordMarkers::default();
        let source = "[ch]Am[/ch] one [ch]F";
        assert_eq!(Lexer::new(source, &markers).tokenize(), split(source, &markers));
    }
}
