//! # Chord Sheet Types
//!
//! This module defines the value types that flow through the transposer.
//!
//! ## Type Hierarchy
//! ```text
//! Document
//!   ├── markers: ChordMarkers (start/end strings, e.g. [ch] / [/ch])
//!   └── Vec<Segment>
//!         ├── Literal(text)      lyrics, spacing, unrecognized markup
//!         └── Chord(inner text)  raw text between the chord markers
//!
//! ChordToken (parsed from a Chord segment)
//!   ├── root: Root (pitch class + as-written spelling)
//!   ├── quality: String ("m7", "sus4", ... kept verbatim)
//!   └── bass: Option<Bass>
//!         ├── Note { root, suffix }
//!         └── Verbatim(text)     bass text that is not a note
//! ```
//!
//! ## Key Concepts
//!
//! ### Documents are values
//! A `Document` is never edited in place. Transposing or re-spelling builds
//! a new one, so callers can keep earlier versions for undo.
//!
//! ### Lossless text
//! Displaying a `Document` re-inserts the markers around each chord segment
//! and reproduces the source exactly. Displaying a `ChordToken` reproduces
//! the chord text it was parsed from.

use crate::config::ChordMarkers;
use crate::lexer;
use crate::pitch::{AccidentalPreference, PitchClass};
use std::fmt;

/// A run of text, either plain or the inside of a chord marker pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Chord(String),
}

/// Marked-up chord text split into literal and chord segments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub segments: Vec<Segment>,
    pub markers: ChordMarkers,
}

impl Document {
    /// Split `source` on the given chord markers.
    ///
    /// # Example
    /// ```
    /// use chordsheet::{ChordMarkers, Document, Segment};
    ///
    /// let doc = Document::parse("[ch]Am[/ch] tab", &ChordMarkers::default());
    /// assert_eq!(doc.segments[0], Segment::Chord("Am".to_string()));
    /// assert_eq!(doc.to_string(), "[ch]Am[/ch] tab");
    /// ```
    pub fn parse(source: &str, markers: &ChordMarkers) -> Self {
        Self {
            segments: lexer::split(source, markers),
            markers: markers.clone(),
        }
    }

    /// Inner text of every chord segment, in order
    pub fn chords(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Chord(text) => Some(text.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&lexer::join(&self.segments, &self.markers))
    }
}

/// A root or bass note as written: its pitch class and which spelling table
/// it was found in.
///
/// `pitch` is resolved while parsing, by looking the written name up in
/// the table of its own spelling. The two tables are index-aligned, so
/// transposition only needs `pitch`; `spelling` is kept so the token can be
/// written back exactly as it was read.
///
/// Single-letter roots carry the caller's preference as their spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Root {
    pub pitch: PitchClass,
    pub spelling: AccidentalPreference,
}

impl Root {
    /// The name this root was written with
    pub fn written(&self) -> &'static str {
        self.pitch.name(self.spelling)
    }
}

/// Text after the `/` of a slash chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bass {
    /// A bass note followed by trailing text that is kept verbatim
    Note { root: Root, suffix: String },
    /// Bass text without a recognizable note (`C/`, `C6/9`)
    Verbatim(String),
}

/// A parsed chord token: root, opaque quality suffix and optional bass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub root: Root,
    pub quality: String,
    pub bass: Option<Bass>,
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root.written(), self.quality)?;
        match &self.bass {
            Some(Bass::Note { root, suffix }) => write!(f, "/{}{}", root.written(), suffix),
            Some(Bass::Verbatim(text)) => write!(f, "/{}", text),
            None => Ok(()),
        }
    }
}
