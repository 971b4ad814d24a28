//! # chordsheet
//!
//! Parse chord-annotated song sheets and transpose their chords between keys
//! and between sharp and flat spelling.
//!
//! ## Pipeline
//! 1. `lexer` splits marked-up text into literal and chord segments
//! 2. `chord` reads the root and optional bass off each chord token
//! 3. `pitch` shifts each pitch class and spells it in the target style
//! 4. `transpose` reassembles a new document
//! 5. `render` strips the markup into display lines
//!
//! ```rust
//! use chordsheet::{render_lines, transpose, AccidentalPreference};
//!
//! let up = transpose("[ch]C/E[/ch] tab", 1, AccidentalPreference::Sharps);
//! assert_eq!(up, "[ch]C#/F[/ch] tab");
//! assert_eq!(render_lines(&up), vec!["C#/F tab"]);
//! ```

pub mod ast;
pub mod chord;
pub mod config;
pub mod error;
pub mod extract;
pub mod lexer;
pub mod pitch;
pub mod render;
pub mod song_file;
pub mod transpose;

pub use ast::*;
pub use chord::{parse_chord, parse_root};
pub use config::{Boundary, ChordMarkers, Config, Markup};
pub use error::*;
pub use extract::{extract_chords, is_chord_sheet_url};
pub use pitch::{transpose_pitch, AccidentalPreference, PitchClass, FLAT_NAMES, SHARP_NAMES};
pub use render::{render, render_document, DisplayLines, Rendered};
pub use song_file::{SongFile, SongMetadata};
pub use transpose::{transpose_chord, transpose_chord_text, transpose_document};

/// Transpose every `[ch]...[/ch]` chord in `source`.
///
/// Use an offset of 0 to change only the accidental spelling.
pub fn transpose(source: &str, semitones: i64, target: AccidentalPreference) -> String {
    let doc = Document::parse(source, &ChordMarkers::default());
    transpose_document(&doc, semitones, target).to_string()
}

/// Display lines of `source` with the default markup
pub fn render_lines(source: &str) -> Vec<String> {
    render(source, &Markup::default()).to_lines()
}
