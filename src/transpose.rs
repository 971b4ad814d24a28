use crate::ast::{Bass, ChordToken, Document, Segment};
use crate::chord::parse_chord;
use crate::pitch::{transpose_pitch, AccidentalPreference};
use log::debug;

/// Render a parsed chord shifted by `semitones`, spelled with `target`.
///
/// Root and bass are shifted independently; the quality and bass suffix are
/// copied unchanged. Each note's as-written spelling was already used to
/// find its pitch class, so only `target` decides the output spelling.
pub fn transpose_chord(chord: &ChordToken, semitones: i64, target: AccidentalPreference) -> String {
    let mut out = String::from(transpose_pitch(chord.root.pitch, semitones, target));
    out.push_str(&chord.quality);

    match &chord.bass {
        Some(Bass::Note { root, suffix }) => {
            out.push('/');
            out.push_str(transpose_pitch(root.pitch, semitones, target));
            out.push_str(suffix);
        }
        Some(Bass::Verbatim(text)) => {
            out.push('/');
            out.push_str(text);
        }
        None => {}
    }
    out
}

/// Transpose the inner text of one chord marker pair.
///
/// Text that does not start with a chord root comes back unchanged.
///
/// # Example
/// ```
/// use chordsheet::{transpose_chord_text, AccidentalPreference};
///
/// assert_eq!(transpose_chord_text("C/E", -1, AccidentalPreference::Flats), "B/Eb");
/// assert_eq!(transpose_chord_text("N.C.", 3, AccidentalPreference::Flats), "N.C.");
/// ```
pub fn transpose_chord_text(text: &str, semitones: i64, target: AccidentalPreference) -> String {
    match parse_chord(text, target) {
        Ok(chord) => transpose_chord(&chord, semitones, target),
        Err(e) => {
            debug!("{}; passing it through", e);
            text.to_string()
        }
    }
}

/// Transpose every chord of a document.
///
/// Returns a new document; literal segments are copied as they are. An
/// offset of 0 re-spells every chord in `target` without changing pitch,
/// which is how a change of accidental preference is applied.
///
/// # Example
/// ```
/// use chordsheet::{transpose_document, AccidentalPreference, ChordMarkers, Document};
///
/// let doc = Document::parse("[ch]C[/ch] tab", &ChordMarkers::default());
/// let up = transpose_document(&doc, 1, AccidentalPreference::Sharps);
/// assert_eq!(up.to_string(), "[ch]C#[/ch] tab");
/// assert_eq!(doc.to_string(), "[ch]C[/ch] tab");
/// ```
pub fn transpose_document(doc: &Document, semitones: i64, target: AccidentalPreference) -> Document {
    let segments = doc
        .segments
        .iter()
        .map(|seg| match seg {
            Segment::Chord(text) => Segment::Chord(transpose_chord_text(text, semitones, target)),
            Segment::Literal(text) => Segment::Literal(text.clone()),
        })
        .collect();

    Document {
        segments,
        markers: doc.markers.clone(),
    }
}
