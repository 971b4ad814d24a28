//! Chord token parsing
//!
//! Reads the root (and the bass of a slash chord) off the front of a chord
//! token. Everything else in the token is opaque and kept byte for byte.
//!
//! A root is a letter `A`-`G`, optionally followed by `#` or `b`:
//! - `C#m7` → root `C#` (sharp spelling), quality `m7`
//! - `Bbsus4` → root `Bb` (flat spelling), quality `sus4`
//! - `Am` → root `A` (spelled with the caller's preference), quality `m`
//!
//! A `/` in the token introduces the bass, parsed with the same rules and
//! its own spelling: `D/F#` → root `D`, bass `F#`.

use crate::ast::{Bass, ChordToken, Root};
use crate::error::SheetError;
use crate::pitch::{AccidentalPreference, PitchClass};
use log::debug;

const BASS_SEPARATOR: char = '/';

fn unparsable(text: &str) -> SheetError {
    SheetError::UnparsableChord {
        token: text.to_string(),
    }
}

/// Parse the root at the start of `text`, returning it with the unconsumed
/// remainder.
///
/// A single-letter root takes `ambient` as its spelling.
///
/// # Errors
/// [`SheetError::UnparsableChord`] when `text` does not start with `A`-`G`,
/// or when the two-character spelling is not a table entry (`Cb`, `E#`).
///
/// # Example
/// ```
/// use chordsheet::{parse_root, AccidentalPreference};
///
/// let (root, rest) = parse_root("Ebmaj7", AccidentalPreference::Sharps).unwrap();
/// assert_eq!(root.written(), "Eb");
/// assert_eq!(root.spelling, AccidentalPreference::Flats);
/// assert_eq!(rest, "maj7");
/// ```
pub fn parse_root(
    text: &str,
    ambient: AccidentalPreference,
) -> Result<(Root, &str), SheetError> {
    let mut chars = text.chars().peekable();

    match chars.next() {
        Some('A'..='G') => {}
        _ => return Err(unparsable(text)),
    }

    // Letters and accidentals are ASCII, so char counts are byte lengths
    let (spelling, len) = match chars.peek() {
        Some('#') => (AccidentalPreference::Sharps, 2),
        Some('b') => (AccidentalPreference::Flats, 2),
        _ => (ambient, 1),
    };

    let pitch = PitchClass::from_name(&text[..len], spelling).ok_or_else(|| unparsable(text))?;
    Ok((Root { pitch, spelling }, &text[len..]))
}

fn parse_bass(text: &str, ambient: AccidentalPreference) -> Bass {
    match parse_root(text, ambient) {
        Ok((root, suffix)) => Bass::Note {
            root,
            suffix: suffix.to_string(),
        },
        Err(e) => {
            debug!("{}; keeping bass text as written", e);
            Bass::Verbatim(text.to_string())
        }
    }
}

/// Parse a full chord token: root, quality suffix and optional bass.
///
/// The token is split at its first `/`. A bass that is not a note is kept
/// as [`Bass::Verbatim`] so the root can still be transposed.
///
/// # Example
/// ```
/// use chordsheet::{parse_chord, AccidentalPreference, Bass};
///
/// let chord = parse_chord("Dm7/C", AccidentalPreference::Sharps).unwrap();
/// assert_eq!(chord.root.written(), "D");
/// assert_eq!(chord.quality, "m7");
/// assert!(matches!(chord.bass, Some(Bass::Note { .. })));
/// assert_eq!(chord.to_string(), "Dm7/C");
/// ```
pub fn parse_chord(text: &str, ambient: AccidentalPreference) -> Result<ChordToken, SheetError> {
    let (root, rest) = parse_root(text, ambient)?;

    let (quality, bass) = match rest.split_once(BASS_SEPARATOR) {
        Some((quality, bass)) => (quality, Some(parse_bass(bass, ambient))),
        None => (rest, None),
    };

    Ok(ChordToken {
        root,
        quality: quality.to_string(),
        bass,
    })
}
