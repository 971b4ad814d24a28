//! # Pitch Classes
//!
//! The twelve semitone positions of the chromatic circle and their two
//! spellings. Position 0 is A; the sharp and flat tables are index-aligned,
//! so a position found through either table names the same pitch.
//!
//! ```text
//! index   0  1   2  3  4   5  6   7  8  9   10 11
//! sharps  A  A#  B  C  C#  D  D#  E  F  F#  G  G#
//! flats   A  Bb  B  C  Db  D  Eb  E  F  Gb  G  Ab
//! ```
//!
//! Transposition is modulo-12 arithmetic on the index followed by a lookup
//! in the table of the requested [`AccidentalPreference`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of semitone positions in an octave
pub const SEMITONES: usize = 12;

/// Sharp spellings, indexed by pitch class
pub const SHARP_NAMES: [&str; SEMITONES] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Flat spellings, indexed by pitch class
pub const FLAT_NAMES: [&str; SEMITONES] = [
    "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab",
];

/// Which accidental spells the black keys: sharps (`C#`) or flats (`Db`).
///
/// Used both as the caller's rendering preference and as the recorded
/// spelling of a parsed root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalPreference {
    #[default]
    Sharps,
    Flats,
}

impl AccidentalPreference {
    /// Spelling table for this preference
    pub fn names(self) -> &'static [&'static str; SEMITONES] {
        match self {
            AccidentalPreference::Sharps => &SHARP_NAMES,
            AccidentalPreference::Flats => &FLAT_NAMES,
        }
    }
}

/// One of the 12 positions on the chromatic circle (0 = A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class from any integer, wrapping modulo 12
    pub fn new(index: i64) -> Self {
        Self(index.rem_euclid(SEMITONES as i64) as u8)
    }

    /// Look up a written root (`"C"`, `"Db"`, `"F#"`) in the table matching
    /// its spelling. Returns `None` for names outside that table, such as
    /// `"Cb"` or `"E#"`.
    pub fn from_name(name: &str, spelling: AccidentalPreference) -> Option<Self> {
        spelling
            .names()
            .iter()
            .position(|&n| n == name)
            .map(|i| Self(i as u8))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Shift by any number of semitones. Negative offsets wrap with floor
    /// modulo, so the result is always in `0..12`.
    pub fn transpose(self, semitones: i64) -> Self {
        Self::new(self.0 as i64 + semitones)
    }

    /// Spelling of this pitch class under the given preference
    pub fn name(self, preference: AccidentalPreference) -> &'static str {
        preference.names()[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(AccidentalPreference::Sharps))
    }
}

/// Transpose a pitch class and render it in the target spelling.
///
/// An offset of 0 only re-spells: `Db` rendered with sharps is `C#`.
///
/// # Example
/// ```
/// use chordsheet::{transpose_pitch, AccidentalPreference, PitchClass};
///
/// let c = PitchClass::from_name("C", AccidentalPreference::Sharps).unwrap();
/// assert_eq!(transpose_pitch(c, 1, AccidentalPreference::Sharps), "C#");
/// assert_eq!(transpose_pitch(c, -1, AccidentalPreference::Flats), "B");
/// assert_eq!(transpose_pitch(c, 13, AccidentalPreference::Flats), "Db");
/// ```
pub fn transpose_pitch(
    pitch: PitchClass,
    semitones: i64,
    target: AccidentalPreference,
) -> &'static str {
    pitch.transpose(semitones).name(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use AccidentalPreference::{Flats, Sharps};

    #[test]
    fn test_tables_are_aligned() {
        for i in 0..SEMITONES {
            let sharp = SHARP_NAMES[i];
            let flat = FLAT_NAMES[i];
            assert_eq!(sharp.len() == 1, flat.len() == 1, "index {}", i);
            if sharp.len() == 1 {
                assert_eq!(sharp, flat);
            }
            assert_eq!(PitchClass::from_name(sharp, Sharps), PitchClass::from_name(flat, Flats));
        }
    }

    #[test]
    fn test_from_name_uses_matching_table() {
        assert_eq!(PitchClass::from_name("Bb", Flats).map(PitchClass::index), Some(1));
        assert_eq!(PitchClass::from_name("A#", Sharps).map(PitchClass::index), Some(1));
        assert_eq!(PitchClass::from_name("Bb", Sharps), None);
        assert_eq!(PitchClass::from_name("Cb", Flats), None);
        assert_eq!(PitchClass::from_name("E#", Sharps), None);
        // Naturals live in both tables
        assert_eq!(PitchClass::from_name("G", Flats).map(PitchClass::index), Some(10));
    }

    #[test]
    fn test_transpose_wraps_both_directions() {
        let a = PitchClass::new(0);
        assert_eq!(a.transpose(-1).name(Sharps), "G#");
        assert_eq!(a.transpose(-1).name(Flats), "Ab");
        assert_eq!(a.transpose(11).index(), 11);
        assert_eq!(a.transpose(-121).index(), 11);
        assert_eq!(a.transpose(1_000_003).index(), (1_000_003 % 12) as u8);
    }

    #[test]
    fn test_cyclic_closure() {
        for i in 0..SEMITONES as i64 {
            let pc = PitchClass::new(i);
            for k in [-36, -12, 12, 24, 120] {
                assert_eq!(transpose_pitch(pc, k, Sharps), pc.name(Sharps));
                assert_eq!(transpose_pitch(pc, k, Flats), pc.name(Flats));
            }
        }
    }

    #[test]
    fn test_respell_without_pitch_change() {
        let db = PitchClass::from_name("Db", Flats).unwrap();
        assert_eq!(transpose_pitch(db, 0, Sharps), "C#");
        assert_eq!(transpose_pitch(db, 0, Flats), "Db");
    }

    #[test]
    fn test_preference_deserializes_lowercase() {
        let pref: AccidentalPreference = serde_yaml::from_str("flats").unwrap();
        assert_eq!(pref, Flats);
        assert_eq!(AccidentalPreference::default(), Sharps);
    }
}
