//! # Song Files
//!
//! Persisted songs are plain UTF-8 text: one metadata line followed by the
//! chord-marked body.
//!
//! ```text
//! Amazing Grace{$meta}John Newton{$meta}G{$meta}Hymn{$meta}Capo 2
//! [ch]G[/ch]Amazing [ch]G7[/ch]grace\r\n...
//! ```
//!
//! The metadata fields are, in order: title, artist, key, description,
//! notes. Scraped bodies keep their line breaks escaped, so the body is
//! normally a single line; it is nevertheless read verbatim to the end of
//! the file.

use crate::ast::Document;
use crate::config::ChordMarkers;
use crate::error::SheetError;
use crate::pitch::AccidentalPreference;
use crate::transpose::transpose_document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Delimiter between metadata fields
pub const META_DELIMITER: &str = "{$meta}";

const FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SongMetadata {
    pub title: String,
    pub artist: String,
    pub key: String,
    pub description: String,
    pub notes: String,
}

impl SongMetadata {
    fn parse_line(line: &str) -> Result<Self, SheetError> {
        let fields: Vec<&str> = line.split(META_DELIMITER).collect();
        if fields.len() > FIELD_COUNT {
            return Err(SheetError::SongFileError(format!(
                "expected at most {} metadata fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        let field = |i: usize| fields.get(i).map(|s| s.to_string()).unwrap_or_default();
        Ok(Self {
            title: field(0),
            artist: field(1),
            key: field(2),
            description: field(3),
            notes: field(4),
        })
    }

    fn to_line(&self) -> String {
        [
            self.title.as_str(),
            self.artist.as_str(),
            self.key.as_str(),
            self.description.as_str(),
            self.notes.as_str(),
        ]
        .join(META_DELIMITER)
    }
}

/// A persisted song: metadata plus chord-marked body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SongFile {
    pub metadata: SongMetadata,
    pub body: String,
}

impl SongFile {
    pub fn new(metadata: SongMetadata, body: impl Into<String>) -> Self {
        Self {
            metadata,
            body: body.into(),
        }
    }

    /// Parse song file text.
    ///
    /// # Example
    /// ```
    /// use chordsheet::SongFile;
    ///
    /// let song = SongFile::parse("Title{$meta}Artist{$meta}G{$meta}{$meta}\n[ch]G[/ch]").unwrap();
    /// assert_eq!(song.metadata.title, "Title");
    /// assert_eq!(song.metadata.key, "G");
    /// assert_eq!(song.body, "[ch]G[/ch]");
    /// ```
    ///
    /// # Errors
    /// [`SheetError::SongFileError`] when the metadata line has more than five
    /// fields.
    pub fn parse(text: &str) -> Result<Self, SheetError> {
        let (line, body) = text.split_once('\n').unwrap_or((text, ""));
        let line = line.strip_suffix('\r').unwrap_or(line);

        Ok(Self {
            metadata: SongMetadata::parse_line(line)?,
            body: body.to_string(),
        })
    }

    pub fn read(path: &Path) -> Result<Self, SheetError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn write(&self, path: &Path) -> Result<(), SheetError> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Body split on the given chord markers
    pub fn document(&self, markers: &ChordMarkers) -> Document {
        Document::parse(&self.body, markers)
    }

    /// A copy of this song with its body transposed; metadata is unchanged
    pub fn transposed(
        &self,
        semitones: i64,
        target: AccidentalPreference,
        markers: &ChordMarkers,
    ) -> Self {
        let body = transpose_document(&self.document(markers), semitones, target);
        Self {
            metadata: self.metadata.clone(),
            body: body.to_string(),
        }
    }
}

impl fmt::Display for SongFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.metadata.to_line(), self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SongFile {
        SongFile::new(
            SongMetadata {
                title: "Amazing Grace".to_string(),
                artist: "John Newton".to_string(),
                key: "G".to_string(),
                description: "Hymn".to_string(),
                notes: "Capo 2".to_string(),
            },
            r"[ch]G[/ch]Amazing [ch]G7[/ch]grace\r\n[ch]C/G[/ch]how sweet",
        )
    }

    #[test]
    fn test_serialize_layout() {
        let text = sample().to_string();
        let (line, body) = text.split_once('\n').unwrap();
        assert_eq!(
            line,
            "Amazing Grace{$meta}John Newton{$meta}G{$meta}Hymn{$meta}Capo 2"
        );
        assert_eq!(body, sample().body);
    }

    #[test]
    fn test_parse_inverse_of_display() {
        let song = sample();
        assert_eq!(SongFile::parse(&song.to_string()).unwrap(), song);
        assert_eq!(SongFile::parse(&SongFile::default().to_string()).unwrap(), SongFile::default());
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let song = SongFile::parse("Only a title\r\nbody").unwrap();
        assert_eq!(song.metadata.title, "Only a title");
        assert_eq!(song.metadata.notes, "");
        assert_eq!(song.body, "body");
    }

    #[test]
    fn test_no_body() {
        let song = SongFile::parse("T{$meta}A").unwrap();
        assert_eq!(song.metadata.artist, "A");
        assert_eq!(song.body, "");

        assert_eq!(SongFile::parse("").unwrap(), SongFile::default());
    }

    #[test]
    fn test_too_many_fields() {
        let err = SongFile::parse("a{$meta}b{$meta}c{$meta}d{$meta}e{$meta}f\nbody").unwrap_err();
        assert!(matches!(err, SheetError::SongFileError(_)));
    }

    #[test]
    fn test_transposed_keeps_metadata() {
        let song = sample().transposed(2, AccidentalPreference::Sharps, &ChordMarkers::default());
        assert_eq!(song.metadata, sample().metadata);
        assert_eq!(
            song.body,
            r"[ch]A[/ch]Amazing [ch]A7[/ch]grace\r\n[ch]D/A[/ch]how sweet"
        );
    }

    #[test]
    fn test_read_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grace.wtr");
        sample().write(&path).unwrap();
        assert_eq!(SongFile::read(&path).unwrap(), sample());
    }

    #[test]
    fn test_metadata_as_yaml() {
        let yaml = serde_yaml::to_string(&sample().metadata).unwrap();
        assert!(yaml.contains("title: Amazing Grace"));
        let back: SongMetadata = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, sample().metadata);
    }
}
