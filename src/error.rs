//! # Error Types
//!
//! This module defines all error types for the chord-sheet library.
//!
//! Two of the variants never reach callers of the transposer or renderer:
//! the lexer and chord parser produce them internally and recover on the spot
//! (a malformed token is copied through unchanged, an unterminated marker
//! becomes literal text). The remaining variants belong to the I/O-facing
//! helpers: page extraction, song files and configuration.
//!
//! ## Error Types
//! - `UnparsableChord` - Chord token without a recognized root letter
//! - `UnterminatedMarker` - Chord start marker with no matching end marker
//! - `ExtractionFailure` - Scraped page has no known content boundary
//! - `SongFileError` - Malformed persisted song file
//! - `ConfigError` - Invalid YAML configuration
//! - `Io` - Underlying file I/O failure
//!
//! ## Usage
//! ```rust
//! use chordsheet::{extract_chords, Config, SheetError};
//!
//! let config = Config::default();
//! match extract_chords("<html>nothing here</html>", &config.boundaries) {
//!     Ok(markup) => println!("{}", markup),
//!     Err(SheetError::ExtractionFailure) => eprintln!("No chord data available"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    /// Chord token that does not start with a recognized root.
    ///
    /// Recovered locally: the token's text is passed through unchanged.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SheetError;
    /// let err = SheetError::UnparsableChord { token: "N.C.".to_string() };
    /// assert_eq!(err.to_string(), "Unparsable chord: N.C.");
    /// ```
    #[error("Unparsable chord: {token}")]
    UnparsableChord { token: String },

    /// Chord start marker with no end marker before the end of the document.
    ///
    /// Recovered locally: the remainder of the document is kept as literal text.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SheetError;
    /// let err = SheetError::UnterminatedMarker { offset: 12 };
    /// assert_eq!(err.to_string(), "Unterminated chord marker at byte 12");
    /// ```
    #[error("Unterminated chord marker at byte {offset}")]
    UnterminatedMarker { offset: usize },

    /// None of the configured content boundaries occur in the scraped page.
    #[error("No chord data available")]
    ExtractionFailure,

    /// Invalid persisted song file.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SheetError;
    /// let err = SheetError::SongFileError("expected at most 5 metadata fields, found 7".to_string());
    /// assert_eq!(err.to_string(), "Invalid song file: expected at most 5 metadata fields, found 7");
    /// ```
    #[error("Invalid song file: {0}")]
    SongFileError(String),

    /// Invalid YAML configuration.
    #[error("Invalid config: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
