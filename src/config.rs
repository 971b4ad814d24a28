//! # Configuration
//!
//! Marker strings, page boundaries and the default accidental preference,
//! loadable from YAML. Every field has a default matching the scraped
//! chord-sheet format, so an empty document (or no file at all) is a valid
//! configuration.
//!
//! ```yaml
//! accidentals: flats
//! markup:
//!   chord-start: "[ch]"
//!   chord-end: "[/ch]"
//!   strip: ["[tab]", "[/tab]"]
//!   line-breaks: ["\\r\\n", "\r\n", "\n"]
//! boundaries:
//!   - start: '"tab_view":{"wiki_tab":{"content":"'
//!     end: '","revision_id"'
//! ```

use crate::error::SheetError;
use crate::pitch::AccidentalPreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Start and end markers around a chord token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordMarkers {
    #[serde(rename = "chord-start")]
    pub start: String,
    #[serde(rename = "chord-end")]
    pub end: String,
}

impl Default for ChordMarkers {
    fn default() -> Self {
        Self {
            start: "[ch]".to_string(),
            end: "[/ch]".to_string(),
        }
    }
}

/// Structural markup of the chord text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Markup {
    #[serde(flatten)]
    pub chords: ChordMarkers,
    /// Other markers removed when rendering for display
    pub strip: Vec<String>,
    /// Line separators of the source text; scraped content uses the escaped
    /// two-character sequences `\r\n`
    pub line_breaks: Vec<String>,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            chords: ChordMarkers::default(),
            strip: vec!["[tab]".to_string(), "[/tab]".to_string()],
            line_breaks: vec!["\\r\\n".to_string(), "\r\n".to_string(), "\n".to_string()],
        }
    }
}

/// Text boundaries around the chord content in a scraped page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    pub start: String,
    pub end: String,
}

impl Boundary {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Default page boundaries: the JSON page state, then its HTML-escaped form
pub fn default_boundaries() -> Vec<Boundary> {
    vec![
        Boundary::new(r#""tab_view":{"wiki_tab":{"content":""#, r#"","revision_id""#),
        Boundary::new(
            "{&quot;content&quot;:&quot;",
            "&quot;,&quot;revision_id&quot;",
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub accidentals: AccidentalPreference,
    pub markup: Markup,
    pub boundaries: Vec<Boundary>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accidentals: AccidentalPreference::default(),
            markup: Markup::default(),
            boundaries: default_boundaries(),
        }
    }
}

impl Config {
    /// Parse a YAML configuration; missing keys take their defaults.
    ///
    /// # Example
    /// ```
    /// use chordsheet::{AccidentalPreference, Config};
    ///
    /// let config = Config::from_yaml("accidentals: flats").unwrap();
    /// assert_eq!(config.accidentals, AccidentalPreference::Flats);
    /// assert_eq!(config.markup.chords.start, "[ch]");
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, SheetError> {
        // An empty document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config =
            serde_yaml::from_str(content).map_err(|e| SheetError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn validate(&self) -> Result<(), SheetError> {
        if self.markup.chords.start.is_empty() || self.markup.chords.end.is_empty() {
            return Err(SheetError::ConfigError(
                "chord-start and chord-end must not be empty".to_string(),
            ));
        }
        if self.markup.line_breaks.iter().any(String::is_empty) {
            return Err(SheetError::ConfigError(
                "line-breaks must not contain an empty string".to_string(),
            ));
        }
        if self.boundaries.iter().any(|b| b.start.is_empty()) {
            return Err(SheetError::ConfigError(
                "boundary start markers must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
