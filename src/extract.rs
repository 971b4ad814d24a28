//! Chord content extraction from scraped pages
//!
//! A chord page embeds the marked-up chord text inside its page state. The
//! content sits between a known start boundary and end boundary; pages
//! differ in whether that state is plain JSON or HTML-escaped, so several
//! boundary pairs are tried in order.
//!
//! Fetching the page is left to the caller.

use crate::config::Boundary;
use crate::error::SheetError;
use log::debug;

const SUPPORTED_HOST: &str = "ultimate-guitar.com";

/// Whether `url` points at a chord page this crate knows how to extract
pub fn is_chord_sheet_url(url: &str) -> bool {
    url.contains(SUPPORTED_HOST) && url.contains("chords")
}

/// Pull the chord markup out of a scraped page.
///
/// The first boundary whose start marker occurs in `page` wins. The content
/// runs to the first end marker after it, or to the end of the page when the
/// end marker is missing.
///
/// # Errors
/// [`SheetError::ExtractionFailure`] when no start marker occurs.
///
/// # Example
/// ```
/// use chordsheet::{extract_chords, Boundary};
///
/// let page = "<pre>[ch]G[/ch] hello</pre>";
/// let content = extract_chords(page, &[Boundary::new("<pre>", "</pre>")]).unwrap();
/// assert_eq!(content, "[ch]G[/ch] hello");
/// ```
pub fn extract_chords(page: &str, boundaries: &[Boundary]) -> Result<String, SheetError> {
    for boundary in boundaries {
        if boundary.start.is_empty() {
            continue;
        }
        let Some(found) = page.find(boundary.start.as_str()) else {
            continue;
        };

        debug!("matched content boundary {:?}", boundary.start);
        let content = &page[found + boundary.start.len()..];
        let content = match content.find(boundary.end.as_str()) {
            Some(end) if !boundary.end.is_empty() => &content[..end],
            _ => content,
        };
        return Ok(content.to_string());
    }

    Err(SheetError::ExtractionFailure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_boundaries;

    #[test]
    fn test_extract_json_state() {
        let page = r#"<div data-content="{&quot;x&quot;:1}">"tab_view":{"wiki_tab":{"content":"[ch]Am[/ch] words\r\n[ch]F[/ch]","revision_id":42}}</div>"#;
        let content = extract_chords(page, &default_boundaries()).unwrap();
        assert_eq!(content, r"[ch]Am[/ch] words\r\n[ch]F[/ch]");
    }

    #[test]
    fn test_extract_escaped_state() {
        let page = "{&quot;content&quot;:&quot;[ch]D[/ch]&quot;,&quot;revision_id&quot;:7}";
        let content = extract_chords(page, &default_boundaries()).unwrap();
        assert_eq!(content, "[ch]D[/ch]");
    }

    #[test]
    fn test_first_boundary_wins() {
        let page = "{&quot;content&quot;:&quot;escaped&quot;,&quot;revision_id&quot; \
                    \"tab_view\":{\"wiki_tab\":{\"content\":\"plain\",\"revision_id\"";
        let content = extract_chords(page, &default_boundaries()).unwrap();
        assert_eq!(content, "plain");
    }

    #[test]
    fn test_missing_end_takes_rest_of_page() {
        let content = extract_chords("head<pre>[ch]C[/ch]", &[Boundary::new("<pre>", "</pre>")]).unwrap();
        assert_eq!(content, "[ch]C[/ch]");
    }

    #[test]
    fn test_no_boundary_is_extraction_failure() {
        let err = extract_chords("<html></html>", &default_boundaries()).unwrap_err();
        assert!(matches!(err, SheetError::ExtractionFailure));
        assert_eq!(err.to_string(), "No chord data available");

        let err = extract_chords("", &default_boundaries()).unwrap_err();
        assert!(matches!(err, SheetError::ExtractionFailure));
    }

    #[test]
    fn test_chord_sheet_url() {
        assert!(is_chord_sheet_url(
            "https://tabs.ultimate-guitar.com/tab/artist/song-chords-12345"
        ));
        assert!(!is_chord_sheet_url("https://tabs.ultimate-guitar.com/tab/artist/song-tabs-1"));
        assert!(!is_chord_sheet_url("https://example.com/chords"));
    }
}
