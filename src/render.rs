//! Display rendering
//!
//! Strips chord markers and the other structural markers from marked-up
//! text and splits it into display lines. No chord semantics here.
//!
//! ```text
//! "[ch]G[/ch][tab]riff[/tab]\r\nnext line"  ->  ["Griff", "next line"]
//! ```

use crate::ast::Document;
use crate::config::Markup;

/// Marker-free text ready for display, split lazily into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    text: String,
    line_breaks: Vec<String>,
}

impl Rendered {
    /// The cleaned text, line breaks still in place
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Display lines. Each call starts a fresh pass over the text.
    pub fn lines(&self) -> DisplayLines<'_> {
        DisplayLines::new(&self.text, &self.line_breaks)
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.lines().map(str::to_string).collect()
    }
}

/// Iterator over the lines of a [`Rendered`] text
///
/// Each line break is searched for only once its last known occurrence has
/// been passed, so a full pass is linear in the text length.
#[derive(Debug, Clone)]
pub struct DisplayLines<'a> {
    text: &'a str,
    /// Start of the next line, `None` once the last line has been yielded
    position: Option<usize>,
    line_breaks: &'a [String],
    /// Next known occurrence of each line break; `None` when there is none
    upcoming: Vec<Option<usize>>,
}

impl<'a> DisplayLines<'a> {
    fn new(text: &'a str, line_breaks: &'a [String]) -> Self {
        let upcoming = line_breaks
            .iter()
            .map(|lb| if lb.is_empty() { None } else { text.find(lb.as_str()) })
            .collect();

        Self {
            text,
            position: (!text.is_empty()).then_some(0),
            line_breaks,
            upcoming,
        }
    }

    /// Earliest line break at or after `start`; the longest one wins a tie
    fn next_break(&mut self, start: usize) -> Option<(usize, usize)> {
        let (text, line_breaks) = (self.text, self.line_breaks);
        for (lb, slot) in line_breaks.iter().zip(self.upcoming.iter_mut()) {
            if matches!(*slot, Some(found) if found < start) {
                *slot = text[start..].find(lb.as_str()).map(|pos| start + pos);
            }
        }

        self.upcoming
            .iter()
            .zip(line_breaks)
            .filter_map(|(slot, lb)| slot.map(|pos| (pos, lb.len())))
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
    }
}

impl<'a> Iterator for DisplayLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.position?;
        let text = self.text;
        match self.next_break(start) {
            Some((pos, len)) => {
                self.position = Some(pos + len);
                Some(&text[start..pos])
            }
            None => {
                self.position = None;
                Some(&text[start..])
            }
        }
    }
}

/// Strip every chord and structural marker from `text`.
///
/// # Example
/// ```
/// use chordsheet::{render, Markup};
///
/// let rendered = render("[ch]G[/ch][tab]riff[/tab]\r\nnext line", &Markup::default());
/// let lines: Vec<&str> = rendered.lines().collect();
/// assert_eq!(lines, vec!["Griff", "next line"]);
/// ```
pub fn render(text: &str, markup: &Markup) -> Rendered {
    let markers = [&markup.chords.start, &markup.chords.end]
        .into_iter()
        .chain(markup.strip.iter())
        .filter(|m| !m.is_empty());

    let mut cleaned = text.to_string();
    for marker in markers {
        cleaned = cleaned.replace(marker.as_str(), "");
    }

    Rendered {
        text: cleaned,
        line_breaks: markup.line_breaks.clone(),
    }
}

/// Render a document with its own chord markers and the rest of `markup`
pub fn render_document(doc: &Document, markup: &Markup) -> Rendered {
    let markup = Markup {
        chords: doc.markers.clone(),
        ..markup.clone()
    };
    render(&doc.to_string(), &markup)
}
