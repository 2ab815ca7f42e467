//! HTML markup stripping.

use annotext::provider::MarkupStripper;
use scraper::Html;

/// Extracts visible text from HTML, joining text nodes with single spaces.
pub struct HtmlStripper;

impl HtmlStripper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupStripper for HtmlStripper {
    fn strip(&self, content: &str) -> String {
        let document = Html::parse_document(content);
        let mut parts = Vec::new();
        for text in document.root_element().text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }
        // Collapse internal whitespace so offsets are stable across
        // reformatted markup.
        parts
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        let stripper = HtmlStripper::new();
        assert_eq!(stripper.strip("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_collapses_whitespace() {
        let stripper = HtmlStripper::new();
        let text = stripper.strip("<div>\n  one\n  <span>two</span>\n</div>");
        assert_eq!(text, "one two");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let stripper = HtmlStripper::new();
        assert_eq!(stripper.strip("just text"), "just text");
    }

    #[test]
    fn test_empty_input() {
        let stripper = HtmlStripper::new();
        assert_eq!(stripper.strip(""), "");
    }
}
