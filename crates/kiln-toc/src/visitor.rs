//! Heading extraction from a parsed markdown event stream.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Heading levels that appear in navigation. Level 1 is the page title.
const TOC_LEVELS: [u8; 2] = [2, 3];

/// A heading eligible for the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level.
    pub level: u8,
    /// Plain text of the heading's inline content.
    pub text: String,
    /// Anchor derived from `text`.
    pub fragment: String,
}

/// Collects level 2 and 3 headings from pulldown-cmark events.
///
/// Events arrive in depth-first pre-order, so headings nested inside list
/// items or block quotes are found in document order without any special
/// handling. Inline formatting inside a heading is flattened to its text.
#[derive(Debug, Default)]
pub struct HeadingVisitor {
    /// Level and text buffer of the heading being read, if eligible.
    current: Option<(u8, String)>,
    entries: Vec<TocEntry>,
}

impl HeadingVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event.
    pub fn visit(&mut self, event: &Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let level = heading_level_to_num(*level);
                self.current = TOC_LEVELS
                    .contains(&level)
                    .then(|| (level, String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = self.current.take() {
                    let text = text.trim().to_owned();
                    self.entries.push(TocEntry {
                        level,
                        fragment: fragment(&text),
                        text,
                    });
                }
            }
            Event::Text(text) | Event::Code(text) => self.push_text(text),
            Event::SoftBreak | Event::HardBreak => self.push_text(" "),
            _ => {}
        }
    }

    /// Feed every event of an iterator.
    pub fn visit_all<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        for event in events {
            self.visit(&event);
        }
    }

    /// Entries collected so far, in document order.
    #[must_use]
    pub fn finish(self) -> Vec<TocEntry> {
        self.entries
    }

    fn push_text(&mut self, text: &str) {
        if let Some((_, buffer)) = &mut self.current {
            buffer.push_str(text);
        }
    }
}

/// Parse `markdown` and return its table of contents entries.
///
/// The input must not contain front matter.
#[must_use]
pub fn extract_headings(markdown: &str) -> Vec<TocEntry> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;
    let mut visitor = HeadingVisitor::new();
    visitor.visit_all(Parser::new_ext(markdown, options));
    visitor.finish()
}

/// Convert heading text to an anchor fragment.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-` and trims dashes from both ends.
#[must_use]
pub fn fragment(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(level: u8, text: &str, fragment: &str) -> TocEntry {
        TocEntry {
            level,
            text: text.to_owned(),
            fragment: fragment.to_owned(),
        }
    }

    #[test]
    fn test_fragment() {
        assert_eq!(fragment("Hello World"), "hello-world");
        assert_eq!(fragment("What's New?"), "what-s-new");
        assert_eq!(fragment("  --Spaces--  "), "spaces");
        assert_eq!(fragment("snake_case and kebab-case"), "snake-case-and-kebab-case");
        assert_eq!(fragment("v1.2 Release"), "v1-2-release");
        assert_eq!(fragment("!!!"), "");
    }

    #[test]
    fn test_only_levels_two_and_three() {
        let entries = extract_headings("# Title\n\n## Two\n\n### Three\n\n#### Four\n\n##### Five\n");

        assert_eq!(entries, vec![entry(2, "Two", "two"), entry(3, "Three", "three")]);
    }

    #[test]
    fn test_inline_formatting_is_flattened() {
        let entries = extract_headings("## Using `cargo` with **care**\n");

        assert_eq!(
            entries,
            vec![entry(2, "Using cargo with care", "using-cargo-with-care")]
        );
    }

    #[test]
    fn test_setext_headings() {
        let entries = extract_headings("Title\n=====\n\nSection\n-------\n");

        assert_eq!(entries, vec![entry(2, "Section", "section")]);
    }

    #[test]
    fn test_headings_inside_containers() {
        let markdown = "- item\n\n  ## In List\n\n> ### In Quote\n\n## After\n";

        let entries = extract_headings(markdown);

        assert_eq!(
            entries,
            vec![
                entry(2, "In List", "in-list"),
                entry(3, "In Quote", "in-quote"),
                entry(2, "After", "after"),
            ]
        );
    }

    #[test]
    fn test_heading_attributes_are_not_text() {
        let entries = extract_headings("## Custom {#anchor}\n");

        assert_eq!(entries, vec![entry(2, "Custom", "custom")]);
    }

    #[test]
    fn test_text_outside_headings_ignored() {
        let entries = extract_headings("Intro paragraph.\n\n## Only\n\nBody text.\n");

        assert_eq!(entries, vec![entry(2, "Only", "only")]);
    }

    #[test]
    fn test_visitor_accepts_events() {
        let mut visitor = HeadingVisitor::new();
        for event in Parser::new("### Deep\n") {
            visitor.visit(&event);
        }

        assert_eq!(visitor.finish(), vec![entry(3, "Deep", "deep")]);
    }
}
