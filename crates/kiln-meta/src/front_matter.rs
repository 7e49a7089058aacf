//! Embedded front matter block handling.
//!
//! A document has front matter when its first line is exactly `---`. The
//! block ends at the next line that is exactly `---`. Documents without an
//! opening delimiter have empty front matter and their whole text is body.

use crate::error::ParseError;
use crate::value::FrontMatter;
use crate::yaml::parse_yaml_map;

const DELIMITER: &str = "---";

/// Split a document into its front matter YAML and its markdown body.
///
/// Returns `(None, document)` when there is no front matter block. A UTF-8
/// byte order mark before the opening delimiter is ignored.
///
/// # Errors
///
/// Returns [`ParseError::Unterminated`] if the opening delimiter has no
/// matching closing line.
pub fn split_front_matter(markdown: &str) -> Result<(Option<&str>, &str), ParseError> {
    let text = markdown.strip_prefix('\u{feff}').unwrap_or(markdown);

    let first_end = text.find('\n').map_or(text.len(), |i| i + 1);
    let (first, rest) = text.split_at(first_end);
    if first.trim_end() != DELIMITER {
        return Ok((None, text));
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Ok((Some(yaml), body));
        }
        offset += line.len();
    }

    Err(ParseError::Unterminated)
}

/// Parse the front matter block of a markdown document.
///
/// Documents without a block (or with an empty one) produce an empty
/// [`FrontMatter`].
///
/// # Errors
///
/// Returns [`ParseError`] if the block is unterminated, is not valid YAML,
/// or its root is not a mapping.
pub fn parse_front_matter(markdown: &str) -> Result<FrontMatter, ParseError> {
    match split_front_matter(markdown)? {
        (Some(yaml), _) => parse_yaml_map(yaml).map(FrontMatter::from),
        (None, _) => Ok(FrontMatter::default()),
    }
}

/// Return the markdown body with the front matter block removed.
///
/// A malformed (unterminated) block is left in place.
#[must_use]
pub fn strip_front_matter(markdown: &str) -> &str {
    match split_front_matter(markdown) {
        Ok((_, body)) => body,
        Err(_) => markdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_front_matter() {
        let doc = "---\ntitle: Hello\n---\n# Heading\n";
        let (yaml, body) = split_front_matter(doc).unwrap();
        assert_eq!(yaml, Some("title: Hello\n"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn test_split_without_front_matter() {
        let doc = "# Heading\n\n---\n\ntext";
        let (yaml, body) = split_front_matter(doc).unwrap();
        assert!(yaml.is_none());
        assert_eq!(body, doc);
    }

    #[test]
    fn test_split_crlf_line_endings() {
        let doc = "---\r\ntitle: Hello\r\n---\r\nBody";
        let (yaml, body) = split_front_matter(doc).unwrap();
        assert_eq!(yaml, Some("title: Hello\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_byte_order_mark() {
        let doc = "\u{feff}---\ntitle: Hello\n---\nBody";
        let (yaml, _) = split_front_matter(doc).unwrap();
        assert_eq!(yaml, Some("title: Hello\n"));
    }

    #[test]
    fn test_split_empty_block() {
        let (yaml, body) = split_front_matter("---\n---\nBody").unwrap();
        assert_eq!(yaml, Some(""));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_unterminated() {
        let err = split_front_matter("---\ntitle: Hello\n# no closing").unwrap_err();
        assert!(matches!(err, ParseError::Unterminated));
    }

    #[test]
    fn test_parse_front_matter_values() {
        let doc = "---\ntitle: Hello\ndraft: false\ncss:\n  - a.css\n---\nBody";
        let front = parse_front_matter(doc).unwrap();
        assert_eq!(front.string("title"), Some("Hello"));
        assert_eq!(front.bool("draft"), Some(false));
        assert_eq!(front.string_list("css"), Some(vec!["a.css".to_owned()]));
    }

    #[test]
    fn test_parse_front_matter_absent_is_empty() {
        let front = parse_front_matter("# Just markdown").unwrap();
        assert!(front.is_empty());
    }

    #[test]
    fn test_parse_front_matter_malformed() {
        let doc = "---\ntitle: [broken\n---\nBody";
        assert!(matches!(
            parse_front_matter(doc),
            Err(ParseError::Syntax(_))
        ));
    }

    #[test]
    fn test_parse_front_matter_scalar_root() {
        let doc = "---\njust a string\n---\nBody";
        assert!(matches!(
            parse_front_matter(doc),
            Err(ParseError::Shape { .. })
        ));
    }

    #[test]
    fn test_strip_front_matter() {
        assert_eq!(strip_front_matter("---\na: 1\n---\n\nBody"), "Body");
        assert_eq!(strip_front_matter("Body only"), "Body only");
    }

    #[test]
    fn test_strip_unterminated_keeps_document() {
        let doc = "---\na: 1\nBody";
        assert_eq!(strip_front_matter(doc), doc);
    }
}
