//! Slug normalization.

/// Normalize a slug and join it under an optional prefix.
///
/// Each `/`-separated segment is lowercased; whitespace becomes `-`, ASCII
/// alphanumerics and `-`, `_`, `.` are kept, anything else is dropped.
/// Empty segments disappear, so leading, trailing and doubled slashes
/// collapse.
///
/// # Examples
///
/// ```
/// use kiln_content::safe_slug;
///
/// assert_eq!(safe_slug("jane-doe", Some("authors")), "authors/jane-doe");
/// assert_eq!(safe_slug("/Hello World!/", None), "hello-world");
/// assert_eq!(safe_slug("", Some("posts")), "posts");
/// ```
#[must_use]
pub fn safe_slug(slug: &str, prefix: Option<&str>) -> String {
    let slug = normalize(slug);
    match prefix.map(normalize).filter(|p| !p.is_empty()) {
        Some(prefix) if slug.is_empty() => prefix,
        Some(prefix) => format!("{prefix}/{slug}"),
        None => slug,
    }
}

fn normalize(slug: &str) -> String {
    slug.split('/')
        .map(normalize_segment)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

fn normalize_segment(segment: &str) -> String {
    let mut result = String::with_capacity(segment.len());
    for c in segment.trim().chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
            result.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() && !result.ends_with('-') {
            result.push('-');
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(safe_slug("About-Us", None), "about-us");
    }

    #[test]
    fn test_keeps_nested_segments() {
        assert_eq!(safe_slug("setup/Intro", Some("guides")), "guides/setup/intro");
    }

    #[test]
    fn test_drops_unsafe_characters() {
        assert_eq!(safe_slug("what's new?", None), "whats-new");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(safe_slug("a   b", None), "a-b");
    }

    #[test]
    fn test_collapses_slashes() {
        assert_eq!(safe_slug("//a//b/", None), "a/b");
    }

    #[test]
    fn test_empty_prefix_ignored() {
        assert_eq!(safe_slug("page", Some("")), "page");
    }

    #[test]
    fn test_empty_slug_without_prefix() {
        assert_eq!(safe_slug("", None), "");
    }
}
