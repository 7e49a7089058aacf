//! Filesystem discovery for markdown files and asset directories.
//!
//! Hidden entries (names starting with `.`) are skipped. Results are sorted
//! so that discovery order is stable across runs and platforms.

use std::fs;
use std::path::{Path, PathBuf};

/// Markdown file extensions recognized as content.
pub(crate) const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Check if a path has a markdown extension.
pub(crate) fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.iter().any(|m| ext == *m))
}

/// Find every markdown file under `root`, recursively.
///
/// Returns an empty list if `root` does not exist. Unreadable nested
/// directories are skipped with a warning.
///
/// # Errors
///
/// Returns the I/O error if `root` exists but cannot be read.
pub(crate) fn scan_markdown(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    walk(root, true, &mut files)?;
    files.retain(|path| is_markdown(path));
    files.sort();
    Ok(files)
}

/// List files under an assets directory as `/`-joined relative paths.
///
/// Returns an empty list if the directory does not exist or cannot be read.
pub(crate) fn list_assets(dir: &Path, recursive: bool) -> Vec<String> {
    let mut files = Vec::new();
    if walk(dir, recursive, &mut files).is_err() {
        return Vec::new();
    }
    let mut assets: Vec<String> = files
        .iter()
        .filter_map(|path| path.strip_prefix(dir).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    assets.sort();
    assets
}

/// Collect non-hidden files under `dir`.
///
/// Only an error reading `dir` itself is returned; nested directories that
/// cannot be read are logged and skipped.
fn walk(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)?.filter_map(Result::ok) {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if !is_dir {
            files.push(path);
        } else if recursive
            && let Err(err) = walk(&path, true, files)
        {
            tracing::warn!(path = %path.display(), %err, "Skipping unreadable directory");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("a.md")));
        assert!(is_markdown(Path::new("a.markdown")));
        assert!(!is_markdown(Path::new("a.yaml")));
        assert!(!is_markdown(Path::new("md")));
    }

    #[test]
    fn test_scan_finds_nested_markdown_sorted() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("b.md"), "# B").unwrap();
        fs::write(root.join("a.markdown"), "# A").unwrap();
        fs::write(root.join("nested/c.md"), "# C").unwrap();
        fs::write(root.join("b.yaml"), "title: B").unwrap();

        let files = scan_markdown(root).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("a.markdown"),
                PathBuf::from("b.md"),
                PathBuf::from("nested/c.md"),
            ]
        );
    }

    #[test]
    fn test_scan_skips_hidden() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join(".hidden.md"), "# Hidden").unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::write(temp_dir.path().join(".git/x.md"), "# X").unwrap();
        fs::write(temp_dir.path().join("visible.md"), "# Visible").unwrap();

        let files = scan_markdown(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("visible.md"));
    }

    #[test]
    fn test_scan_missing_dir() {
        let files = scan_markdown(Path::new("/nonexistent/kiln/content")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_assets_recursive() {
        let temp_dir = create_test_dir();
        let dir = temp_dir.path();
        fs::create_dir(dir.join("img")).unwrap();
        fs::write(dir.join("style.css"), "").unwrap();
        fs::write(dir.join("img/cover.png"), "").unwrap();

        assert_eq!(
            list_assets(dir, true),
            vec!["img/cover.png".to_owned(), "style.css".to_owned()]
        );
        assert_eq!(list_assets(dir, false), vec!["style.css".to_owned()]);
    }

    #[test]
    fn test_list_assets_missing_dir() {
        assert!(list_assets(Path::new("/nonexistent/assets"), true).is_empty());
    }
}
