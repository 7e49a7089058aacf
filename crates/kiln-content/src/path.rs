//! Item identity derived from file location.

use std::path::{Path, PathBuf};

/// Identity of a content item derived from its path under a category root.
///
/// # Examples
///
/// | File | Root | `id` | `default_slug` |
/// |------|------|------|----------------|
/// | `blog/authors/jane-doe.md` | `blog/authors` | `jane-doe` | `jane-doe` |
/// | `docs/guides/setup/intro.md` | `docs/guides` | `intro` | `setup/intro` |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemPath {
    /// File name without its last extension.
    pub id: String,
    /// Path relative to the root, `/`-joined, last extension removed.
    pub default_slug: String,
    /// Directory containing the file.
    pub dir: PathBuf,
}

impl ItemPath {
    /// Derive identity for `file` under `root`. Pure, no I/O.
    ///
    /// Files outside `root` fall back to using the id as default slug.
    #[must_use]
    pub fn resolve(file: &Path, root: &Path) -> Self {
        let id = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let default_slug = file
            .strip_prefix(root)
            .ok()
            .map(|rel| relative_slug(&rel.with_extension("")))
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| id.clone());

        let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();

        Self {
            id,
            default_slug,
            dir,
        }
    }
}

/// Join path components with `/` regardless of platform separator.
fn relative_slug(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
