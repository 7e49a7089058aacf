//! The normalized content record.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use kiln_meta::{FrontMatter, Mapping};
use serde::Serialize;

/// Language/URL pair for cross-locale link annotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hreflang {
    pub lang: String,
    pub url: String,
}

/// One content item after metadata resolution and filtering.
///
/// A `Material` only exists for items that passed the visibility rule, so
/// `draft` is always `false` for loaded materials. Materials are built once
/// per run and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// File name without extension.
    pub id: String,
    /// Normalized, site-relative slug (prefixed by the collection's prefix).
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Image file name, present only if the file exists in the assets directory.
    pub image: Option<String>,
    pub draft: bool,
    pub publication: DateTime<Utc>,
    pub expiration: Option<DateTime<Utc>>,
    /// Stylesheet includes: auto-detected `style.css` first, then explicit ones.
    pub css: Vec<String>,
    /// Script includes: auto-detected `main.js` first, then explicit ones.
    pub js: Vec<String>,
    /// Template identifier used by the rendering stage.
    pub template: String,
    /// Assets directory name, relative to the item's directory.
    pub assets_path: String,
    pub last_modification: DateTime<Utc>,
    /// Legacy paths that should redirect to this item.
    pub redirects: Vec<String>,
    /// Front matter without reserved keys.
    pub user_defined: Mapping,
    /// Records from the `<id>.data.yaml` companion file.
    pub data: Vec<Mapping>,
    /// Merged front matter (document header plus override file).
    pub front_matter: FrontMatter,
    /// Markdown body without the front matter block.
    pub markdown: String,
    /// Files found in the assets directory, relative to it.
    pub assets: Vec<String>,
    pub noindex: bool,
    pub canonical: Option<String>,
    /// `None` when the key is absent; `Some(vec![])` when declared but empty or invalid.
    pub hreflang: Option<Vec<Hreflang>>,
    /// Directory containing the markdown file.
    pub location: PathBuf,
}

impl Material {
    /// Copy of this material with a different slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
}
