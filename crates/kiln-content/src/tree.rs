//! The aggregate content model produced by one load.

use std::fmt::Display;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::error::MaterialError;
use crate::material::Material;

/// A content item, or a whole collection folder, dropped during loading.
#[derive(Debug, Serialize)]
pub struct Diagnostic {
    /// Markdown file of the dropped item, or the unreadable collection folder.
    pub path: PathBuf,
    /// Why it was dropped. Serialized as its display message.
    #[serde(serialize_with = "serialize_display")]
    pub error: MaterialError,
}

fn serialize_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Result of scanning one collection: the surviving items in discovery order
/// and the items that failed to assemble.
#[derive(Debug, Serialize)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

impl<T> Loaded<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Required site-wide pages.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainPages {
    /// Home page, slug `""`.
    pub home: Material,
    /// Not-found page, slug `"404"`.
    pub not_found: Material,
}

/// Optional blog overview pages.
#[derive(Debug, Default, Serialize)]
pub struct BlogPages {
    pub home: Option<Material>,
    pub authors: Option<Material>,
    pub tags: Option<Material>,
    pub posts: Option<Material>,
}

/// Optional documentation overview pages.
#[derive(Debug, Default, Serialize)]
pub struct DocsPages {
    pub home: Option<Material>,
    pub categories: Option<Material>,
    pub guides: Option<Material>,
}

/// Singleton pages plus free-standing custom pages.
#[derive(Debug, Serialize)]
pub struct Pages {
    pub main: MainPages,
    pub blog: BlogPages,
    pub docs: DocsPages,
    pub custom: Loaded<Material>,
}

#[derive(Debug, Default, Serialize)]
pub struct Blog {
    pub authors: Loaded<Material>,
    pub tags: Loaded<Material>,
    pub posts: Loaded<Material>,
}

#[derive(Debug, Default, Serialize)]
pub struct Docs {
    pub categories: Loaded<Material>,
    pub guides: Loaded<Material>,
}

/// Every visible content item of a site, grouped by role.
///
/// Built by a single [`ContentLoader::load`](crate::ContentLoader::load) call
/// and read-only afterwards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsTree {
    pub pages: Pages,
    pub blog: Blog,
    pub docs: Docs,
    /// Optional overview pages that exist but failed to assemble.
    pub page_diagnostics: Vec<Diagnostic>,
}

impl MaterialsTree {
    /// Collections in a fixed order, keyed by name.
    #[must_use]
    pub fn collections(&self) -> [(&'static str, &Loaded<Material>); 6] {
        [
            ("custom", &self.pages.custom),
            ("authors", &self.blog.authors),
            ("tags", &self.blog.tags),
            ("posts", &self.blog.posts),
            ("categories", &self.docs.categories),
            ("guides", &self.docs.guides),
        ]
    }

    /// Overview pages that were found, keyed by name.
    #[must_use]
    pub fn overview_pages(&self) -> Vec<(&'static str, &Material)> {
        let blog = &self.pages.blog;
        let docs = &self.pages.docs;
        [
            ("blog_home", blog.home.as_ref()),
            ("blog_authors", blog.authors.as_ref()),
            ("blog_tags", blog.tags.as_ref()),
            ("blog_posts", blog.posts.as_ref()),
            ("docs_home", docs.home.as_ref()),
            ("docs_categories", docs.categories.as_ref()),
            ("docs_guides", docs.guides.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, page)| page.map(|page| (name, page)))
        .collect()
    }

    /// All dropped items: failed overview pages first, then collections in
    /// [`collections`](Self::collections) order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.page_diagnostics.iter().chain(
            self.collections()
                .into_iter()
                .flat_map(|(_, loaded)| loaded.diagnostics.iter()),
        )
    }

    /// Number of materials in the tree, singleton pages included.
    #[must_use]
    pub fn material_count(&self) -> usize {
        let collections: usize = self.collections().iter().map(|(_, loaded)| loaded.len()).sum();
        2 + self.overview_pages().len() + collections
    }
}
