//! Loading of every configured page and collection into a [`MaterialsTree`].

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use kiln_config::{CollectionConfig, CollectionsConfig, Config, PagesConfig};

use crate::assembler::MaterialAssembler;
use crate::assets::scan_markdown;
use crate::context::LoadContext;
use crate::error::{LoadError, MaterialError};
use crate::material::Material;
use crate::tree::{
    Blog, BlogPages, Diagnostic, Docs, DocsPages, Loaded, MainPages, MaterialsTree, Pages,
};

/// Runs the [`MaterialAssembler`] over a site's content layout.
///
/// The home and not-found pages are required: if either is missing, hidden
/// or broken the whole load fails. Overview pages are optional. Collection
/// items that fail to assemble are dropped and reported as [`Diagnostic`]s.
pub struct ContentLoader<'a> {
    contents_dir: PathBuf,
    pages: &'a PagesConfig,
    collections: &'a CollectionsConfig,
    context: LoadContext,
}

impl<'a> ContentLoader<'a> {
    /// Create a loader for a resolved configuration, with `now` as the run's clock.
    #[must_use]
    pub fn new(config: &'a Config, now: DateTime<Utc>) -> Self {
        Self::with_layout(
            &config.source_resolved.contents_dir,
            &config.pages,
            &config.collections,
            LoadContext::from_config(&config.source_resolved, now),
        )
    }

    /// Create a loader for an explicit content root and layout.
    #[must_use]
    pub fn with_layout(
        contents_dir: impl Into<PathBuf>,
        pages: &'a PagesConfig,
        collections: &'a CollectionsConfig,
        context: LoadContext,
    ) -> Self {
        Self {
            contents_dir: contents_dir.into(),
            pages,
            collections,
            context,
        }
    }

    #[must_use]
    pub fn context(&self) -> &LoadContext {
        &self.context
    }

    /// Load the full content tree.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the home or not-found page is missing or
    /// fails to assemble. Unreadable collection folders are reported as
    /// diagnostics.
    pub fn load(&self) -> Result<MaterialsTree, LoadError> {
        let start = Instant::now();
        let assembler = MaterialAssembler::new(&self.context);
        let pages = self.pages;
        let collections = self.collections;

        let main = MainPages {
            home: self.required(&assembler, "home", &pages.home, "main.home")?.with_slug(""),
            not_found: self
                .required(&assembler, "not-found", &pages.not_found, "main.404")?
                .with_slug("404"),
        };

        let mut page_diagnostics = Vec::new();
        let mut optional =
            |page: &str, template: &str| self.optional(&assembler, page, template, &mut page_diagnostics);
        let blog_pages = BlogPages {
            home: optional(pages.blog_home.as_str(), "blog.home"),
            authors: optional(pages.blog_authors.as_str(), "blog.authors"),
            tags: optional(pages.blog_tags.as_str(), "blog.tags"),
            posts: optional(pages.blog_posts.as_str(), "blog.posts"),
        };
        let docs_pages = DocsPages {
            home: optional(pages.docs_home.as_str(), "docs.home"),
            categories: optional(pages.docs_categories.as_str(), "docs.categories"),
            guides: optional(pages.docs_guides.as_str(), "docs.guides"),
        };

        let tree = MaterialsTree {
            pages: Pages {
                main,
                blog: blog_pages,
                docs: docs_pages,
                custom: self.collection(&assembler, &collections.custom, "pages.single.page"),
            },
            blog: Blog {
                authors: self.collection(&assembler, &collections.authors, "blog.single.author"),
                tags: self.collection(&assembler, &collections.tags, "blog.single.tag"),
                posts: self.collection(&assembler, &collections.posts, "blog.single.post"),
            },
            docs: Docs {
                categories: self.collection(
                    &assembler,
                    &collections.categories,
                    "docs.single.category",
                ),
                guides: self.collection(&assembler, &collections.guides, "docs.single.guide"),
            },
            page_diagnostics,
        };

        tracing::info!(
            materials = tree.material_count(),
            dropped = tree.diagnostics().count(),
            elapsed_ms = elapsed_ms(start),
            "Loaded content"
        );
        Ok(tree)
    }

    /// `<contents>/<page>.md` if it exists, else `<contents>/<page>.markdown`.
    fn markdown_path(&self, page: &str) -> PathBuf {
        let md = self.contents_dir.join(format!("{page}.md"));
        if md.is_file() {
            md
        } else {
            self.contents_dir.join(format!("{page}.markdown"))
        }
    }

    fn required(
        &self,
        assembler: &MaterialAssembler<'_>,
        name: &'static str,
        page: &str,
        template: &str,
    ) -> Result<Material, LoadError> {
        let path = self.markdown_path(page);
        match assembler.assemble(&path, page_root(&path), None, template) {
            Ok(Some(material)) => Ok(material),
            Ok(None) => Err(LoadError::MissingRequiredPage {
                name,
                path: self.contents_dir.join(page),
            }),
            Err(source) => Err(LoadError::RequiredPage { name, source }),
        }
    }

    fn optional(
        &self,
        assembler: &MaterialAssembler<'_>,
        page: &str,
        template: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<Material> {
        let path = self.markdown_path(page);
        match assembler.assemble(&path, page_root(&path), None, template) {
            Ok(material) => material,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Skipping overview page");
                diagnostics.push(Diagnostic { path, error });
                None
            }
        }
    }

    fn collection(
        &self,
        assembler: &MaterialAssembler<'_>,
        collection: &CollectionConfig,
        template: &str,
    ) -> Loaded<Material> {
        let root = self.contents_dir.join(&collection.folder);
        let mut loaded = Loaded::default();
        let files = match scan_markdown(&root) {
            Ok(files) => files,
            Err(source) => {
                let error = MaterialError::io(&root, source);
                tracing::warn!(path = %root.display(), %error, "Skipping unreadable collection");
                loaded.diagnostics.push(Diagnostic { path: root, error });
                return loaded;
            }
        };

        for file in files {
            match assembler.assemble(&file, &root, collection.slug_prefix.as_deref(), template) {
                Ok(Some(material)) => loaded.items.push(material),
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(path = %file.display(), %error, "Dropping content item");
                    loaded.diagnostics.push(Diagnostic { path: file, error });
                }
            }
        }
        tracing::debug!(
            folder = %collection.folder,
            items = loaded.len(),
            dropped = loaded.diagnostics.len(),
            "Loaded collection"
        );
        loaded
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Singleton pages are their own category root, so their default slug is their id.
fn page_root(path: &Path) -> &Path {
    path.parent().unwrap_or(path)
}
