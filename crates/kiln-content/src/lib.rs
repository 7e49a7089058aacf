//! Content ingestion for kiln.
//!
//! Turns a directory tree of markdown files and companion YAML files into a
//! [`MaterialsTree`]: one normalized [`Material`] per visible content item,
//! grouped into singleton pages and repeated collections.
//!
//! # Architecture
//!
//! - [`ItemPath`] derives an item's id, default slug and directory from its
//!   location under a category root.
//! - [`Schedule`] decides visibility from `draft`, `publication` and
//!   `expiration` against the run's fixed clock in [`LoadContext`].
//! - [`MaterialAssembler`] resolves one markdown file into a [`Material`],
//!   layering `<id>.yaml` overrides on top of the embedded front matter.
//! - [`ContentLoader`] runs the assembler over every configured page and
//!   collection. Collection items that fail are dropped and reported as
//!   [`Diagnostic`]s; failures of the required home and not-found pages
//!   abort the load with a [`LoadError`].
//!
//! # Example
//!
//! ```ignore
//! use chrono::Utc;
//! use kiln_config::Config;
//! use kiln_content::ContentLoader;
//!
//! let config = Config::load(None, None)?;
//! let tree = ContentLoader::new(&config, Utc::now()).load()?;
//! println!("{} posts", tree.blog.posts.items.len());
//! ```

mod assembler;
mod assets;
mod context;
mod error;
mod loader;
mod material;
mod path;
mod schedule;
mod slug;
mod tree;

pub use assembler::MaterialAssembler;
pub use context::LoadContext;
pub use error::{LoadError, MaterialError};
pub use loader::ContentLoader;
pub use material::{Hreflang, Material};
pub use path::ItemPath;
pub use schedule::{DateFormatError, Schedule, Visibility, parse_date};
pub use slug::safe_slug;
pub use tree::{
    Blog, BlogPages, Diagnostic, Docs, DocsPages, Loaded, MainPages, MaterialsTree, Pages,
};
