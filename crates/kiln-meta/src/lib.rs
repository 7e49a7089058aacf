//! Front matter and YAML metadata parsing for kiln.
//!
//! Markdown documents carry a metadata header delimited by `---` lines.
//! Each content item may also have a companion `<id>.yaml` override and an
//! `<id>.data.yaml` record list. This crate parses all three into
//! [`FrontMatter`] values (a YAML mapping with typed accessors) and
//! implements the recursive merge used to layer overrides on top of the
//! embedded header.
//!
//! # Example
//!
//! ```
//! use kiln_meta::{FrontMatter, parse_front_matter};
//!
//! let doc = "---\ntitle: Hello\nassets:\n  path: hello-assets\n---\n# Body\n";
//! let front = parse_front_matter(doc).unwrap();
//! assert_eq!(front.string("title"), Some("Hello"));
//! assert_eq!(front.string("assets.path"), Some("hello-assets"));
//!
//! let merged = front.merged(FrontMatter::from_yaml("title: Override").unwrap());
//! assert_eq!(merged.string("title"), Some("Override"));
//! ```

mod error;
mod front_matter;
mod value;
mod yaml;

pub use error::ParseError;
pub use front_matter::{parse_front_matter, split_front_matter, strip_front_matter};
pub use value::FrontMatter;
pub use yaml::{parse_records, parse_yaml_map};

/// Re-exported YAML types used in [`FrontMatter`] and data records.
pub use serde_yaml::{Mapping, Value};
