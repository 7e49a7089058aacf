//! Table of contents extraction for kiln.
//!
//! [`HeadingVisitor`] consumes a pulldown-cmark event stream and records the
//! level 2 and 3 headings in document order; [`build_toc_tree`] folds that
//! flat list into a nested forest for navigation.
//!
//! ```
//! use kiln_toc::{build_toc_tree, extract_headings};
//!
//! let entries = extract_headings("# Title\n\n## Install\n\n### From source\n\n## Usage\n");
//! let forest = build_toc_tree(&entries);
//!
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest[0].fragment, "install");
//! assert_eq!(forest[0].children[0].text, "From source");
//! ```
//!
//! Enable the `serde` feature to serialize entries and nodes.

mod tree;
mod visitor;

pub use tree::{TocNode, build_toc_tree};
pub use visitor::{HeadingVisitor, TocEntry, extract_headings, fragment};
