//! Error types for content loading.

use std::path::PathBuf;

use kiln_meta::ParseError;

/// Error assembling a single material.
///
/// Always names the file that caused it.
#[derive(Debug, thiserror::Error)]
pub enum MaterialError {
    /// A file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Front matter, override or data file could not be parsed.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl MaterialError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// File the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Fatal error aborting a whole content load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A required singleton page does not exist or is not visible.
    #[error(
        "Required {name} page not found: expected {}.md or .markdown to exist and be published",
        .path.display()
    )]
    MissingRequiredPage { name: &'static str, path: PathBuf },

    /// A required singleton page exists but could not be assembled.
    #[error("Required {name} page could not be loaded: {source}")]
    RequiredPage {
        name: &'static str,
        #[source]
        source: MaterialError,
    },
}
