//! CLI error types.

use std::path::PathBuf;

use kiln_config::ConfigError;
use kiln_content::LoadError;
use kiln_meta::ParseError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front matter in {}: {source}", .path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
