//! `kiln load` command implementation.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use kiln_config::{CliSettings, Config};
use kiln_content::{ContentLoader, MaterialsTree};

use crate::error::CliError;
use crate::output::{Output, Tone};

/// Arguments for the load command.
#[derive(Args)]
pub(crate) struct LoadArgs {
    /// Path to configuration file (default: auto-discover kiln.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Format of publication and expiration dates (overrides config).
    #[arg(long)]
    date_format: Option<String>,

    /// Only list files directly inside asset directories.
    #[arg(long)]
    no_recursive_assets: bool,

    /// Clock for visibility decisions, RFC 3339 (default: current time).
    #[arg(long, env = "KILN_NOW")]
    now: Option<DateTime<Utc>>,

    /// Print the content tree as JSON to stdout.
    #[arg(long)]
    json: bool,

    /// Enable verbose output (show per-load timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl LoadArgs {
    /// Execute the load command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or a required page cannot be loaded.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            date_format: self.date_format,
            recursive_assets: self.no_recursive_assets.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let now = self.now.unwrap_or_else(Utc::now);
        tracing::debug!(config = ?config.config_path, %now, "Loading content");

        let tree = ContentLoader::new(&config, now).load()?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&tree)?);
        } else {
            output.line(Tone::Heading, &format!(
                "Content directory: {}",
                config.source_resolved.contents_dir.display()
            ));
            for line in summary(&tree) {
                output.line(Tone::Plain, &line);
            }
        }

        for diagnostic in tree.diagnostics() {
            output.line(Tone::Warning, &format!("Skipped: {}", diagnostic.error));
        }
        output.line(Tone::Success, &format!("Loaded {} materials", tree.material_count()));
        Ok(())
    }
}

/// Human-readable summary: overview pages found and per-collection counts.
fn summary(tree: &MaterialsTree) -> Vec<String> {
    let overview: Vec<&str> = tree
        .overview_pages()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    let mut lines = vec![if overview.is_empty() {
        "Overview pages: none".to_owned()
    } else {
        format!("Overview pages: {}", overview.join(", "))
    }];
    lines.extend(tree.collections().into_iter().map(|(name, loaded)| {
        match loaded.diagnostics.len() {
            0 => format!("  {name}: {}", loaded.len()),
            dropped => format!("  {name}: {} ({dropped} skipped)", loaded.len()),
        }
    }));
    lines
}
