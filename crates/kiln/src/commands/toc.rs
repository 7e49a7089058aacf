//! `kiln toc` command implementation.

use std::path::PathBuf;

use clap::Args;
use kiln_meta::split_front_matter;
use kiln_toc::{TocNode, build_toc_tree, extract_headings};

use crate::error::CliError;
use crate::output::{Output, Tone};

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    /// Markdown file to read.
    file: PathBuf,

    /// Print the table of contents as JSON to stdout.
    #[arg(long)]
    json: bool,
}

impl TocArgs {
    /// Execute the toc command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has malformed front matter.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let content = std::fs::read_to_string(&self.file).map_err(|source| CliError::Read {
            path: self.file.clone(),
            source,
        })?;
        let (_, body) = split_front_matter(&content).map_err(|source| CliError::FrontMatter {
            path: self.file.clone(),
            source,
        })?;

        let forest = build_toc_tree(&extract_headings(body));

        if self.json {
            output.data(&serde_json::to_string_pretty(&forest)?);
        } else if forest.is_empty() {
            output.line(Tone::Plain, "No headings found");
        } else {
            for line in render(&forest) {
                output.data(&line);
            }
        }
        Ok(())
    }
}

/// Indented outline, two spaces per nesting depth.
fn render(forest: &[TocNode]) -> Vec<String> {
    fn walk(nodes: &[TocNode], depth: usize, lines: &mut Vec<String>) {
        for node in nodes {
            lines.push(format!(
                "{}- {} (#{})",
                "  ".repeat(depth),
                node.text,
                node.fragment
            ));
            walk(&node.children, depth + 1, lines);
        }
    }

    let mut lines = Vec::new();
    walk(forest, 0, &mut lines);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render() {
        let forest = build_toc_tree(&extract_headings(
            "# Guide\n\n## Install\n\n### From source\n\n## Usage\n",
        ));

        assert_eq!(
            render(&forest),
            vec![
                "- Install (#install)",
                "  - From source (#from-source)",
                "- Usage (#usage)",
            ]
        );
    }
}
