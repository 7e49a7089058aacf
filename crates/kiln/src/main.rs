//! kiln CLI - Static site content pipeline.
//!
//! Provides commands for:
//! - `load`: Load the content tree and print a summary or JSON
//! - `toc`: Print the table of contents of a markdown file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LoadArgs, TocArgs};
use output::{Output, Tone};

/// kiln - Static site content pipeline.
#[derive(Parser)]
#[command(name = "kiln", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load all content and report what was found.
    Load(LoadArgs),
    /// Print the table of contents of a markdown file.
    Toc(TocArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Load(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Load(args) => args.execute(&output),
        Commands::Toc(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.line(Tone::Error, &format!("Error: {err}"));
        std::process::exit(1);
    }
}
