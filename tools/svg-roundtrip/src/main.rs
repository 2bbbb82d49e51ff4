//! Round-trip check harness for the VectorKit SVG codec.
//!
//! Provides commands for:
//! - Checking that a single file parses and re-serializes cleanly
//! - Sweeping a directory of SVG files and reporting failures
//!
//! ## Usage
//!
//! ```bash
//! # Parse one file, print a summary, optionally write the re-serialized form
//! svg-roundtrip check input.svg --output out.svg
//!
//! # Parse every .svg below a directory
//! svg-roundtrip bulk fixtures/
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::warn;
use vectorkit_svg::{SvgDocument, SvgElement};

#[derive(Parser)]
#[command(name = "svg-roundtrip")]
#[command(about = "Round-trip check harness for the VectorKit SVG codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one SVG file and report what the model retained
    Check {
        /// Input SVG file
        input: PathBuf,
        /// Write the re-serialized document here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse every .svg file below a directory
    Bulk {
        /// Directory to sweep
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Commands::Check { input, output } => check(&input, output.as_deref()),
        Commands::Bulk { dir } => bulk(&dir),
    }
}

fn check(input: &Path, output: Option<&Path>) -> Result<()> {
    let doc = SvgDocument::read(input)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    println!(
        "{}: {}x{}, {} top-level elements ({} total)",
        input.display(),
        doc.width,
        doc.height,
        doc.elements.len(),
        count_elements(&doc.elements),
    );

    // A stable document must survive its own output.
    let reparsed = SvgDocument::parse(&doc.to_svg_string())
        .context("re-parse of serialized output failed")?;
    if reparsed != doc {
        warn!("document changed across a serialize/parse cycle");
    }

    if let Some(path) = output {
        doc.write(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn bulk(dir: &Path) -> Result<()> {
    let mut total = 0usize;
    let mut failed = 0usize;
    sweep(dir, &mut |path| {
        total += 1;
        if let Err(err) = SvgDocument::read(path) {
            failed += 1;
            println!("FAIL {}: {err}", path.display());
        }
    })?;
    println!("{total} files, {failed} failures");
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn sweep(dir: &Path, visit: &mut impl FnMut(&Path)) -> Result<()> {
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            sweep(&path, visit)?;
        } else if path.extension().is_some_and(|ext| ext == "svg") {
            visit(&path);
        }
    }
    Ok(())
}

fn count_elements(elements: &[SvgElement]) -> usize {
    elements
        .iter()
        .map(|el| 1 + el.children().map_or(0, |c| count_elements(c)))
        .sum()
}
