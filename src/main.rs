//! Phone extraction CLI.
//!
//! Thin wrapper over the phonedig library: reads a text file (or stdin),
//! loads the area code registry, and prints one extracted number per line.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use phonedig::{AreaCodeRegistry, PhoneExtractor};

/// Extract obfuscated phone numbers from noisy text.
#[derive(Parser)]
#[command(name = "phonedig")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input text file (reads standard input when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Area code table (tab-separated, one record per code)
    #[arg(short, long, value_name = "FILE", default_value = "area_code.tsv")]
    area_codes: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let registry = AreaCodeRegistry::load(&cli.area_codes)
        .with_context(|| format!("failed to load area codes from {}", cli.area_codes.display()))?;
    let text = read_input(cli.input.as_ref())?;

    if cli.verbose {
        eprintln!("Area codes: {}", registry.len());
        eprintln!("Input: {} characters", text.chars().count());
    }

    let extractor = PhoneExtractor::new(&registry);
    let numbers = extractor.extract(&text);

    if cli.verbose {
        eprintln!("Found: {} number(s)", numbers.len());
    }

    for number in &numbers {
        println!("{number}");
    }

    Ok(())
}
