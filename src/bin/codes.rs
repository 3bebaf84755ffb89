// src/bin/codes.rs
//! Token extractor: prints the first 16-character uppercase-alphanumeric
//! code found in each line of the input file.

use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

const CODE_PATTERN: &str = "[A-Z0-9]{16}";

#[derive(Parser, Debug)]
#[command(
    name = "codes",
    version,
    about = "Extract 16-character uppercase-alphanumeric codes from a file"
)]
struct Args {
    /// File to scan
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let re = Regex::new(CODE_PATTERN)?;

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open '{}'", args.file.display()))?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line =
            line.with_context(|| format!("Failed to read '{}'", args.file.display()))?;
        // One search per line: only the first match is reported.
        if let Some(m) = re.find(&line) {
            println!("{}", m.as_str());
        }
    }

    Ok(())
}
