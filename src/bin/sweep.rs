// src/bin/sweep.rs
//! Recursive file lister/deleter.
//!
//! Writes every file path under DIR to a list file, printing each one,
//! then deletes every listed file. Deletion failures are ignored and
//! directory entries are skipped, so a partially cleaned tree never stops
//! the sweep.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "sweep",
    version,
    about = "List every file under DIR into a list file, then delete them all"
)]
struct Args {
    /// Directory to sweep
    dir: PathBuf,

    /// List files without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,

    /// Where to write the file list
    #[arg(long, default_value = "list.rm")]
    list_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let listed = write_list(&args.dir, &args.list_file)?;
    if args.dry_run {
        eprintln!("Dry run: {listed} files listed in {}", args.list_file.display());
        return Ok(());
    }

    if !args.yes && !confirm(&args.dir, listed)? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let deleted = delete_listed(&args.list_file)?;
    eprintln!("Deleted {deleted} of {listed} listed files");
    Ok(())
}

/// Walk `dir` depth-first and record every file (never directories) in the
/// list file, echoing each path to stdout as it is found.
fn write_list(dir: &Path, list_file: &Path) -> Result<usize> {
    let file = File::create(list_file)
        .with_context(|| format!("Failed to create list file '{}'", list_file.display()))?;
    let mut writer = BufWriter::new(file);

    let mut listed = 0;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk directory '{}'", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path().display();
        println!("{path}");
        writeln!(writer, "{path}")
            .with_context(|| format!("Failed to write '{}'", list_file.display()))?;
        listed += 1;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write '{}'", list_file.display()))?;
    Ok(listed)
}

fn confirm(dir: &Path, listed: usize) -> Result<bool> {
    eprint!(
        "Delete {listed} files under '{}'? [y/N] ",
        dir.display()
    );
    std::io::stderr().flush().ok();

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Re-open the list file and remove every listed path. Entries that are
/// directories are skipped; removal failures (already gone, permission
/// denied) are ignored.
fn delete_listed(list_file: &Path) -> Result<usize> {
    let file = File::open(list_file)
        .with_context(|| format!("Failed to open list file '{}'", list_file.display()))?;
    let reader = BufReader::new(file);

    let mut deleted = 0;
    for line in reader.lines() {
        let line =
            line.with_context(|| format!("Failed to read '{}'", list_file.display()))?;
        let path = Path::new(line.trim());
        if path.as_os_str().is_empty() || path.is_dir() {
            continue;
        }
        if fs::remove_file(path).is_ok() {
            deleted += 1;
        }
    }
    Ok(deleted)
}
