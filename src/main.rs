// src/main.rs
use clap::Parser;
use std::process::ExitCode;

use ctally_engine::config::Config;

mod args;
mod presentation;

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config {
        roots: args.resolve_roots(),
        strict: args.strict,
    };

    match ctally_engine::run(&config) {
        Ok(result) => {
            for (path, err) in &result.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }
            presentation::print_report(&result, args.format);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
