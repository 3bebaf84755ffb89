// src/presentation.rs
use ctally_engine::RunResult;

use crate::args::OutputFormat;

pub fn print_report(result: &RunResult, format: OutputFormat) {
    match format {
        OutputFormat::Table => print_table(result),
        OutputFormat::Json => print_json(result),
    }
}

/// Header plus one row of four left-justified integers, minimum field
/// width 8, order total/blank/comment/code.
fn print_table(result: &RunResult) {
    let c = result.counts;
    println!("{:<8} {:<8} {:<8} {:<8}", "total", "blank", "comment", "code");
    println!("{:<8} {:<8} {:<8} {:<8}", c.total, c.blank, c.comment, c.code);
}

fn print_json(result: &RunResult) {
    let c = result.counts;
    let out = serde_json::json!({
        "total": c.total,
        "blank": c.blank,
        "comment": c.comment,
        "code": c.code,
        "files": result.files,
    });
    println!("{out}");
}
