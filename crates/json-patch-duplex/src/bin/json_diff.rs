//! `json-diff`: print the JSON Patch that turns one document into another.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use json_patch_duplex::json_cli::{diff_json, init_tracing, read_input};

#[derive(Parser)]
#[command(name = "json-diff")]
#[command(version, about, long_about = None)]
struct Args {
    /// Original JSON file
    before: PathBuf,
    /// Changed JSON file
    after: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let before = read_input(Some(args.before.as_path()))
        .with_context(|| format!("reading {}", args.before.display()))?;
    let after = read_input(Some(args.after.as_path()))
        .with_context(|| format!("reading {}", args.after.display()))?;

    let patch = diff_json(&before, &after)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{patch}")?;
    Ok(())
}
