//! `json-patch`: apply a JSON Patch (RFC 6902) to a document.
//!
//! The document is read from stdin unless `--doc` names a file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use json_patch_duplex::json_cli::{apply_json_patch, init_tracing, read_input, validate_json_patch};

#[derive(Parser)]
#[command(name = "json-patch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Patch operations as a JSON array
    patch: String,

    /// Document file (reads from stdin if not provided)
    #[arg(long, value_name = "FILE")]
    doc: Option<PathBuf>,

    /// Validate against the document first; print problems instead of applying
    #[arg(long)]
    validate: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();
    let doc = read_input(args.doc.as_deref()).context("reading document")?;

    if args.validate {
        let problems = validate_json_patch(&args.patch, Some(doc.as_str()), false)?;
        if !problems.is_empty() {
            for line in problems {
                eprintln!("{line}");
            }
            return Ok(ExitCode::FAILURE);
        }
    }

    let patched = apply_json_patch(doc.trim(), &args.patch)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{patched}")?;
    Ok(ExitCode::SUCCESS)
}
