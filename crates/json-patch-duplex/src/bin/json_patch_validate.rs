//! `json-patch-validate`: report problems in a JSON Patch.
//!
//! Prints one `index: NAME message` line per problem and exits with status 1
//! when any were found.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use json_patch_duplex::json_cli::{init_tracing, read_input, validate_json_patch};

#[derive(Parser)]
#[command(name = "json-patch-validate")]
#[command(version, about, long_about = None)]
struct Args {
    /// Patch operations as a JSON array
    patch: String,

    /// Also check the patch against this document
    #[arg(long, value_name = "FILE")]
    doc: Option<PathBuf>,

    /// Stop at the first problem
    #[arg(long)]
    stop_after_first_error: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();
    let doc = match &args.doc {
        Some(path) => Some(
            read_input(Some(path.as_path())).with_context(|| format!("reading {}", path.display()))?,
        ),
        None => None,
    };

    let problems = validate_json_patch(&args.patch, doc.as_deref(), args.stop_after_first_error)?;
    let mut stdout = io::stdout().lock();
    for line in &problems {
        writeln!(stdout, "{line}")?;
    }
    Ok(if problems.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
