//! # Check Subcommand
//!
//! Validates one or more content files, reporting each result on its own
//! line. Every file is checked even after a failure.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::load_page_file;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Content files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Execute the check subcommand, writing the report to stdout.
///
/// Returns exit code 0 when every file passes, 1 otherwise.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    check_files(&args.files, &mut out)
}

/// Check `files`, writing one `ok`/`fail` line per file to `out`.
pub fn check_files(files: &[PathBuf], out: &mut impl Write) -> Result<u8> {
    let mut failed = 0usize;

    for path in files {
        match load_page_file(path) {
            Ok(page) => {
                tracing::info!(
                    path = %path.display(),
                    features = page.model.features.len(),
                    "page accepted"
                );
                writeln!(out, "ok   {}", path.display())?;
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(path = %path.display(), "page rejected");
                writeln!(out, "fail {}: {}", path.display(), e.root_cause())?;
            }
        }
    }

    tracing::debug!(checked = files.len(), failed, "check finished");
    Ok(if failed == 0 { 0 } else { 1 })
}
