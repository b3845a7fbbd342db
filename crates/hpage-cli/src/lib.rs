//! # hpage-cli — Command-Line Driver for Home-Page Content
//!
//! Provides the `hpage` binary, a thin layer over `hpage-schema` for use
//! in site-build scripts and CI.
//!
//! ## Subcommands
//!
//! - `hpage check <FILE>...` — Parse and validate each file; report every
//!   failure and exit non-zero if any page is rejected.
//! - `hpage render <FILE>` — Print the render model as JSON.
//!
//! ```bash
//! hpage check docs/index.md docs/zh/index.md
//! hpage render docs/index.md --pretty --with-body
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `hpage-schema`; no content rules live here.
//! - Whether a rejected page aborts the build is the caller's call: the
//!   exit code says what happened, nothing more.

pub mod check;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};

use hpage_schema::{load_page, Page};

/// Read a content file and run it through the page pipeline.
pub fn load_page_file(path: &Path) -> Result<Page> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let page = load_page(&source).with_context(|| format!("rejected {}", path.display()))?;
    Ok(page)
}
