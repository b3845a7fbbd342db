//! # Render Subcommand
//!
//! Prints the render model of a single content file as JSON, for template
//! layers that consume data rather than Rust types.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hpage_schema::Page;

use crate::load_page_file;

/// Arguments for the render subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Content file to render.
    pub file: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Emit `{"model": ..., "body": ...}` instead of the bare model.
    #[arg(long)]
    pub with_body: bool,
}

/// Execute the render subcommand.
pub fn run_render(args: &RenderArgs) -> Result<u8> {
    let page = load_page_file(&args.file)?;
    let json = render_json(&page, args.pretty, args.with_body)?;
    println!("{json}");
    Ok(0)
}

/// Serialize a page for output.
pub fn render_json(page: &Page, pretty: bool, with_body: bool) -> Result<String> {
    let value = if with_body {
        serde_json::to_value(page)
    } else {
        serde_json::to_value(&page.model)
    }
    .context("failed to serialize render model")?;

    let json = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .context("failed to format render model")?;

    Ok(json)
}
