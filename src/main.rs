//! Main entry point for the `ruls` CLI application.
//!
//! `ruls` is ls with colors and icons: filenames are matched against an
//! ordered rule file mapping regex patterns to a color and an icon glyph,
//! then printed either as a terminal-width-aware grid or as a detailed
//! long listing.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Loads the rule set once (user override, else bundled defaults)
//! - Probes the terminal width once and hands it to the layout engine
//! - Lists each requested directory in order, with `name:` headers when
//!   more than one was given
//!
//! # Flags of Interest
//! - `-a`: Include hidden entries
//! - `-l`: Long (detailed) format
//!
//! # Modules
//! - [`ruls::scan`] - directory enumeration and metadata capture
//! - [`ruls::rules`] - rule loading and filename matching
//! - [`ruls::layout`] - the column layout engine
//! - [`ruls::output`] - grid and long-format renderers

use anyhow::Result;
use clap::Parser;
use std::io::{Write, stdout};
use std::path::Path;

use ruls::cli::Args;
use ruls::layout::compute_layout;
use ruls::output::{render_grid, render_long};
use ruls::rules::{self, RuleSet};
use ruls::scan::list_directory;
use ruls::utils::probe_terminal_size;

/// Lists one directory: scan, colorize, lay out, render.
fn list_one(
    out: &mut dyn Write,
    dir: &Path,
    args: &Args,
    rules: &RuleSet,
    width: usize,
) -> Result<()> {
    let entries = list_directory(dir, args.all)?;
    let pairs = rules.colorize_entries(entries);
    if pairs.is_empty() {
        return Ok(());
    }
    let (entries, items): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();

    if args.long {
        render_long(out, &entries, &items)
    } else {
        let names: Vec<String> = items.iter().map(|item| item.plain.clone()).collect();
        let plan = compute_layout(&names, width);
        render_grid(out, &items, &plan)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let rules = rules::load(rules::override_path().as_deref())?;
    let (width, _) = probe_terminal_size();

    let mut out = stdout().lock();
    let many = args.directories.len() > 1;
    for (index, dir) in args.directories.iter().enumerate() {
        if many {
            writeln!(out, "{}:", dir.display())?;
        }
        list_one(&mut out, dir, &args, &rules, width)?;
        if many && index != args.directories.len() - 1 {
            writeln!(out)?;
        }
    }
    Ok(())
}
