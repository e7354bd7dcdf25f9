//! CLI interface definitions for the `ruls` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes
//! [`Args`], the struct parsed from CLI inputs. The flags mirror the
//! classic `ls` switches they borrow from, and clap's short-flag bundling
//! means `ruls -la` works as expected.
//!
//! # Example
//!
//! ```bash
//! ruls -la src tests
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the `ruls` directory lister.
#[derive(Parser, Debug)]
#[command(name = "ruls", version, about)]
pub struct Args {
    /// Directories to list (defaults to the current directory)
    #[arg(default_value = ".")]
    pub directories: Vec<PathBuf>,

    /// Include hidden entries
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Use the long listing format
    #[arg(short = 'l', long = "long")]
    pub long: bool,
}
