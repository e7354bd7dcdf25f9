//! Library crate for ruls
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`data`]: Core data structures (`Entry`, `DisplayItem`, ...)
//! - [`layout`]: The column layout engine
//! - [`rules`]: Rule-file loading and filename matching
//! - [`scan`]: Directory enumeration and metadata capture
//! - [`output`]: Grid and long-format renderers
//! - [`utils`]: Permission strings, identity resolution, terminal probing

pub mod cli;
pub mod data;
pub mod layout;
pub mod output;
pub mod rules;
pub mod scan;
pub mod utils;

pub use cli::Args;
pub use data::{DisplayItem, Entry, EntryMetadata, EntryType};
pub use layout::{LayoutPlan, compute_layout};
pub use rules::RuleSet;
