//! Output renderers for the `ruls` listing.
//!
//! Two renderers cover the two listing modes: a terminal-width-aware grid
//! driven by a [`crate::layout::LayoutPlan`], and the detailed long format
//! that bypasses the plan entirely. Both write to any `Write`, so tests
//! capture their output instead of scraping stdout.

pub mod grid;
pub mod long;

/// Grid renderer. See [`grid::render`].
pub use grid::render as render_grid;

/// Long-format renderer. See [`long::render`].
pub use long::render as render_long;
