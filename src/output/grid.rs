//! Grid renderer: lays colorized names out in the columns the layout
//! engine computed.

use crate::data::DisplayItem;
use crate::layout::LayoutPlan;
use anyhow::Result;
use std::io::Write;

/// Renders one grid row per chunk of `plan.column_count` items, chunked
/// exactly the way the layout pass chunked the plain names.
///
/// Each cell is the rendered form plus trailing spaces. The pad count is
/// the column width minus the plan's recorded plain width, so the escape
/// codes and icon prefix of the rendered form never skew the alignment.
/// Cells are joined with a two-space gap.
pub fn render(out: &mut dyn Write, items: &[DisplayItem], plan: &LayoutPlan) -> Result<()> {
    for (row_index, row) in items.chunks(plan.column_count).enumerate() {
        let mut cells = Vec::with_capacity(row.len());
        for (col, item) in row.iter().enumerate() {
            let pad = plan.column_widths[col].saturating_sub(plan.item_widths[row_index][col]);
            cells.push(format!("{}{}", item.rendered, " ".repeat(pad)));
        }
        writeln!(out, "{}", cells.join("  "))?;
    }
    Ok(())
}
