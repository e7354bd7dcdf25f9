//! Long-format renderer: one detailed line per entry.
//!
//! Prints `permissions nlink owner group size mtime name`, with the
//! numeric and name columns right-justified to their widest member. The
//! layout plan plays no part here.

use crate::data::{DisplayItem, Entry};
use crate::utils::{lpad_equal, permission_string};
use anyhow::{Context, Result};
use chrono::DateTime;
use std::io::Write;

/// Renders the detailed listing for `entries`, one line each, ending with
/// the colorized name from the matching `items` slot.
pub fn render(out: &mut dyn Write, entries: &[Entry], items: &[DisplayItem]) -> Result<()> {
    let sizes = lpad_equal(
        &entries
            .iter()
            .map(|entry| entry.metadata.size.to_string())
            .collect::<Vec<_>>(),
    );
    let owners = lpad_equal(
        &entries
            .iter()
            .map(|entry| entry.metadata.owner.clone())
            .collect::<Vec<_>>(),
    );
    let groups = lpad_equal(
        &entries
            .iter()
            .map(|entry| entry.metadata.group.clone())
            .collect::<Vec<_>>(),
    );
    let nlinks = lpad_equal(
        &entries
            .iter()
            .map(|entry| entry.metadata.nlink.to_string())
            .collect::<Vec<_>>(),
    );

    for (index, (entry, item)) in entries.iter().zip(items).enumerate() {
        let permissions = permission_string(entry.entry_type, entry.metadata.mode);
        let mtime = format_mtime(entry.metadata.mtime)
            .with_context(|| format!("modification time out of range for {}", entry.name))?;
        writeln!(
            out,
            "{} {} {} {} {} {} {}",
            permissions,
            nlinks[index],
            owners[index],
            groups[index],
            sizes[index],
            mtime,
            item.rendered
        )?;
    }
    Ok(())
}

/// `Mon DD HH:MM` in UTC, day-of-month space-padded.
fn format_mtime(mtime: i64) -> Option<String> {
    DateTime::from_timestamp(mtime, 0).map(|stamp| stamp.format("%b %e %H:%M").to_string())
}
