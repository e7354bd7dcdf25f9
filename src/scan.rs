//! Directory enumeration for `ruls`.
//!
//! This module handles:
//! - Reading a single directory level via `fs::read_dir`
//! - Hidden-entry filtering (`.`-prefixed names, platform hidden attribute)
//! - Eager per-entry metadata capture (size, links, mode, owner, group,
//!   modification time)
//!
//! The main entry point is [`list_directory`], which returns entries
//! sorted by name with their metadata already captured; nothing is
//! re-stated at render time.

use crate::data::{Entry, EntryMetadata, EntryType};
use crate::utils::{group_name, owner_name};
use anyhow::{Context, Result};
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// Reads `dir` and returns its entries sorted by name.
///
/// Hidden entries are skipped unless `show_hidden` is set. Metadata is
/// captured eagerly per entry; an unreadable entry or an owner/group id
/// with no name aborts the listing with context.
///
/// # Errors
/// Returns an error if:
/// - `dir` does not exist or is unreadable
/// - An entry cannot be stat'ed
/// - A uid or gid has no corresponding passwd/group entry
pub fn list_directory(dir: &Path, show_hidden: bool) -> Result<Vec<Entry>> {
    let reader = fs::read_dir(dir)
        .with_context(|| format!("cannot read directory {}", dir.display()))?;

    let mut entries = Vec::new();
    for dirent in reader {
        let dirent =
            dirent.with_context(|| format!("cannot read entry in {}", dir.display()))?;
        let name = dirent.file_name().to_string_lossy().into_owned();
        let path = dirent.path();
        if !show_hidden && is_hidden(&name, &path) {
            continue;
        }

        let metadata =
            fs::metadata(&path).with_context(|| format!("cannot stat {}", path.display()))?;
        let entry_type = if metadata.is_dir() {
            EntryType::Dir
        } else {
            EntryType::File
        };
        let owner = owner_name(metadata.uid())
            .with_context(|| format!("cannot resolve owner name for uid {}", metadata.uid()))?;
        let group = group_name(metadata.gid())
            .with_context(|| format!("cannot resolve group name for gid {}", metadata.gid()))?;

        entries.push(Entry {
            name,
            path,
            entry_type,
            metadata: EntryMetadata {
                size: metadata.size(),
                nlink: metadata.nlink(),
                mode: metadata.mode() & 0o777,
                owner,
                group,
                mtime: metadata.mtime(),
            },
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// True when the basename starts with `.` or the platform marks the file
/// hidden.
pub fn is_hidden(name: &str, path: &Path) -> bool {
    name.starts_with('.') || has_hidden_attribute(path)
}

/// Best-effort probe of the platform hidden-attribute bit: a failed probe
/// means "not hidden".
#[cfg(windows)]
fn has_hidden_attribute(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    fs::metadata(path)
        .map(|metadata| metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

/// Unix has no hidden-attribute bit; the dot prefix is the whole story.
#[cfg(not(windows))]
fn has_hidden_attribute(_path: &Path) -> bool {
    false
}
