//! Utility functions for the `ruls` listing tool.
//!
//! This module provides:
//! - Owner and group name resolution via `libc`
//! - Symbolic permission-string formatting
//! - Column padding helpers for the long format
//! - Terminal size probing with a fallback
//!
//! All functions are platform-aware and safe to use with Unix filesystems.
//! Used throughout the main binary for formatting and rendering.

use crate::data::EntryType;
use libc::{c_char, getgrgid_r, getpwuid_r, group, passwd};
use std::collections::HashMap;
use std::ffi::CStr;
use std::io::{stderr, stdin, stdout};
use std::mem::MaybeUninit;
use std::sync::{LazyLock, Mutex};
use terminal_size::{Height, Width, terminal_size_of};
use unicode_width::UnicodeWidthStr;

/// Terminal size assumed when none of the standard descriptors is a tty.
pub const FALLBACK_TERM_SIZE: (usize, usize) = (80, 24);

/// Symbolic permission triplets indexed by octal digit.
const NUM2SYM: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];

/// Maps one octal permission digit (0-7) to its `rwx`-style triplet.
pub fn num2sym(digit: u32) -> &'static str {
    NUM2SYM[(digit & 0o7) as usize]
}

/// Formats the 10-character symbolic permission string for an entry.
///
/// The leading character is `d` for directories and `-` for files; the
/// remaining nine come from the three octal digits of the permission bits.
/// Special-mode bits (setuid, setgid, sticky) are masked off so the result
/// is always exactly 10 characters.
pub fn permission_string(entry_type: EntryType, mode: u32) -> String {
    let prefix = match entry_type {
        EntryType::Dir => 'd',
        EntryType::File => '-',
    };
    let bits = mode & 0o777;
    let mut out = String::with_capacity(10);
    out.push(prefix);
    for shift in [6, 3, 0] {
        out.push_str(num2sym((bits >> shift) & 0o7));
    }
    out
}

/// Right-justifies every item to the width of the widest one.
pub fn lpad_equal(items: &[String]) -> Vec<String> {
    let pad = items.iter().map(|item| item.len()).max().unwrap_or(0);
    items.iter().map(|item| format!("{item:>pad$}")).collect()
}

/// Display width of a string in terminal cells.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Probes the terminal size on descriptors 0, 1 and 2 in order.
///
/// The first descriptor that reports a size wins; when all three probes
/// fail (output piped, no controlling terminal) the result is
/// [`FALLBACK_TERM_SIZE`]. Kept separate from the layout engine so the
/// engine stays a pure function of its inputs.
pub fn probe_terminal_size() -> (usize, usize) {
    let probes = [
        terminal_size_of(stdin()),
        terminal_size_of(stdout()),
        terminal_size_of(stderr()),
    ];
    probes
        .into_iter()
        .flatten()
        .map(|(Width(width), Height(height))| (width as usize, height as usize))
        .next()
        .unwrap_or(FALLBACK_TERM_SIZE)
}

// Caches for uid/gid resolution so a directory full of same-owner entries
// queries libc once.
static UID_CACHE: LazyLock<Mutex<HashMap<u32, String>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static GID_CACHE: LazyLock<Mutex<HashMap<u32, String>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns the username for a uid, or `None` when the id has no passwd
/// entry.
///
/// Uses the thread-safe `getpwuid_r` with a caller-owned buffer; resolved
/// names are cached for the lifetime of the process.
pub fn owner_name(uid: u32) -> Option<String> {
    if let Ok(cache) = UID_CACHE.lock() {
        if let Some(name) = cache.get(&uid) {
            return Some(name.clone());
        }
    }

    let mut pwd = MaybeUninit::<passwd>::uninit();
    let mut buf = [0u8; 4096];
    let mut result: *mut passwd = std::ptr::null_mut();

    let ret = unsafe {
        getpwuid_r(
            uid,
            pwd.as_mut_ptr(),
            buf.as_mut_ptr() as *mut c_char,
            buf.len(),
            &mut result,
        )
    };
    if ret != 0 || result.is_null() {
        return None;
    }

    let name = unsafe {
        let pw_name = (*result).pw_name;
        if pw_name.is_null() {
            return None;
        }
        CStr::from_ptr(pw_name).to_str().ok().map(String::from)
    }?;

    if let Ok(mut cache) = UID_CACHE.lock() {
        cache.insert(uid, name.clone());
    }
    Some(name)
}

/// Returns the group name for a gid, or `None` when the id has no group
/// entry. Mirrors [`owner_name`].
pub fn group_name(gid: u32) -> Option<String> {
    if let Ok(cache) = GID_CACHE.lock() {
        if let Some(name) = cache.get(&gid) {
            return Some(name.clone());
        }
    }

    let mut grp = MaybeUninit::<group>::uninit();
    let mut buf = [0u8; 4096];
    let mut result: *mut group = std::ptr::null_mut();

    let ret = unsafe {
        getgrgid_r(
            gid,
            grp.as_mut_ptr(),
            buf.as_mut_ptr() as *mut c_char,
            buf.len(),
            &mut result,
        )
    };
    if ret != 0 || result.is_null() {
        return None;
    }

    let name = unsafe {
        let gr_name = (*result).gr_name;
        if gr_name.is_null() {
            return None;
        }
        CStr::from_ptr(gr_name).to_str().ok().map(String::from)
    }?;

    if let Ok(mut cache) = GID_CACHE.lock() {
        cache.insert(gid, name.clone());
    }
    Some(name)
}
