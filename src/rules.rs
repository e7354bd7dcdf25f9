//! Rule-file loading and filename matching.
//!
//! A rules file is an ordered list of `[[rules]]` tables, each mapping a
//! regular-expression pattern to a color and an icon:
//!
//! ```toml
//! [[rules]]
//! pattern = '\.py$'
//! color = "blue"
//! icon = "🐍"
//!
//! [[rules]]
//! pattern = '$dir'
//! color = "yellow"
//! icon = "📁"
//! ```
//!
//! Rules are evaluated in declaration order and the first match wins.
//! Patterns are searched, not anchored. The reserved keys `$dir` and
//! `$file` are wildcards: the first wildcard reached ends the scan and
//! resolves to the directory or file fallback style. Colors are either one
//! of the sixteen standard ANSI names or an `[r, g, b]` triple.
//!
//! The rule set is loaded once at startup - from `~/.ruls.toml` when that
//! file exists, else from the bundled defaults - and is immutable for the
//! rest of the process.

use crate::data::{DisplayItem, Entry};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use thiserror::Error;

/// Bundled rule set used when no user override exists.
const DEFAULT_RULES: &str = include_str!("default_rules.toml");

/// ANSI reset sequence appended after every colorized token.
pub const RESET: &str = "\x1b[0m";

static UNMATCHED_WARNING: Once = Once::new();

/// Errors raised while loading or compiling a rules file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read rules file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse rules file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid rule pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("unknown color name '{0}'")]
    UnknownColor(String),
}

/// One `[[rules]]` table as written in the file.
#[derive(Debug, Deserialize)]
struct RawRule {
    pattern: String,
    color: ColorSpec,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct RulesFile {
    rules: Vec<RawRule>,
}

/// A color as written in the rules file: a name or an RGB triple.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Named(String),
    Rgb([u8; 3]),
}

/// Resolved rendering attributes for a matched filename.
#[derive(Debug, Clone)]
pub struct Style {
    /// ANSI foreground escape emitted before the icon.
    pub ansi: String,
    pub icon: String,
}

impl Style {
    /// Renders `name` with this style's color and icon, reset afterwards.
    pub fn paint(&self, name: &str) -> String {
        format!("{}{} {}{}", self.ansi, self.icon, name, RESET)
    }
}

enum Matcher {
    Pattern { regex: Regex, style: Style },
    /// A `$`-prefixed key; resolves through the wildcard fallbacks.
    Wildcard,
}

/// An immutable, compiled rule set.
pub struct RuleSet {
    matchers: Vec<Matcher>,
    dir_style: Option<Style>,
    file_style: Option<Style>,
}

impl RuleSet {
    fn compile(file: RulesFile) -> Result<Self, ConfigError> {
        let mut matchers = Vec::with_capacity(file.rules.len());
        let mut dir_style = None;
        let mut file_style = None;
        for rule in file.rules {
            let style = Style {
                ansi: ansi_prefix(&rule.color)?,
                icon: rule.icon,
            };
            if let Some(key) = rule.pattern.strip_prefix('$') {
                match key {
                    "dir" => dir_style = Some(style),
                    "file" => file_style = Some(style),
                    _ => {}
                }
                matchers.push(Matcher::Wildcard);
            } else {
                let regex = Regex::new(&rule.pattern).map_err(|source| ConfigError::Pattern {
                    pattern: rule.pattern.clone(),
                    source,
                })?;
                matchers.push(Matcher::Pattern { regex, style });
            }
        }
        Ok(RuleSet {
            matchers,
            dir_style,
            file_style,
        })
    }

    /// Resolves the style for `name`, honoring declaration order.
    ///
    /// Returns `None` when no pattern matches and no applicable wildcard
    /// is defined; such entries are omitted from the listing.
    pub fn match_name(&self, name: &str, is_dir: bool) -> Option<&Style> {
        for matcher in &self.matchers {
            match matcher {
                Matcher::Pattern { regex, style } => {
                    if regex.is_match(name) {
                        return Some(style);
                    }
                }
                Matcher::Wildcard => {
                    return if is_dir {
                        self.dir_style.as_ref()
                    } else {
                        self.file_style.as_ref()
                    };
                }
            }
        }
        None
    }

    /// Colorizes entries in order, dropping any without a matching rule.
    ///
    /// A dropped entry means the rule set has a gap; the first one is
    /// flagged on stderr, further ones stay silent.
    pub fn colorize_entries(&self, entries: Vec<Entry>) -> Vec<(Entry, DisplayItem)> {
        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(style) = self.match_name(&entry.name, entry.entry_type.is_dir()) else {
                UNMATCHED_WARNING.call_once(|| {
                    eprintln!(
                        "Warning: no rule matched '{}'; entry omitted. Check your rules file. Further warnings will be suppressed.",
                        entry.name
                    );
                });
                continue;
            };
            let item = DisplayItem {
                plain: entry.name.clone(),
                rendered: style.paint(&entry.name),
            };
            kept.push((entry, item));
        }
        kept
    }
}

/// Default location of the user rules override.
pub fn override_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ruls.toml"))
}

/// Loads the rule set from `override_path`, falling back to the bundled
/// defaults when no override file exists.
///
/// A missing override is the expected case and falls through silently. An
/// override that exists but cannot be read or parsed is a hard error, so a
/// broken configuration never masquerades as the default.
pub fn load(override_path: Option<&Path>) -> Result<RuleSet, ConfigError> {
    if let Some(path) = override_path {
        match fs::read_to_string(path) {
            Ok(text) => return from_str_labeled(&text, path),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }
    from_str_labeled(DEFAULT_RULES, Path::new("<bundled default>"))
}

/// Parses and compiles a rules document from a string.
pub fn from_str(text: &str) -> Result<RuleSet, ConfigError> {
    from_str_labeled(text, Path::new("<inline>"))
}

fn from_str_labeled(text: &str, path: &Path) -> Result<RuleSet, ConfigError> {
    let file: RulesFile = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    RuleSet::compile(file)
}

/// Standard ANSI foreground codes by color name.
fn named_code(name: &str) -> Option<u8> {
    let code = match name {
        "black" => 30,
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        "magenta" => 35,
        "cyan" => 36,
        "white" => 37,
        "bright_black" | "grey" | "gray" => 90,
        "bright_red" => 91,
        "bright_green" => 92,
        "bright_yellow" => 93,
        "bright_blue" => 94,
        "bright_magenta" => 95,
        "bright_cyan" => 96,
        "bright_white" => 97,
        _ => return None,
    };
    Some(code)
}

fn ansi_prefix(color: &ColorSpec) -> Result<String, ConfigError> {
    match color {
        ColorSpec::Named(name) => named_code(name)
            .map(|code| format!("\x1b[{code}m"))
            .ok_or_else(|| ConfigError::UnknownColor(name.clone())),
        ColorSpec::Rgb([r, g, b]) => Ok(format!("\x1b[38;2;{r};{g};{b}m")),
    }
}
