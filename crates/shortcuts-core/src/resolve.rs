//! Path and environment resolution.
//!
//! Pure string transforms apart from the filesystem reads `which` does while
//! walking `PATH`. None of these functions fail: unresolvable input comes back
//! unchanged.

use crate::config::PathsConfig;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"%([^%]+)%").expect("placeholder pattern is valid"))
}

/// Expand a leading `~` to `home`.
///
/// Only `~` on its own or `~/...` refer to the home directory; `~alias/...` is
/// returned untouched. Empty input yields `None`.
///
/// ```
/// use std::path::Path;
/// use desktop_shortcuts::resolve::resolve_tilde;
///
/// let home = Path::new("/home/bob");
/// assert_eq!(resolve_tilde("~/repo/icon.png", home).as_deref(), Some("/home/bob/repo/icon.png"));
/// assert_eq!(resolve_tilde("~alice/icon.png", home).as_deref(), Some("~alice/icon.png"));
/// assert_eq!(resolve_tilde("", home), None);
/// ```
pub fn resolve_tilde(path: &str, home: &Path) -> Option<String> {
    if path.is_empty() {
        return None;
    }

    if path == "~" || path.starts_with("~/") {
        return Some(format!("{}{}", home.to_string_lossy(), &path[1..]));
    }

    Some(path.to_string())
}

/// Replace Windows-style `%NAME%` tokens with the value from `lookup`.
///
/// Tokens whose variable is unset (or empty) stay as written, so a literal
/// `%` in a path survives. Empty input yields `None`.
pub fn resolve_environment_placeholders<F>(path: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if path.is_empty() {
        return None;
    }

    let resolved = placeholder_pattern().replace_all(path, |caps: &regex::Captures<'_>| {
        match lookup(&caps[1]).filter(|value| !value.is_empty()) {
            Some(value) => value,
            None => caps[0].to_string(),
        }
    });

    Some(resolved.into_owned())
}

/// Resolve a bare executable name (`git`, `code`) to its absolute path on `PATH`.
///
/// Anything `which` cannot resolve, including URLs and non-executable files, is
/// returned unchanged.
pub fn resolve_executable_on_search_path(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    match which::which(name) {
        Ok(resolved) => {
            debug!("Resolved {:?} to {:?}", name, resolved);
            resolved.to_string_lossy().into_owned()
        }
        Err(e) => {
            debug!("Failed to resolve {:?} on PATH: {}. Using original path", name, e);
            name.to_string()
        }
    }
}

/// Base name of `file_path` without its extension.
///
/// Both `/` and `\` separate segments, so Windows paths and URLs work from any
/// host. Falls back to `Root` when nothing usable remains (`/`, `C:\`).
pub fn derived_file_name(file_path: &str) -> String {
    file_path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .last()
        .filter(|segment| !segment.ends_with(':'))
        .and_then(|segment| Path::new(segment).file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| PathsConfig::ROOT_FILE_NAME.to_string())
}
