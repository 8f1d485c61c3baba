//! Desktop entry (.desktop file) generation.
//!
//! Produces the XDG desktop entry text for a [`LinuxShortcut`], writes it and
//! marks it executable so file managers trust it.

use super::types::{LinuxEntryType, LinuxShortcut};
use crate::config::DesktopEntryConfig;
use crate::diagnostics::{Detail, Reporter};
use crate::error::{Result, ShortcutError};
use crate::platform;
use crate::resolve::derived_file_name;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A desktop entry representation.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopEntry {
    /// Entry type.
    pub entry_type: LinuxEntryType,
    /// Whether to run in a terminal.
    pub terminal: bool,
    /// Executable command, target quoted.
    pub exec: String,
    /// Entry name (shown on the desktop).
    pub name: String,
    /// Comment/description.
    pub comment: Option<String>,
    /// Icon path.
    pub icon: Option<String>,
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            entry_type: LinuxEntryType::Application,
            terminal: false,
            exec: String::new(),
            name: String::new(),
            comment: None,
            icon: None,
        }
    }
}

impl DesktopEntry {
    /// Create a new desktop entry builder.
    pub fn builder() -> DesktopEntryBuilder {
        DesktopEntryBuilder::new()
    }

    /// Build the entry for a validated shortcut.
    pub fn from_shortcut(shortcut: &LinuxShortcut) -> Self {
        let name = shortcut
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| derived_file_name(&shortcut.file_path));

        let mut builder = Self::builder()
            .entry_type(shortcut.entry_type)
            .terminal(shortcut.terminal)
            .exec(&shortcut.file_path, shortcut.arguments.as_deref().unwrap_or_default())
            .name(name);

        if let Some(comment) = &shortcut.comment {
            builder = builder.comment(comment);
        }
        if let Some(icon) = &shortcut.icon {
            builder = builder.icon(icon);
        }

        builder.build()
    }

    /// Write the desktop entry to `path`. The parent folder must exist.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|e| ShortcutError::io_with_path(e, path))?;
        debug!("Wrote desktop entry to {:?}", path);
        Ok(())
    }
}

impl fmt::Display for DesktopEntry {
    /// Newline-joined lines, no trailing newline. Empty values are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = [
            DesktopEntryConfig::SHEBANG.to_string(),
            DesktopEntryConfig::GROUP_HEADER.to_string(),
            format!("Version={}", DesktopEntryConfig::VERSION),
            format!("Type={}", self.entry_type),
            format!("Terminal={}", self.terminal),
            format!("Exec={}", self.exec),
            optional_line("Name", Some(&self.name)),
            // Lower-case key, as existing entries were written.
            optional_line("comment", self.comment.as_ref()),
            optional_line("Icon", self.icon.as_ref()),
        ];

        let content: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|line| !line.is_empty())
            .collect();

        f.write_str(&content.join("\n"))
    }
}

fn optional_line(key: &str, value: Option<&String>) -> String {
    match value {
        Some(value) if !value.is_empty() => format!("{}={}", key, value),
        _ => String::new(),
    }
}

/// Builder for desktop entries.
pub struct DesktopEntryBuilder {
    entry: DesktopEntry,
}

impl DesktopEntryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entry: DesktopEntry::default(),
        }
    }

    /// Set the entry type.
    pub fn entry_type(mut self, entry_type: LinuxEntryType) -> Self {
        self.entry.entry_type = entry_type;
        self
    }

    /// Set whether to run in terminal.
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.entry.terminal = terminal;
        self
    }

    /// Set the command: the quoted target, then `arguments` as written.
    pub fn exec(mut self, target: &str, arguments: &str) -> Self {
        self.entry.exec = if arguments.is_empty() {
            format!("\"{}\"", target)
        } else {
            format!("\"{}\" {}", target, arguments)
        };
        self
    }

    /// Set the entry name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = name.into();
        self
    }

    /// Set the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.entry.comment = Some(comment.into());
        self
    }

    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.entry.icon = Some(icon.into());
        self
    }

    /// Build the desktop entry.
    pub fn build(self) -> DesktopEntry {
        self.entry
    }
}

impl Default for DesktopEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the `.desktop` text for a validated shortcut.
pub fn render_desktop_entry(shortcut: &LinuxShortcut) -> String {
    DesktopEntry::from_shortcut(shortcut).to_string()
}

/// Create the Linux shortcut, reporting any failure. Returns success.
pub fn make_linux_shortcut(shortcut: &LinuxShortcut, reporter: &Reporter) -> bool {
    write_linux_shortcut(shortcut, reporter, platform::set_mode)
}

/// [`make_linux_shortcut`] with the permission step supplied by the caller.
///
/// A failed permission change leaves the written entry in place.
pub fn write_linux_shortcut<F>(shortcut: &LinuxShortcut, reporter: &Reporter, set_mode: F) -> bool
where
    F: FnOnce(&Path, u32) -> Result<()>,
{
    let entry = DesktopEntry::from_shortcut(shortcut);
    let path = &shortcut.output_path;

    if let Err(e) = entry.write_to_file(path) {
        reporter.report_with(
            &format!(
                "ERROR: Could not create LINUX shortcut.\nPATH: {}\nDATA:\n{}",
                path.display(),
                entry
            ),
            Detail::Error(e),
        );
        return false;
    }

    if shortcut.chmod {
        if let Err(e) = set_mode(path, DesktopEntryConfig::EXECUTABLE_MODE) {
            reporter.report_with(
                &format!("ERROR attempting to change permissions of {}", path.display()),
                Detail::Error(e),
            );
            return false;
        }
    }

    info!("Created Linux shortcut at {}", path.display());
    true
}
