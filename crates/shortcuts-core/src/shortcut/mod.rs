//! Shortcut artifacts and their renderers.
//!
//! One renderer per target, each taking its validated record:
//! - Linux: `.desktop` file written directly, then chmod `755`
//! - Windows: `.lnk` created by the `wscript` host running `windows.vbs`
//! - macOS: symbolic link created with `ln -s`
//!
//! # Platform Support
//!
//! Renderers do not check the platform they run on. With `onlyCurrentOS: false`
//! a Linux host still spawns `wscript` for the Windows target, which fails and
//! is reported like any other spawn failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use desktop_shortcuts::shortcut::{render_desktop_entry, LinuxShortcut};
//!
//! let text = render_desktop_entry(&shortcut);
//! assert!(text.starts_with("#!/user/bin/env xdg-open"));
//! ```

mod desktop_entry;
mod symlink;
mod types;
mod windows_link;

pub use desktop_entry::{
    make_linux_shortcut, render_desktop_entry, write_linux_shortcut, DesktopEntry,
    DesktopEntryBuilder,
};
pub use symlink::{create_symlink, link_command, make_osx_shortcut, LinkOutcome};
pub use types::{
    LinuxEntryType, LinuxShortcut, OsxShortcut, Shortcut, ValidatedRequest, WindowMode,
    WindowsShortcut,
};
pub use windows_link::{
    create_windows_link, default_icon, default_script_path, deploy_script, escape_double_quotes,
    make_windows_shortcut, script_dir, script_host_arguments, script_path, SCRIPT_SOURCE,
};
