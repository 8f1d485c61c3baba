//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module:
//! - `paths` - home/desktop directories and the runtime [`Environment`]
//! - `permissions` - executable bits on the written desktop entry
//! - `process` - spawning the script host and running shell commands
//!
//! [`TargetOs`] is the closed set of platforms a shortcut can be built for.
//! It is independent of the platform we are running on: with
//! `onlyCurrentOS: false` every present target is rendered from one host.

pub mod paths;
pub mod permissions;
pub mod process;

pub use paths::{desktop_dir, home_dir, is_windows_absolute, Environment};
pub use permissions::set_mode;
pub use process::{CommandOutput, CommandRunner, SystemRunner};

use serde::Serialize;
use std::fmt;

/// Operating systems a shortcut can be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOs {
    Windows,
    Linux,
    Osx,
}

impl TargetOs {
    /// Dispatch order used when every present target is rendered.
    pub const ALL: [TargetOs; 3] = [TargetOs::Windows, TargetOs::Linux, TargetOs::Osx];

    /// Key of this target's subtree in the options document.
    pub fn key(&self) -> &'static str {
        match self {
            TargetOs::Windows => "windows",
            TargetOs::Linux => "linux",
            TargetOs::Osx => "osx",
        }
    }

    /// Upper-case label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            TargetOs::Windows => "WINDOWS",
            TargetOs::Linux => "LINUX",
            TargetOs::Osx => "OSX",
        }
    }

    /// File extension appended to the shortcut name, including the dot.
    pub fn shortcut_extension(&self) -> &'static str {
        use crate::config::{DesktopEntryConfig, SymlinkConfig, WindowsLinkConfig};
        match self {
            TargetOs::Windows => WindowsLinkConfig::EXTENSION,
            TargetOs::Linux => DesktopEntryConfig::EXTENSION,
            TargetOs::Osx => SymlinkConfig::EXTENSION,
        }
    }

    /// The target matching the platform we were compiled for, if supported.
    pub fn current() -> Option<TargetOs> {
        #[cfg(target_os = "linux")]
        {
            Some(TargetOs::Linux)
        }
        #[cfg(target_os = "windows")]
        {
            Some(TargetOs::Windows)
        }
        #[cfg(target_os = "macos")]
        {
            Some(TargetOs::Osx)
        }
        #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
        {
            None
        }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returns the current platform name.
pub fn current_platform() -> &'static str {
    std::env::consts::OS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform() {
        assert!(!current_platform().is_empty());

        #[cfg(target_os = "linux")]
        assert_eq!(TargetOs::current(), Some(TargetOs::Linux));

        #[cfg(target_os = "macos")]
        assert_eq!(TargetOs::current(), Some(TargetOs::Osx));
    }

    #[test]
    fn test_shortcut_extensions() {
        assert_eq!(TargetOs::Linux.shortcut_extension(), ".desktop");
        assert_eq!(TargetOs::Windows.shortcut_extension(), ".lnk");
        assert_eq!(TargetOs::Osx.shortcut_extension(), "");
    }

    #[test]
    fn test_keys_and_labels() {
        let keys: Vec<_> = TargetOs::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys, ["windows", "linux", "osx"]);
        assert_eq!(TargetOs::Osx.label(), "OSX");
        assert_eq!(
            serde_json::to_value(TargetOs::Windows).unwrap(),
            serde_json::json!("windows")
        );
    }
}
