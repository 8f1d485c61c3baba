//! Validated, per-target shortcut records.
//!
//! Values of these types only come out of the validation pipeline, so every
//! field already satisfies its invariants: the target was checked, the output
//! path is a full file path, icons exist.

use crate::diagnostics::Reporter;
use crate::platform::TargetOs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// `Type=` of a Linux desktop entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinuxEntryType {
    Application,
    Link,
    Directory,
}

impl LinuxEntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinuxEntryType::Application => "Application",
            LinuxEntryType::Link => "Link",
            LinuxEntryType::Directory => "Directory",
        }
    }
}

impl FromStr for LinuxEntryType {
    type Err = String;

    /// Case-sensitive, matching the desktop entry spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Application" => Ok(LinuxEntryType::Application),
            "Link" => Ok(LinuxEntryType::Link),
            "Directory" => Ok(LinuxEntryType::Directory),
            _ => Err(format!(
                "Invalid entry type '{s}'. Must be one of: Application, Link, Directory"
            )),
        }
    }
}

impl fmt::Display for LinuxEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a Windows shortcut opens its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

impl WindowMode {
    /// `WshShortcut.WindowStyle` value passed to the script host.
    pub fn code(&self) -> u8 {
        match self {
            WindowMode::Normal => 1,
            WindowMode::Maximized => 3,
            WindowMode::Minimized => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowMode::Normal => "normal",
            WindowMode::Maximized => "maximized",
            WindowMode::Minimized => "minimized",
        }
    }
}

impl FromStr for WindowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(WindowMode::Normal),
            "maximized" => Ok(WindowMode::Maximized),
            "minimized" => Ok(WindowMode::Minimized),
            _ => Err(format!(
                "Invalid window mode '{s}'. Must be one of: normal, maximized, minimized"
            )),
        }
    }
}

/// A ready-to-render Linux `.desktop` shortcut.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinuxShortcut {
    /// Target file, folder or URL.
    pub file_path: String,
    /// Full path of the `.desktop` file to write.
    pub output_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: LinuxEntryType,
    pub terminal: bool,
    pub chmod: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Absolute icon path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

/// A ready-to-render Windows `.lnk` shortcut.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsShortcut {
    pub file_path: String,
    /// Full path of the `.lnk` file the script host should create.
    pub output_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Comment, with the legacy `description` already folded in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Icon file, possibly followed by `,<index>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    pub window_mode: WindowMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    /// Replacement location of the script host resource.
    #[serde(rename = "VBScriptPath", skip_serializing_if = "Option::is_none")]
    pub vbs_script_path: Option<PathBuf>,
}

/// A ready-to-render macOS symbolic link.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OsxShortcut {
    pub file_path: String,
    /// Full path of the link to create.
    pub output_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub overwrite: bool,
}

/// One validated shortcut, tagged by target.
#[derive(Debug, Clone, Copy)]
pub enum Shortcut<'a> {
    Windows(&'a WindowsShortcut),
    Linux(&'a LinuxShortcut),
    Osx(&'a OsxShortcut),
}

impl Shortcut<'_> {
    pub fn target(&self) -> TargetOs {
        match self {
            Shortcut::Windows(_) => TargetOs::Windows,
            Shortcut::Linux(_) => TargetOs::Linux,
            Shortcut::Osx(_) => TargetOs::Osx,
        }
    }
}

/// Output of the validation pipeline, consumed once by the dispatcher.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRequest {
    #[serde(rename = "onlyCurrentOS")]
    pub only_current_os: bool,
    pub verbose: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<WindowsShortcut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<LinuxShortcut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osx: Option<OsxShortcut>,
    #[serde(skip)]
    pub reporter: Reporter,
}

impl ValidatedRequest {
    /// The surviving shortcut for `target`, if any.
    pub fn shortcut(&self, target: TargetOs) -> Option<Shortcut<'_>> {
        match target {
            TargetOs::Windows => self.windows.as_ref().map(Shortcut::Windows),
            TargetOs::Linux => self.linux.as_ref().map(Shortcut::Linux),
            TargetOs::Osx => self.osx.as_ref().map(Shortcut::Osx),
        }
    }

    /// True when validation removed every target.
    pub fn is_empty(&self) -> bool {
        self.windows.is_none() && self.linux.is_none() && self.osx.is_none()
    }

    /// JSON snapshot attached to dispatcher diagnostics.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_mode_codes() {
        assert_eq!(WindowMode::Normal.code(), 1);
        assert_eq!(WindowMode::Maximized.code(), 3);
        assert_eq!(WindowMode::Minimized.code(), 7);
        assert_eq!(WindowMode::default(), WindowMode::Normal);
    }

    #[test]
    fn test_entry_type_parsing_is_case_sensitive() {
        assert_eq!("Link".parse::<LinuxEntryType>(), Ok(LinuxEntryType::Link));
        assert!("link".parse::<LinuxEntryType>().is_err());
        assert!("Maximized".parse::<WindowMode>().is_err());
    }

    #[test]
    fn test_snapshot_uses_option_names() {
        let request = ValidatedRequest {
            only_current_os: true,
            verbose: false,
            windows: None,
            linux: None,
            osx: Some(OsxShortcut {
                file_path: "/Applications/App.app".into(),
                output_path: PathBuf::from("/Users/u/Desktop/App"),
                name: None,
                overwrite: false,
            }),
            reporter: Reporter::silent(),
        };

        assert!(!request.is_empty());
        assert_eq!(
            request.snapshot(),
            serde_json::json!({
                "onlyCurrentOS": true,
                "verbose": false,
                "osx": {
                    "filePath": "/Applications/App.app",
                    "outputPath": "/Users/u/Desktop/App",
                    "overwrite": false
                }
            })
        );
        assert!(matches!(
            request.shortcut(TargetOs::Osx),
            Some(Shortcut::Osx(_))
        ));
        assert!(request.shortcut(TargetOs::Linux).is_none());
    }
}
