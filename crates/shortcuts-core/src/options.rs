//! Caller-facing options.
//!
//! The options document is JSON keyed with camelCase names. Any value may
//! arrive in any field; the validator decides what survives. Rust callers can
//! build the document with the typed [`Options`] structs instead.

use crate::diagnostics::{CustomLogger, Detail};
use crate::shortcut::{LinuxEntryType, WindowMode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// One shortcut-creation call: the options document plus an optional logger.
#[derive(Clone, Default)]
pub struct ShortcutRequest {
    options: Value,
    custom_logger: Option<CustomLogger>,
}

impl ShortcutRequest {
    pub fn new(options: Value) -> Self {
        Self {
            options,
            custom_logger: None,
        }
    }

    /// Route diagnostics to `logger` instead of stderr.
    pub fn with_custom_logger<F>(mut self, logger: F) -> Self
    where
        F: Fn(&str, Option<&Detail>) + Send + Sync + 'static,
    {
        self.custom_logger = Some(Arc::new(logger));
        self
    }

    pub fn options(&self) -> &Value {
        &self.options
    }

    pub fn custom_logger(&self) -> Option<&CustomLogger> {
        self.custom_logger.as_ref()
    }
}

impl fmt::Debug for ShortcutRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutRequest")
            .field("options", &self.options)
            .field("custom_logger", &self.custom_logger.is_some())
            .finish()
    }
}

impl From<Value> for ShortcutRequest {
    fn from(options: Value) -> Self {
        Self::new(options)
    }
}

impl From<Options> for ShortcutRequest {
    fn from(options: Options) -> Self {
        Self::new(serde_json::to_value(options).unwrap_or_default())
    }
}

/// Typed form of the options document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Options {
    /// Only create the shortcut for the OS we are running on. Defaults to true.
    #[serde(rename = "onlyCurrentOS", skip_serializing_if = "Option::is_none")]
    pub only_current_os: Option<bool>,
    /// Report diagnostics. Defaults to true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<WindowsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<LinuxOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osx: Option<OsxOptions>,
}

/// Linux `.desktop` settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinuxOptions {
    /// Must exist as a file for `Application`, as a folder for `Directory`.
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Preferably a 256x256 PNG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Inferred from `file_path` when omitted.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<LinuxEntryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chmod: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

impl LinuxOptions {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }
}

/// Windows `.lnk` settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsOptions {
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// May carry an icon index, like `C:\\file.exe,0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_mode: Option<WindowMode>,
    /// A global hotkey, like `CTRL+ALT+F`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    /// Only for installs that relocate the bundled script.
    #[serde(rename = "VBScriptPath", skip_serializing_if = "Option::is_none")]
    pub vbs_script_path: Option<String>,
}

impl WindowsOptions {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }
}

/// macOS symbolic link settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsxOptions {
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replace an existing file at the output path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

impl OsxOptions {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_options_serialize_to_document_keys() {
        let options = Options {
            only_current_os: Some(false),
            windows: Some(WindowsOptions {
                window_mode: Some(WindowMode::Maximized),
                vbs_script_path: Some("C:\\tools\\windows.vbs".into()),
                ..WindowsOptions::new("C:\\app.exe")
            }),
            linux: Some(LinuxOptions {
                entry_type: Some(LinuxEntryType::Link),
                ..LinuxOptions::new("https://example.com")
            }),
            ..Default::default()
        };

        let request = ShortcutRequest::from(options);
        assert_eq!(
            request.options(),
            &json!({
                "onlyCurrentOS": false,
                "windows": {
                    "filePath": "C:\\app.exe",
                    "windowMode": "maximized",
                    "VBScriptPath": "C:\\tools\\windows.vbs"
                },
                "linux": {
                    "filePath": "https://example.com",
                    "type": "Link"
                }
            })
        );
    }

    #[test]
    fn test_request_from_value_has_no_logger() {
        let request = ShortcutRequest::from(json!({ "verbose": false }));
        assert!(request.custom_logger().is_none());

        let request = request.with_custom_logger(|_, _| {});
        assert!(request.custom_logger().is_some());
    }
}
