//! Centralized configuration for desktop-shortcuts.
//!
//! Constants for the artifact formats, the script host contract and the
//! diagnostic stream.

/// Diagnostic output configuration.
pub struct DiagnosticsConfig;

impl DiagnosticsConfig {
    /// Printed before every message on the default diagnostic stream.
    pub const BANNER: &'static str = "_________________________\nCreate-Desktop-Shortcuts:\n";
}

/// Linux desktop entry format.
pub struct DesktopEntryConfig;

impl DesktopEntryConfig {
    pub const SHEBANG: &'static str = "#!/user/bin/env xdg-open";
    pub const GROUP_HEADER: &'static str = "[Desktop Entry]";
    pub const VERSION: &'static str = "1.0";
    pub const EXTENSION: &'static str = ".desktop";
    /// Mode applied to the entry when `chmod` is enabled.
    pub const EXECUTABLE_MODE: u32 = 0o755;
}

/// Windows script host contract.
pub struct WindowsLinkConfig;

impl WindowsLinkConfig {
    pub const SCRIPT_HOST: &'static str = "wscript";
    pub const SCRIPT_FILE_NAME: &'static str = "windows.vbs";
    /// Folder under the user cache dir the bundled script is deployed to.
    pub const SCRIPT_DIR_NAME: &'static str = "desktop-shortcuts";
    pub const EXTENSION: &'static str = ".lnk";
    /// Replacement for `"` in positional arguments; the script turns it back.
    pub const DOUBLE_QUOTE_TOKEN: &'static str = "__DOUBLEQUOTE__";
    /// Icon extensions the shell accepts, optionally followed by `,<index>`.
    pub const ICON_PATTERN: &'static str = r"^.*(?:\.exe|\.ico|\.dll)(?:,\d*)?$";
}

/// macOS symbolic link settings.
pub struct SymlinkConfig;

impl SymlinkConfig {
    pub const LINK_PROGRAM: &'static str = "ln";
    pub const EXTENSION: &'static str = "";
}

/// Path resolution settings.
pub struct PathsConfig;

impl PathsConfig {
    pub const DESKTOP_DIR_NAME: &'static str = "Desktop";
    /// File name used when the target has no usable base name (e.g. `/`).
    pub const ROOT_FILE_NAME: &'static str = "Root";
}
