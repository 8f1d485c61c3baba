//! Platform-specific path utilities.
//!
//! [`Environment`] bundles the runtime facts validation depends on (the current
//! platform, home and desktop directories, environment variables) so tests can
//! substitute their own instead of touching process-global state.

use super::TargetOs;
use crate::config::PathsConfig;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

type VarLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Get the user's home directory.
///
/// Falls back to the current directory when no home can be determined.
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the user's desktop directory.
///
/// # Platform Behavior
/// Uses the `dirs` crate which handles platform differences:
/// - **Linux**: XDG `DESKTOP` user dir, or `~/Desktop`
/// - **Windows**: the known-folder Desktop (follows OneDrive redirection)
/// - **macOS**: `~/Desktop`
///
/// Falls back to `<home>/Desktop`.
pub fn desktop_dir() -> PathBuf {
    dirs::desktop_dir().unwrap_or_else(|| home_dir().join(PathsConfig::DESKTOP_DIR_NAME))
}

/// Whether `path` is absolute under Windows rules, checked from any host.
///
/// Rooted (`\x`, `/x`), UNC (`\\server`) and drive-absolute (`C:\x`, `C:/x`) paths
/// are absolute. Drive-relative `C:x` is not.
pub fn is_windows_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes {
        [b'\\' | b'/', ..] => true,
        [drive, b':', b'\\' | b'/', ..] => drive.is_ascii_alphabetic(),
        _ => false,
    }
}

/// Runtime facts used while validating options.
#[derive(Clone)]
pub struct Environment {
    platform: Option<TargetOs>,
    platform_name: String,
    home_dir: PathBuf,
    desktop_dir: PathBuf,
    vars: VarLookup,
}

impl Environment {
    /// Detect the environment of the running process.
    pub fn detect() -> Self {
        let env = Self {
            platform: TargetOs::current(),
            platform_name: super::current_platform().to_string(),
            home_dir: home_dir(),
            desktop_dir: desktop_dir(),
            vars: Arc::new(|name: &str| std::env::var(name).ok()),
        };
        debug!(
            "Detected environment: platform={}, home={}, desktop={}",
            env.platform_name,
            env.home_dir.display(),
            env.desktop_dir.display()
        );
        env
    }

    /// Build an environment explicitly. Environment variables resolve to nothing
    /// until [`Environment::with_vars`] is called.
    pub fn new(
        platform: Option<TargetOs>,
        home_dir: impl Into<PathBuf>,
        desktop_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            platform,
            platform_name: platform
                .map(|p| p.key().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            home_dir: home_dir.into(),
            desktop_dir: desktop_dir.into(),
            vars: Arc::new(|_: &str| None),
        }
    }

    /// Replace the environment variable lookup.
    pub fn with_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.vars = Arc::new(lookup);
        self
    }

    /// Override the reported platform name used in unsupported-platform diagnostics.
    pub fn with_platform_name(mut self, name: impl Into<String>) -> Self {
        self.platform_name = name.into();
        self
    }

    pub fn platform(&self) -> Option<TargetOs> {
        self.platform
    }

    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    pub fn home_dir(&self) -> &PathBuf {
        &self.home_dir
    }

    pub fn desktop_dir(&self) -> &PathBuf {
        &self.desktop_dir
    }

    /// Look up an environment variable.
    pub fn var(&self, name: &str) -> Option<String> {
        (self.vars)(name)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("platform", &self.platform)
            .field("platform_name", &self.platform_name)
            .field("home_dir", &self.home_dir)
            .field("desktop_dir", &self.desktop_dir)
            .finish()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::detect()
    }
}
