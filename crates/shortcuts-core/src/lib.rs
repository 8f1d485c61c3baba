//! Desktop Shortcuts - cross-platform desktop shortcut creation.
//!
//! One options document describes a shortcut for any of Windows (`.lnk`),
//! Linux (`.desktop`) and macOS (symbolic link). The document is validated,
//! unusable targets are dropped with a diagnostic, and the rest are rendered.
//! Nothing panics or returns an error on bad input: the result is a single
//! success flag, and the details go to the caller's logger or stderr.
//!
//! # Example
//!
//! ```rust,no_run
//! use desktop_shortcuts::{create_desktop_shortcuts, LinuxOptions, Options};
//!
//! let options = Options {
//!     linux: Some(LinuxOptions {
//!         name: Some("My App".into()),
//!         icon: Some("~/my-app/icon.png".into()),
//!         ..LinuxOptions::new("~/my-app/run.sh")
//!     }),
//!     ..Default::default()
//! };
//!
//! if !create_desktop_shortcuts(options) {
//!     eprintln!("Shortcut was not created");
//! }
//! ```

pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod options;
pub mod platform;
pub mod resolve;
pub mod shortcut;
pub mod validation;

// Re-export commonly used types
pub use diagnostics::{CustomLogger, Detail, Reporter};
pub use error::{Result, ShortcutError};
pub use options::{LinuxOptions, Options, OsxOptions, ShortcutRequest, WindowsOptions};
pub use platform::{CommandOutput, CommandRunner, Environment, SystemRunner, TargetOs};
pub use shortcut::{
    LinuxEntryType, LinuxShortcut, OsxShortcut, ValidatedRequest, WindowMode, WindowsShortcut,
};
pub use validation::validate_request;

use tracing::debug;

/// Create the shortcuts described by `request` on this machine.
///
/// Returns true only if every attempted shortcut was created.
pub fn create_desktop_shortcuts(request: impl Into<ShortcutRequest>) -> bool {
    create_desktop_shortcuts_with(request, &Environment::detect(), &SystemRunner)
}

/// [`create_desktop_shortcuts`] against an explicit environment and command runner.
pub fn create_desktop_shortcuts_with(
    request: impl Into<ShortcutRequest>,
    env: &Environment,
    runner: &dyn CommandRunner,
) -> bool {
    let request = request.into();
    debug!("Creating desktop shortcuts: {:?}", request);

    let validated = validate_request(&request, env);
    dispatch::run_correct_platforms(&validated, env, runner)
}
