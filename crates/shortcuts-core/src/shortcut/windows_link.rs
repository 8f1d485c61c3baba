//! Windows `.lnk` creation through the script host.
//!
//! The bundled `windows.vbs` drives `WScript.Shell.CreateShortcut`. It is
//! compiled into the library and deployed to the user cache dir the first time
//! a shortcut needs it. This module prepares its positional arguments and
//! spawns the host.

use super::types::WindowsShortcut;
use crate::config::WindowsLinkConfig;
use crate::diagnostics::{Detail, Reporter};
use crate::error::{Result, ShortcutError};
use crate::platform::{CommandOutput, CommandRunner};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Contents of the bundled `windows.vbs`.
pub const SCRIPT_SOURCE: &str = include_str!("../../resources/windows.vbs");

/// Folder the bundled script is deployed to.
pub fn script_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(WindowsLinkConfig::SCRIPT_DIR_NAME)
}

/// Deploy the bundled script into `dir`. An up-to-date copy is left alone.
pub fn deploy_script(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| ShortcutError::io_with_path(e, dir))?;

    let script = dir.join(WindowsLinkConfig::SCRIPT_FILE_NAME);
    if fs::read_to_string(&script).ok().as_deref() != Some(SCRIPT_SOURCE) {
        fs::write(&script, SCRIPT_SOURCE).map_err(|e| ShortcutError::io_with_path(e, &script))?;
        debug!("Deployed {} to {}", WindowsLinkConfig::SCRIPT_FILE_NAME, script.display());
    }

    Ok(script)
}

/// The bundled script, deployed to [`script_dir`].
pub fn default_script_path() -> Result<PathBuf> {
    deploy_script(&script_dir())
}

/// Script the host will run for this shortcut: `VBScriptPath` when given,
/// otherwise the deployed bundled script.
///
/// A failed deployment is reported as a missing script.
pub fn script_path(shortcut: &WindowsShortcut) -> Result<PathBuf> {
    match &shortcut.vbs_script_path {
        Some(path) => Ok(path.clone()),
        None => default_script_path().map_err(|e| {
            warn!("Failed to deploy {}: {}", WindowsLinkConfig::SCRIPT_FILE_NAME, e);
            ShortcutError::ScriptNotFound(script_dir().join(WindowsLinkConfig::SCRIPT_FILE_NAME))
        }),
    }
}

/// Icon used when none was given: the target itself, indexed for binaries.
pub fn default_icon(file_path: &str) -> String {
    if file_path.ends_with(".exe") || file_path.ends_with(".dll") {
        format!("{},0", file_path)
    } else {
        file_path.to_string()
    }
}

/// Positional arguments can't carry raw `"`; the script swaps the token back.
pub fn escape_double_quotes(value: &str) -> String {
    value.replace('"', WindowsLinkConfig::DOUBLE_QUOTE_TOKEN)
}

/// Arguments for the script host, in the order `windows.vbs` reads them:
/// script, output, target, arguments, comment, working directory, icon,
/// window style, hotkey.
pub fn script_host_arguments(shortcut: &WindowsShortcut, script: &Path) -> Vec<String> {
    let text = |value: &Option<String>| escape_double_quotes(value.as_deref().unwrap_or_default());

    let icon = shortcut
        .icon
        .clone()
        .filter(|icon| !icon.is_empty())
        .unwrap_or_else(|| default_icon(&shortcut.file_path));

    vec![
        script.to_string_lossy().into_owned(),
        shortcut.output_path.to_string_lossy().into_owned(),
        shortcut.file_path.clone(),
        text(&shortcut.arguments),
        text(&shortcut.comment),
        shortcut.working_directory.clone().unwrap_or_default(),
        icon,
        shortcut.window_mode.code().to_string(),
        text(&shortcut.hotkey),
    ]
}

/// Run the script host for `shortcut`.
///
/// Only a missing script or a failed spawn is an error; the host's own exit
/// status is returned for the caller to inspect.
pub fn create_windows_link(
    shortcut: &WindowsShortcut,
    runner: &dyn CommandRunner,
) -> Result<CommandOutput> {
    let script = script_path(shortcut)?;
    if !script.exists() {
        return Err(ShortcutError::ScriptNotFound(script));
    }

    let args = script_host_arguments(shortcut, &script);
    debug!("Invoking {} with {:?}", WindowsLinkConfig::SCRIPT_HOST, args);

    runner
        .spawn(WindowsLinkConfig::SCRIPT_HOST, &args)
        .map_err(|source| ShortcutError::SpawnFailed {
            program: WindowsLinkConfig::SCRIPT_HOST.to_string(),
            source,
        })
}

/// Create the Windows shortcut, reporting any failure. Returns success.
pub fn make_windows_shortcut(
    shortcut: &WindowsShortcut,
    reporter: &Reporter,
    runner: &dyn CommandRunner,
) -> bool {
    match create_windows_link(shortcut, runner) {
        Ok(output) => {
            if output.success() {
                info!(
                    "Created Windows shortcut at {}",
                    shortcut.output_path.display()
                );
            } else {
                warn!(
                    "{} finished with {} for {}: {}",
                    WindowsLinkConfig::SCRIPT_HOST,
                    output.status_text(),
                    shortcut.output_path.display(),
                    output.stderr.trim()
                );
            }
            true
        }
        Err(ShortcutError::ScriptNotFound(path)) => {
            debug!("Script host resource missing at {}", path.display());
            reporter.report("Could not locate required \"windows.vbs\" file.");
            false
        }
        Err(e) => {
            reporter.report_with(
                &format!(
                    "ERROR: Could not create WINDOWS shortcut.\nTARGET: {}\nPATH: {}\n",
                    shortcut.file_path,
                    shortcut.output_path.display()
                ),
                Detail::Error(e),
            );
            false
        }
    }
}
