//! macOS shortcuts as symbolic links.

use super::types::OsxShortcut;
use crate::config::SymlinkConfig;
use crate::diagnostics::{Detail, Reporter};
use crate::error::{Result, ShortcutError};
use crate::platform::CommandRunner;
use std::path::Path;
use tracing::{debug, info};

/// What happened when a link was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Created,
    /// Something already sits at the output path and `overwrite` is off.
    Skipped,
}

/// `ln [-f] -s "<source>" "<destination>"`.
pub fn link_command(shortcut: &OsxShortcut) -> String {
    let mut parts = vec![SymlinkConfig::LINK_PROGRAM.to_string()];
    if shortcut.overwrite {
        parts.push("-f".to_string());
    }
    parts.push("-s".to_string());
    parts.push(format!("\"{}\"", shortcut.file_path));
    parts.push(format!("\"{}\"", shortcut.output_path.display()));
    parts.join(" ")
}

/// Anything at `path`, including a dangling link.
fn occupied(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Create the link through the shell.
pub fn create_symlink(shortcut: &OsxShortcut, runner: &dyn CommandRunner) -> Result<LinkOutcome> {
    if !shortcut.overwrite && occupied(&shortcut.output_path) {
        debug!(
            "Not replacing existing {}",
            shortcut.output_path.display()
        );
        return Ok(LinkOutcome::Skipped);
    }

    let command = link_command(shortcut);
    let output = runner
        .shell(&command)
        .map_err(|source| ShortcutError::SpawnFailed {
            program: SymlinkConfig::LINK_PROGRAM.to_string(),
            source,
        })?;

    if !output.success() {
        return Err(ShortcutError::CommandFailed {
            command,
            status: output.status_text(),
            stderr: output.stderr.trim().to_string(),
        });
    }

    Ok(LinkOutcome::Created)
}

/// Create the macOS shortcut, reporting any failure. Returns success.
///
/// A skipped link is reported but still counts as success.
pub fn make_osx_shortcut(
    shortcut: &OsxShortcut,
    reporter: &Reporter,
    runner: &dyn CommandRunner,
) -> bool {
    match create_symlink(shortcut, runner) {
        Ok(LinkOutcome::Created) => {
            info!("Created macOS shortcut at {}", shortcut.output_path.display());
            true
        }
        Ok(LinkOutcome::Skipped) => {
            reporter.report(
                "Could not create OSX shortcut because matching outputPath already exists and overwrite is false.",
            );
            true
        }
        Err(e) => {
            reporter.report_with(
                &format!(
                    "ERROR: Could not create OSX shortcut.\nTARGET: {}\nPATH: {}\n",
                    shortcut.file_path,
                    shortcut.output_path.display()
                ),
                Detail::Error(e),
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::CommandOutput;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct ShellRecorder {
        commands: RefCell<Vec<String>>,
        result: fn() -> io::Result<CommandOutput>,
    }

    impl ShellRecorder {
        fn new(result: fn() -> io::Result<CommandOutput>) -> Self {
            Self {
                commands: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl CommandRunner for ShellRecorder {
        fn spawn(&self, _program: &str, _args: &[String]) -> io::Result<CommandOutput> {
            unreachable!("the macOS renderer only uses the shell")
        }

        fn shell(&self, command: &str) -> io::Result<CommandOutput> {
            self.commands.borrow_mut().push(command.to_string());
            (self.result)()
        }
    }

    fn shortcut(output_path: PathBuf, overwrite: bool) -> OsxShortcut {
        OsxShortcut {
            file_path: "/Applications/Sublime Text.app".into(),
            output_path,
            name: None,
            overwrite,
        }
    }

    #[test]
    fn test_link_command() {
        let link = shortcut(PathBuf::from("/Users/owner/Desktop/Sublime Text"), false);
        assert_eq!(
            link_command(&link),
            "ln -s \"/Applications/Sublime Text.app\" \"/Users/owner/Desktop/Sublime Text\""
        );

        let link = shortcut(PathBuf::from("/Users/owner/Desktop/Sublime Text"), true);
        assert_eq!(
            link_command(&link),
            "ln -f -s \"/Applications/Sublime Text.app\" \"/Users/owner/Desktop/Sublime Text\""
        );
    }

    #[test]
    fn test_existing_output_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("Sublime Text");
        std::fs::write(&output, "").unwrap();
        let runner = ShellRecorder::new(|| Ok(CommandOutput::ok()));

        assert_eq!(
            create_symlink(&shortcut(output.clone(), false), &runner).unwrap(),
            LinkOutcome::Skipped
        );
        assert!(make_osx_shortcut(&shortcut(output, false), &Reporter::silent(), &runner));
        assert!(runner.commands.borrow().is_empty());
    }

    #[test]
    fn test_overwrite_runs_forced_link() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("Sublime Text");
        std::fs::write(&output, "").unwrap();
        let runner = ShellRecorder::new(|| Ok(CommandOutput::ok()));

        assert!(make_osx_shortcut(&shortcut(output, true), &Reporter::silent(), &runner));

        let commands = runner.commands.borrow();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].starts_with("ln -f -s "));
    }

    #[test]
    fn test_failed_command_reported() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ShellRecorder::new(|| {
            Ok(CommandOutput {
                code: Some(1),
                stdout: String::new(),
                stderr: "ln: Permission denied\n".into(),
            })
        });
        let link = shortcut(temp_dir.path().join("App"), false);

        match create_symlink(&link, &runner).unwrap_err() {
            ShortcutError::CommandFailed { status, stderr, .. } => {
                assert_eq!(status, "exit code 1");
                assert_eq!(stderr, "ln: Permission denied");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!make_osx_shortcut(&link, &Reporter::silent(), &runner));
    }

    #[cfg(unix)]
    #[test]
    fn test_real_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("Target.app");
        std::fs::create_dir(&source).unwrap();
        let link = OsxShortcut {
            file_path: source.to_string_lossy().into_owned(),
            output_path: temp_dir.path().join("Target"),
            name: None,
            overwrite: false,
        };

        assert!(make_osx_shortcut(
            &link,
            &Reporter::silent(),
            &crate::platform::SystemRunner
        ));
        assert_eq!(std::fs::read_link(&link.output_path).unwrap(), source);
    }
}
