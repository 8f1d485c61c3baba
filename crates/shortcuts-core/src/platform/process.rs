//! Running external programs.
//!
//! The Windows renderer spawns the script host directly and the macOS renderer
//! runs `ln` through the shell. Both go through [`CommandRunner`] so the
//! rendering logic can be exercised without touching the real OS.

use std::process::{Command, Output};
use tracing::debug;

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful, silent run.
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit status text for diagnostics.
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "signal".to_string(),
        }
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Executes external commands on behalf of the renderers.
pub trait CommandRunner {
    /// Spawn `program` with positional `args`, no shell involved.
    ///
    /// `Err` means the process could not be started at all.
    fn spawn(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput>;

    /// Run a full command line through the platform shell.
    fn shell(&self, command: &str) -> std::io::Result<CommandOutput>;
}

/// Runs commands on the real system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn spawn(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
        debug!("Spawning {} with {} arguments", program, args.len());
        let output = Command::new(program).args(args).output()?;
        Ok(output.into())
    }

    fn shell(&self, command: &str) -> std::io::Result<CommandOutput> {
        debug!("Running shell command: {}", command);

        #[cfg(not(windows))]
        let output = Command::new("sh").arg("-c").arg(command).output()?;

        #[cfg(windows)]
        let output = Command::new("cmd").arg("/C").arg(command).output()?;

        Ok(output.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_missing_program_is_err() {
        let result = SystemRunner.spawn("definitely-not-a-real-program-7f3a", &[]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_reports_exit_code() {
        let ok = SystemRunner.shell("exit 0").unwrap();
        assert!(ok.success());

        let failed = SystemRunner.shell("echo oops >&2; exit 3").unwrap();
        assert!(!failed.success());
        assert_eq!(failed.code, Some(3));
        assert_eq!(failed.stderr.trim(), "oops");
        assert_eq!(failed.status_text(), "exit code 3");
    }
}
