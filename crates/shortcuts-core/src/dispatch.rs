//! Runs the renderers for every surviving target.

use crate::diagnostics::Detail;
use crate::platform::{CommandRunner, Environment, TargetOs};
use crate::shortcut::{
    make_linux_shortcut, make_osx_shortcut, make_windows_shortcut, Shortcut, ValidatedRequest,
};
use tracing::debug;

/// Render the shortcuts in `request`. Returns true only if every attempted
/// shortcut was created.
///
/// With `only_current_os` set, only the shortcut for the current platform is
/// rendered. Otherwise every present target is rendered in
/// [`TargetOs::ALL`] order, and one failure does not stop the others.
pub fn run_correct_platforms(
    request: &ValidatedRequest,
    env: &Environment,
    runner: &dyn CommandRunner,
) -> bool {
    let reporter = &request.reporter;

    if request.is_empty() {
        reporter.report_with(
            "No shortcuts were created due to lack of accurate details passed in to options object",
            Detail::Request(request.snapshot()),
        );
        return false;
    }

    if request.only_current_os {
        return match env.platform().and_then(|target| request.shortcut(target)) {
            Some(shortcut) => render(shortcut, request, runner),
            None => {
                debug!("No shortcut for platform {}", env.platform_name());
                reporter.report_with(
                    "Unsupported platform. This library only supports process.platform of \"win32\", \"linux\" and \"darwin\".",
                    Detail::Request(request.snapshot()),
                );
                false
            }
        };
    }

    let mut success = true;
    for target in TargetOs::ALL {
        if let Some(shortcut) = request.shortcut(target) {
            success &= render(shortcut, request, runner);
        }
    }
    success
}

fn render(shortcut: Shortcut<'_>, request: &ValidatedRequest, runner: &dyn CommandRunner) -> bool {
    debug!("Rendering {} shortcut", shortcut.target());
    let reporter = &request.reporter;

    match shortcut {
        Shortcut::Windows(windows) => make_windows_shortcut(windows, reporter, runner),
        Shortcut::Linux(linux) => make_linux_shortcut(linux, reporter),
        Shortcut::Osx(osx) => make_osx_shortcut(osx, reporter, runner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CustomLogger, Reporter};
    use crate::platform::CommandOutput;
    use crate::shortcut::OsxShortcut;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct NoopRunner;

    impl CommandRunner for NoopRunner {
        fn spawn(&self, _program: &str, _args: &[String]) -> io::Result<CommandOutput> {
            Ok(CommandOutput::ok())
        }

        fn shell(&self, _command: &str) -> io::Result<CommandOutput> {
            Ok(CommandOutput::ok())
        }
    }

    fn request(only_current_os: bool) -> (ValidatedRequest, Arc<Mutex<Vec<(String, bool)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let logger: CustomLogger = Arc::new(move |message: &str, detail: Option<&Detail>| {
            sink.lock()
                .unwrap()
                .push((message.to_string(), matches!(detail, Some(Detail::Request(_)))));
        });

        let request = ValidatedRequest {
            only_current_os,
            verbose: true,
            windows: None,
            linux: None,
            osx: None,
            reporter: Reporter::new(true, Some(logger)),
        };
        (request, seen)
    }

    #[test]
    fn test_nothing_to_create() {
        let (validated, seen) = request(true);
        let env = Environment::new(Some(TargetOs::Linux), "/h", "/h/Desktop");

        assert!(!run_correct_platforms(&validated, &env, &NoopRunner));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(
                "No shortcuts were created due to lack of accurate details passed in to options object"
                    .to_string(),
                true
            )]
        );
    }

    #[test]
    fn test_current_platform_without_shortcut() {
        let (mut validated, seen) = request(true);
        validated.osx = Some(OsxShortcut {
            file_path: "/Applications/App.app".into(),
            output_path: PathBuf::from("/Users/u/Desktop/App"),
            name: None,
            overwrite: false,
        });
        let env = Environment::new(None, "/h", "/h/Desktop").with_platform_name("freebsd");

        assert!(!run_correct_platforms(&validated, &env, &NoopRunner));
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].0.starts_with("Unsupported platform."));
        assert!(seen[0].1);
    }
}
