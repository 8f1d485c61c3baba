//! Caller-facing diagnostic reporting.
//!
//! Validation and rendering never fail loudly. Everything they have to say goes
//! through a [`Reporter`], which forwards to the caller's logger callback when one
//! was supplied, or to stderr behind a fixed banner. `verbose = false` silences
//! both. Every message is mirrored to `tracing` at debug level regardless.

use crate::config::DiagnosticsConfig;
use crate::error::ShortcutError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Caller-supplied diagnostic sink: `(message, detail)`.
pub type CustomLogger = Arc<dyn Fn(&str, Option<&Detail>) + Send + Sync>;

/// Extra context attached to some diagnostics.
#[derive(Debug)]
pub enum Detail {
    /// The OS error behind a failed write, chmod, spawn or shell command.
    Error(ShortcutError),
    /// Snapshot of the validated request.
    Request(Value),
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::Error(err) => write!(f, "{}", err),
            Detail::Request(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                write!(f, "{}", pretty)
            }
        }
    }
}

/// Routes diagnostics to the custom logger or stderr.
#[derive(Clone)]
pub struct Reporter {
    verbose: bool,
    logger: Option<CustomLogger>,
}

impl Reporter {
    pub fn new(verbose: bool, logger: Option<CustomLogger>) -> Self {
        Self { verbose, logger }
    }

    /// A reporter that only mirrors to `tracing`.
    pub fn silent() -> Self {
        Self::new(false, None)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn has_custom_logger(&self) -> bool {
        self.logger.is_some()
    }

    /// Report a message without detail.
    pub fn report(&self, message: &str) {
        self.emit(message, None);
    }

    /// Report a message with an attached detail.
    pub fn report_with(&self, message: &str, detail: Detail) {
        self.emit(message, Some(&detail));
    }

    fn emit(&self, message: &str, detail: Option<&Detail>) {
        debug!(detail = ?detail, "{}", message);

        if !self.verbose {
            return;
        }

        match &self.logger {
            Some(logger) => logger(message, detail),
            None => match detail {
                Some(detail) => eprintln!("{}{}\n{}", DiagnosticsConfig::BANNER, message, detail),
                None => eprintln!("{}{}", DiagnosticsConfig::BANNER, message),
            },
        }
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("verbose", &self.verbose)
            .field("custom_logger", &self.logger.is_some())
            .finish()
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn capturing() -> (CustomLogger, Arc<Mutex<Vec<(String, Option<String>)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let logger: CustomLogger = Arc::new(move |message: &str, detail: Option<&Detail>| {
            sink.lock()
                .unwrap()
                .push((message.to_string(), detail.map(|d| d.to_string())));
        });
        (logger, seen)
    }

    #[test]
    fn test_custom_logger_receives_message_and_detail() {
        let (logger, seen) = capturing();
        let reporter = Reporter::new(true, Some(logger));

        reporter.report("first");
        reporter.report_with(
            "second",
            Detail::Error(ShortcutError::ScriptNotFound("/opt/windows.vbs".into())),
        );

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("first".to_string(), None));
        assert_eq!(seen[1].0, "second");
        assert_eq!(seen[1].1.as_deref(), Some("Script host resource not found: /opt/windows.vbs"));
    }

    #[test]
    fn test_not_verbose_skips_custom_logger() {
        let (logger, seen) = capturing();
        let reporter = Reporter::new(false, Some(logger));

        reporter.report("ignored");

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_request_detail_is_pretty_json() {
        let detail = Detail::Request(serde_json::json!({ "verbose": true }));
        assert_eq!(detail.to_string(), "{\n  \"verbose\": true\n}");
    }

    #[test]
    fn test_silent_reporter() {
        let reporter = Reporter::silent();
        assert!(!reporter.verbose());
        assert!(!reporter.has_custom_logger());
        // Must not panic or print.
        reporter.report("nothing to see");
    }
}
