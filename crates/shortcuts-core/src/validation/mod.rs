//! Options validation.
//!
//! Turns the loosely typed options document into a [`ValidatedRequest`].
//! Nothing here fails: a target whose required fields are unusable is dropped
//! with a diagnostic, optional fields that are wrong are reported and removed
//! or defaulted. Each target moves through the same stages:
//!
//! 1. target checked (`filePath` resolved and verified)
//! 2. output location resolved (`outputPath` folder + file name + extension)
//! 3. remaining fields normalized
//!
//! Targets are validated Linux, Windows, then macOS.

mod fields;
mod linux;
mod osx;
mod windows;

use crate::diagnostics::Reporter;
use crate::options::ShortcutRequest;
use crate::platform::{Environment, TargetOs};
use crate::shortcut::ValidatedRequest;
use fields::{is_truthy, Context, Fields};
use serde_json::{Map, Value};
use tracing::debug;

/// Validate a request against the given environment.
pub fn validate_request(request: &ShortcutRequest, env: &Environment) -> ValidatedRequest {
    let empty = Map::new();
    let options = request.options().as_object().unwrap_or(&empty);

    let verbose = options.get("verbose").and_then(Value::as_bool).unwrap_or(true);
    let only_current_os = options
        .get("onlyCurrentOS")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    let reporter = Reporter::new(verbose, request.custom_logger().cloned());

    if options.get("customLogger").is_some_and(is_truthy) {
        reporter.report("Optional customLogger must be a type of function.");
    }

    let subtree = |target: TargetOs| -> Option<Fields> {
        let raw = options.get(target.key()).filter(|value| is_truthy(value))?;

        if only_current_os && env.platform() != Some(target) {
            debug!("Skipping {} options, not the current platform", target);
            return None;
        }

        Some(raw.as_object().cloned().unwrap_or_default())
    };

    let shared = &reporter;
    let context = |target: TargetOs| Context {
        env,
        reporter: shared,
        target,
    };

    let linux = subtree(TargetOs::Linux)
        .and_then(|fields| linux::validate(fields, &context(TargetOs::Linux)));
    let windows = subtree(TargetOs::Windows)
        .and_then(|fields| windows::validate(fields, &context(TargetOs::Windows)));
    let osx = subtree(TargetOs::Osx)
        .and_then(|fields| osx::validate(fields, &context(TargetOs::Osx)));

    debug!(
        "Validated options: windows={}, linux={}, osx={}",
        windows.is_some(),
        linux.is_some(),
        osx.is_some()
    );

    ValidatedRequest {
        only_current_os,
        verbose,
        windows,
        linux,
        osx,
        reporter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Detail;
    use serde_json::json;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn capture(options: Value) -> (ShortcutRequest, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let request = ShortcutRequest::new(options).with_custom_logger(
            move |message: &str, _: Option<&Detail>| {
                sink.lock().unwrap().push(message.to_string());
            },
        );
        (request, seen)
    }

    #[test]
    fn test_globals_default_to_true() {
        let env = Environment::new(Some(TargetOs::Linux), "/h", "/h/Desktop");

        let validated = validate_request(&ShortcutRequest::new(json!({})), &env);
        assert!(validated.verbose);
        assert!(validated.only_current_os);
        assert!(validated.is_empty());

        let validated = validate_request(
            &ShortcutRequest::new(json!({ "verbose": "loud", "onlyCurrentOS": 1 })),
            &env,
        );
        assert!(validated.verbose);
        assert!(validated.only_current_os);

        let validated = validate_request(&ShortcutRequest::new(json!(null)), &env);
        assert!(validated.is_empty());
    }

    #[test]
    fn test_custom_logger_key() {
        let env = Environment::new(Some(TargetOs::Linux), "/h", "/h/Desktop");

        let (request, seen) = capture(json!({ "customLogger": "console.log" }));
        validate_request(&request, &env);
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["Optional customLogger must be a type of function.".to_string()]
        );

        let (request, seen) = capture(json!({ "customLogger": false }));
        validate_request(&request, &env);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_only_current_os_filters_silently() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("app");
        fs::write(&target, "").unwrap();
        let env = Environment::new(Some(TargetOs::Linux), temp_dir.path(), temp_dir.path());
        let file_path = target.to_string_lossy().into_owned();

        let (request, seen) = capture(json!({
            "windows": { "filePath": "C:\\nope.exe" },
            "linux": { "filePath": file_path },
            "osx": { "filePath": "/Applications/Nope.app" }
        }));
        let validated = validate_request(&request, &env);

        assert!(validated.linux.is_some());
        assert!(validated.windows.is_none());
        assert!(validated.osx.is_none());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_all_platforms_validates_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let env = Environment::new(Some(TargetOs::Linux), temp_dir.path(), temp_dir.path());

        let (request, seen) = capture(json!({
            "onlyCurrentOS": false,
            "windows": { "filePath": "C:\\nope.exe" },
            "linux": {},
            "osx": { "filePath": "/Applications/Nope.app" }
        }));
        let validated = validate_request(&request, &env);

        assert!(validated.is_empty());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "LINUX filePath (with type of \"Application\") must exist and cannot be a folder: undefined"
                    .to_string(),
                "WINDOWS filePath does not exist: C:\\nope.exe".to_string(),
                "OSX filePath does not exist: /Applications/Nope.app".to_string(),
            ]
        );
    }

    #[test]
    fn test_falsy_subtree_ignored() {
        let env = Environment::new(Some(TargetOs::Linux), "/h", "/h/Desktop");
        let (request, seen) = capture(json!({ "linux": false, "windows": null }));

        let validated = validate_request(&request, &env);

        assert!(validated.is_empty());
        assert!(seen.lock().unwrap().is_empty());
    }
}
