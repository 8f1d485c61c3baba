//! macOS symbolic link validation.

use super::fields::{
    default_boolean, display_value, resolve_output_location, truthy_string, Context, Fields,
};
use crate::resolve::resolve_executable_on_search_path;
use crate::shortcut::OsxShortcut;
use std::path::Path;

/// Validate the `osx` subtree. `None` means the target was dropped.
pub(crate) fn validate(fields: Fields, ctx: &Context<'_>) -> Option<OsxShortcut> {
    let file_path = truthy_string(&fields, "filePath")
        .and_then(|raw| ctx.resolve_path(raw))
        .map(|path| resolve_executable_on_search_path(&path));

    let file_path = match file_path {
        Some(file_path) if Path::new(&file_path).exists() => file_path,
        other => {
            let shown = other.unwrap_or_else(|| display_value(fields.get("filePath")));
            ctx.report(&format!("OSX filePath does not exist: {}", shown));
            return None;
        }
    };

    let location = resolve_output_location(&fields, &file_path, ctx);
    let overwrite = default_boolean(&fields, "overwrite", false, ctx);

    Some(OsxShortcut {
        file_path,
        output_path: location.output_path,
        name: location.name,
        overwrite,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Reporter;
    use crate::platform::{Environment, TargetOs};
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn run(env: &Environment, value: Value) -> Option<OsxShortcut> {
        let reporter = Reporter::silent();
        let ctx = Context {
            env,
            reporter: &reporter,
            target: TargetOs::Osx,
        };
        match value {
            Value::Object(fields) => validate(fields, &ctx),
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_link_has_no_extension() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("Calculator.app");
        fs::create_dir(&app).unwrap();
        let env = Environment::new(Some(TargetOs::Osx), temp_dir.path(), temp_dir.path());

        let shortcut = run(&env, json!({ "filePath": "~/Calculator.app" })).unwrap();

        assert_eq!(shortcut.file_path, app.to_string_lossy());
        assert_eq!(shortcut.output_path, temp_dir.path().join("Calculator"));
        assert!(!shortcut.overwrite);
    }

    #[test]
    fn test_missing_target_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let env = Environment::new(Some(TargetOs::Osx), temp_dir.path(), temp_dir.path());

        assert!(run(&env, json!({ "filePath": "~/Nothing.app" })).is_none());
        assert!(run(&env, json!({ "overwrite": true })).is_none());
    }
}
