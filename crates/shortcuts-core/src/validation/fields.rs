//! Field-level checks shared by every target.
//!
//! Each helper reads one key from a target subtree and either returns a
//! normalized value or reports why the field was dropped.

use crate::diagnostics::Reporter;
use crate::platform::{Environment, TargetOs};
use crate::resolve::{derived_file_name, resolve_environment_placeholders, resolve_tilde};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw subtree of one target in the options document.
pub(crate) type Fields = Map<String, Value>;

/// Borrowed state every stage needs.
pub(crate) struct Context<'a> {
    pub env: &'a Environment,
    pub reporter: &'a Reporter,
    pub target: TargetOs,
}

impl Context<'_> {
    pub fn report(&self, message: &str) {
        self.reporter.report(message);
    }

    /// Resolve `~` for POSIX targets, `%VAR%` tokens for Windows.
    pub fn resolve_path(&self, path: &str) -> Option<String> {
        match self.target {
            TargetOs::Windows => resolve_environment_placeholders(path, |name| self.env.var(name)),
            TargetOs::Linux | TargetOs::Osx => resolve_tilde(path, self.env.home_dir()),
        }
    }
}

/// Loose truthiness: `null`, `false`, `0` and `""` count as unset.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// How a raw value appears inside a diagnostic.
pub(crate) fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The non-empty string under `key`, if the field is truthy and a string.
pub(crate) fn truthy_string<'f>(fields: &'f Fields, key: &str) -> Option<&'f str> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// An optional string field. Present but not a string is reported and dropped.
pub(crate) fn optional_string(fields: &Fields, key: &str, ctx: &Context<'_>) -> Option<String> {
    match fields.get(key) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            ctx.report(&format!(
                "Optional {} {} must be a string",
                ctx.target.label(),
                key
            ));
            None
        }
    }
}

/// A boolean field with a default. Present but not a boolean is reported.
pub(crate) fn default_boolean(
    fields: &Fields,
    key: &str,
    default: bool,
    ctx: &Context<'_>,
) -> bool {
    match fields.get(key) {
        None => default,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            ctx.report(&format!(
                "Optional {} {} must be a boolean. Defaulting to {}",
                ctx.target.label(),
                key,
                default
            ));
            default
        }
    }
}

/// Where the shortcut will be written, plus the caller's `name`.
pub(crate) struct OutputLocation {
    pub output_path: PathBuf,
    pub name: Option<String>,
}

/// Turn `outputPath` (a folder) into the full artifact path.
///
/// The folder must exist, otherwise the desktop is used. The file name is
/// `name` when given, else the base name of `file_path`, plus the target's
/// extension.
pub(crate) fn resolve_output_location(
    fields: &Fields,
    file_path: &str,
    ctx: &Context<'_>,
) -> OutputLocation {
    let name = optional_string(fields, "name", ctx);

    let folder = fields
        .get("outputPath")
        .filter(|value| is_truthy(value))
        .and_then(|value| {
            let folder = value
                .as_str()
                .and_then(|raw| ctx.resolve_path(raw))
                .map(PathBuf::from)
                .filter(|path| path.is_dir());
            if folder.is_none() {
                ctx.report(&format!(
                    "Optional {} outputPath must exist and be a folder. Defaulting to desktop.",
                    ctx.target.label()
                ));
            }
            folder
        })
        .unwrap_or_else(|| ctx.env.desktop_dir().clone());

    let file_name = match name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => derived_file_name(file_path),
    };

    let output_path = folder.join(format!("{}{}", file_name, ctx.target.shortcut_extension()));
    debug!(
        "Resolved {} output path: {}",
        ctx.target.label(),
        output_path.display()
    );

    OutputLocation { output_path, name }
}

/// Folder the artifact will be written to, used to anchor relative icons.
pub(crate) fn output_folder(output_path: &Path) -> PathBuf {
    output_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
