//! Windows `.lnk` validation.

use super::fields::{
    display_value, optional_string, output_folder, resolve_output_location, truthy_string,
    Context, Fields, OutputLocation,
};
use crate::config::WindowsLinkConfig;
use crate::platform::is_windows_absolute;
use crate::resolve::resolve_executable_on_search_path;
use crate::shortcut::{WindowMode, WindowsShortcut};
use regex::Regex;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::OnceLock;

fn icon_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(WindowsLinkConfig::ICON_PATTERN).expect("icon pattern is valid")
    })
}

fn icon_index_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r",\d*$").expect("icon index pattern is valid"))
}

struct CheckedTarget {
    fields: Fields,
    file_path: String,
}

struct Located {
    target: CheckedTarget,
    location: OutputLocation,
}

/// Validate the `windows` subtree. `None` means the target was dropped.
pub(crate) fn validate(fields: Fields, ctx: &Context<'_>) -> Option<WindowsShortcut> {
    let target = check_target(fields, ctx)?;
    let located = locate(target, ctx);
    Some(normalize(located, ctx))
}

fn check_target(fields: Fields, ctx: &Context<'_>) -> Option<CheckedTarget> {
    let file_path = truthy_string(&fields, "filePath")
        .and_then(|raw| ctx.resolve_path(raw))
        .map(|path| resolve_executable_on_search_path(&path));

    match file_path {
        Some(file_path) if Path::new(&file_path).exists() => {
            Some(CheckedTarget { fields, file_path })
        }
        other => {
            let shown = other.unwrap_or_else(|| display_value(fields.get("filePath")));
            ctx.report(&format!("WINDOWS filePath does not exist: {}", shown));
            None
        }
    }
}

fn locate(target: CheckedTarget, ctx: &Context<'_>) -> Located {
    let location = resolve_output_location(&target.fields, &target.file_path, ctx);
    Located { target, location }
}

fn normalize(located: Located, ctx: &Context<'_>) -> WindowsShortcut {
    let Located { target, location } = located;
    let fields = &target.fields;

    let window_mode = window_mode(fields, ctx);
    let icon = icon(fields, &location.output_path, ctx);
    let comment = comment(fields, ctx);
    let working_directory = working_directory(fields, ctx);
    let arguments = optional_string(fields, "arguments", ctx);
    let hotkey = optional_string(fields, "hotkey", ctx);
    let vbs_script_path = optional_string(fields, "VBScriptPath", ctx)
        .filter(|path| !path.is_empty())
        .and_then(|path| ctx.resolve_path(&path))
        .map(PathBuf::from);

    WindowsShortcut {
        file_path: target.file_path,
        output_path: location.output_path,
        name: location.name,
        comment,
        icon,
        arguments,
        window_mode,
        hotkey,
        working_directory,
        vbs_script_path,
    }
}

fn window_mode(fields: &Fields, ctx: &Context<'_>) -> WindowMode {
    match optional_string(fields, "windowMode", ctx).filter(|mode| !mode.is_empty()) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            ctx.report(
                "Optional WINDOWS windowMode must be \"normal\", \"maximized\", or \"minimized\". Defaulting to \"normal\".",
            );
            WindowMode::Normal
        }),
        None => WindowMode::Normal,
    }
}

/// Icon path, with any `,<index>` suffix kept. Relative icons are anchored at
/// the output folder.
fn icon(fields: &Fields, output_path: &Path, ctx: &Context<'_>) -> Option<String> {
    let raw = optional_string(fields, "icon", ctx).filter(|icon| !icon.is_empty())?;
    let mut icon = ctx.resolve_path(&raw)?;

    if !is_windows_absolute(&icon) {
        if MAIN_SEPARATOR != '\\' {
            icon = icon.replace('\\', "/");
        }
        icon = output_folder(output_path)
            .join(&icon)
            .to_string_lossy()
            .into_owned();
    }

    if !icon_pattern().is_match(&icon) {
        ctx.report(
            "Optional WINDOWS icon must be a ICO, EXE, or DLL file. It may be followed by a comma and icon index value, like: \"C:\\file.exe,0\"",
        );
        return None;
    }

    let icon_file = icon_index_pattern().replace(&icon, "");
    if !Path::new(&*icon_file).exists() {
        ctx.report("Optional WINDOWS icon could not be found.");
        return None;
    }

    Some(icon)
}

/// `comment`, falling back to the legacy `description` key.
fn comment(fields: &Fields, ctx: &Context<'_>) -> Option<String> {
    let comment = optional_string(fields, "comment", ctx);
    let description = optional_string(fields, "description", ctx).filter(|d| !d.is_empty());

    match (comment, description) {
        (Some(comment), _) if !comment.is_empty() => Some(comment),
        (_, Some(description)) => Some(description),
        (comment, None) => comment,
    }
}

fn working_directory(fields: &Fields, ctx: &Context<'_>) -> Option<String> {
    let raw = optional_string(fields, "workingDirectory", ctx)?;

    let directory = match ctx.resolve_path(&raw) {
        Some(directory) if Path::new(&directory).exists() => directory,
        other => {
            ctx.report(&format!(
                "Optional WINDOWS workingDirectory path does not exist: {}",
                other.as_deref().unwrap_or("undefined")
            ));
            return None;
        }
    };

    if !Path::new(&directory).is_dir() {
        ctx.report(&format!(
            "Optional WINDOWS workingDirectory path must be a directory: {}",
            directory
        ));
        return None;
    }

    Some(directory)
}
