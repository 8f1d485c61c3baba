//! Linux `.desktop` validation.

use super::fields::{
    default_boolean, display_value, optional_string, output_folder, resolve_output_location,
    truthy_string, Context, Fields, OutputLocation,
};
use crate::resolve::resolve_executable_on_search_path;
use crate::shortcut::{LinuxEntryType, LinuxShortcut};
use std::path::{Path, PathBuf};

/// Target resolved and checked against its entry type.
struct CheckedTarget {
    fields: Fields,
    file_path: String,
    entry_type: LinuxEntryType,
}

/// Target checked and output location decided.
struct Located {
    target: CheckedTarget,
    location: OutputLocation,
}

/// Validate the `linux` subtree. `None` means the target was dropped.
pub(crate) fn validate(fields: Fields, ctx: &Context<'_>) -> Option<LinuxShortcut> {
    let target = check_target(fields, ctx)?;
    let located = locate(target, ctx);
    Some(normalize(located, ctx))
}

fn check_target(fields: Fields, ctx: &Context<'_>) -> Option<CheckedTarget> {
    let file_path = truthy_string(&fields, "filePath")
        .and_then(|raw| ctx.resolve_path(raw))
        .map(|path| resolve_executable_on_search_path(&path));

    let entry_type = entry_type(&fields, file_path.as_deref(), ctx);

    let shown = file_path
        .clone()
        .unwrap_or_else(|| display_value(fields.get("filePath")));

    let file_path = match entry_type {
        LinuxEntryType::Application => {
            file_path.filter(|p| Path::new(p).exists() && !Path::new(p).is_dir())
        }
        LinuxEntryType::Directory => file_path.filter(|p| Path::new(p).is_dir()),
        LinuxEntryType::Link => file_path,
    };

    let Some(file_path) = file_path else {
        let message = match entry_type {
            LinuxEntryType::Application => {
                "LINUX filePath (with type of \"Application\") must exist and cannot be a folder: "
            }
            LinuxEntryType::Directory => {
                "LINUX filePath (with type of \"Directory\") must exist and be a folder: "
            }
            LinuxEntryType::Link => "LINUX filePath url must be a string: ",
        };
        ctx.report(&format!("{}{}", message, shown));
        return None;
    };

    Some(CheckedTarget {
        fields,
        file_path,
        entry_type,
    })
}

/// Explicit `type`, or inferred from the target: URLs are links, existing
/// folders are directories, anything else is an application.
fn entry_type(fields: &Fields, file_path: Option<&str>, ctx: &Context<'_>) -> LinuxEntryType {
    let explicit = optional_string(fields, "type", ctx).filter(|t| !t.is_empty());

    match explicit {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            ctx.report(
                "Optional LINUX type must be \"Application\", \"Link\", or \"Directory\". Defaulting to \"Application\".",
            );
            LinuxEntryType::Application
        }),
        None => match file_path {
            Some(path) if path.starts_with("http://") || path.starts_with("https://") => {
                LinuxEntryType::Link
            }
            Some(path) if Path::new(path).is_dir() => LinuxEntryType::Directory,
            _ => LinuxEntryType::Application,
        },
    }
}

fn locate(target: CheckedTarget, ctx: &Context<'_>) -> Located {
    let location = resolve_output_location(&target.fields, &target.file_path, ctx);
    Located { target, location }
}

fn normalize(located: Located, ctx: &Context<'_>) -> LinuxShortcut {
    let Located { target, location } = located;
    let fields = &target.fields;

    let icon = icon(fields, &location.output_path, ctx);
    let terminal = default_boolean(fields, "terminal", false, ctx);
    let chmod = default_boolean(fields, "chmod", true, ctx);
    let comment = optional_string(fields, "comment", ctx);
    let arguments = optional_string(fields, "arguments", ctx);

    LinuxShortcut {
        file_path: target.file_path,
        output_path: location.output_path,
        name: location.name,
        entry_type: target.entry_type,
        terminal,
        chmod,
        comment,
        icon,
        arguments,
    }
}

/// Absolute icon path. Relative icons are anchored at the output folder.
fn icon(fields: &Fields, output_path: &Path, ctx: &Context<'_>) -> Option<String> {
    let raw = optional_string(fields, "icon", ctx).filter(|icon| !icon.is_empty())?;
    let resolved = ctx.resolve_path(&raw)?;

    let mut icon_path = PathBuf::from(&resolved);
    if !icon_path.is_absolute() {
        icon_path = output_folder(output_path).join(icon_path);
    }
    let icon = icon_path.to_string_lossy().into_owned();

    if !icon.ends_with(".png") && !icon.ends_with(".icns") {
        ctx.report("Optional LINUX icon should probably be a PNG file.");
    }

    if !icon_path.exists() {
        ctx.report("Optional LINUX icon could not be found.");
        return None;
    }

    Some(icon)
}
