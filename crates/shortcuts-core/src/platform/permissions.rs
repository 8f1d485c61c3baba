//! Platform-specific file permission handling.

use crate::error::{Result, ShortcutError};
use std::path::Path;
use tracing::debug;

/// Set the permission bits of a file.
///
/// # Platform Behavior
/// - **Linux/macOS**: Sets `mode` (e.g. `0o755` for a trusted desktop entry)
/// - **Windows**: No-op (executability is determined by extension)
///
/// # Errors
/// Returns an error if the file doesn't exist or permissions can't be changed.
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata =
            std::fs::metadata(path).map_err(|e| ShortcutError::io_with_path(e, path))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(mode);
        std::fs::set_permissions(path, permissions)
            .map_err(|e| ShortcutError::io_with_path(e, path))?;
        debug!("Set permissions {:o} on: {}", mode, path.display());
    }

    #[cfg(not(unix))]
    {
        if !path.exists() {
            return Err(ShortcutError::io_with_path(
                std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
                path,
            ));
        }
        debug!(
            "Skipping permission bits {:o} on non-Unix platform for: {}",
            mode,
            path.display()
        );
    }

    Ok(())
}
