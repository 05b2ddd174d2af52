//! Platform probes and file attributes.

use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a program on the execution search path.
///
/// A name containing a path separator is resolved directly without
/// consulting PATH, so configurations can pin an absolute interpreter.
pub fn which(name: &Path) -> Option<PathBuf> {
    if name.components().count() > 1 {
        return is_executable(name).then(|| name.to_path_buf());
    }

    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

/// Check if running with an elevated effective uid.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}

/// Set a file's permission bits.
pub fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
    }
    #[cfg(not(unix))]
    {
        let _ = (path, mode);
        Ok(())
    }
}

/// Hand ownership of an installed artifact to root.
///
/// Only attempted when actually elevated, so the library remains usable
/// from unprivileged test sandboxes.
pub fn take_ownership(path: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        if is_elevated() {
            return std::os::unix::fs::chown(path, Some(0), Some(0));
        }
        let _ = path;
        Ok(())
    }
    #[cfg(not(unix))]
    {
        let _ = path;
        Ok(())
    }
}
