//! Helpers for tests that rely on filesystem permission errors.

/// True when the current process runs as root, which bypasses permission
/// checks and makes "access denied" scenarios impossible to reproduce.
///
/// Reads the owner of a freshly created file, which is the effective uid.
#[cfg(unix)]
pub fn is_root() -> bool {
    use std::os::unix::fs::MetadataExt;

    tempfile::tempfile()
        .and_then(|file| file.metadata())
        .map(|meta| meta.uid() == 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_root() -> bool {
    false
}

/// Restrict `path` to `mode` and restore it to `0o755` on drop.
#[cfg(unix)]
pub struct PermissionGuard {
    path: std::path::PathBuf,
}

#[cfg(unix)]
impl PermissionGuard {
    /// # Panics
    /// Panics if the permissions cannot be changed.
    pub fn set(path: impl Into<std::path::PathBuf>, mode: u32) -> Self {
        use std::os::unix::fs::PermissionsExt;
        let path = path.into();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        Self { path }
    }
}

#[cfg(unix)]
impl Drop for PermissionGuard {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o755));
    }
}
