//! Folder nodes discovered during a scan

use std::ffi::OsString;
use std::path::PathBuf;

use crate::RelativePath;

/// One directory discovered under a scan root.
///
/// `relative_path` is the identity key used to compare two trees; the
/// scanner guarantees it is unique within a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderDescriptor {
    /// Final path segment, exactly as listed on disk.
    pub name: OsString,
    /// Full path on disk under the scan root.
    pub absolute_path: PathBuf,
    pub relative_path: RelativePath,
}

impl FolderDescriptor {
    /// Build a descriptor for `relative_path` under `root`.
    pub fn new(root: impl Into<PathBuf>, relative_path: impl Into<RelativePath>) -> Self {
        let relative_path = relative_path.into();
        let name = relative_path.file_name().unwrap_or_default().to_os_string();
        let absolute_path = root.into().join(relative_path.to_native());
        Self {
            name,
            absolute_path,
            relative_path,
        }
    }

    /// Number of segments in the relative path.
    pub fn depth(&self) -> usize {
        self.relative_path.depth()
    }
}

impl std::fmt::Display for FolderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.relative_path)
    }
}
