//! Set difference between two scans

use std::collections::HashSet;

use folder_fs::{FolderDescriptor, RelativePath};

/// Folders present in `source` whose relative path is absent from `target`.
///
/// Keeps the source scan order (parents before children, siblings in
/// listing order). Neither input is modified.
pub fn find_missing(source: &[FolderDescriptor], target: &[FolderDescriptor]) -> Vec<FolderDescriptor> {
    let present: HashSet<&RelativePath> = target.iter().map(|f| &f.relative_path).collect();

    source
        .iter()
        .filter(|f| !present.contains(&f.relative_path))
        .cloned()
        .collect()
}
