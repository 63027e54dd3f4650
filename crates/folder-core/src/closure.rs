//! Dependency closure over a partial selection
//!
//! Every missing ancestor of a selected folder is pulled into the selection,
//! so selecting `a/b/c` while `a/b` is also missing creates both. Ancestors
//! outside the missing set already exist in the target and are left alone.

use std::collections::{HashMap, HashSet};

use folder_fs::{FolderDescriptor, RelativePath};

/// Expand `selected` with every ancestor found in `all_missing`, ordered so
/// shallower folders come first.
///
/// Folders of equal depth keep their position in `all_missing` (discovery
/// order). Duplicate selections collapse to one entry. An empty selection
/// yields an empty result.
pub fn resolve_closure(
    selected: &[FolderDescriptor],
    all_missing: &[FolderDescriptor],
) -> Vec<FolderDescriptor> {
    let index: HashMap<&RelativePath, (usize, &FolderDescriptor)> = all_missing
        .iter()
        .enumerate()
        .map(|(i, f)| (&f.relative_path, (i, f)))
        .collect();

    let mut included: HashSet<RelativePath> = HashSet::new();
    let mut result: Vec<FolderDescriptor> = Vec::with_capacity(selected.len());

    for folder in selected {
        if included.insert(folder.relative_path.clone()) {
            result.push(folder.clone());
        }
    }

    for folder in selected {
        for ancestor in folder.relative_path.ancestors() {
            if included.contains(&ancestor) {
                continue;
            }
            if let Some((_, parent)) = index.get(&ancestor) {
                tracing::debug!(folder = %folder.relative_path, ancestor = %ancestor, "Adding missing ancestor");
                result.push((*parent).clone());
                included.insert(ancestor);
            }
        }
    }

    let discovery = |f: &FolderDescriptor| {
        index
            .get(&f.relative_path)
            .map(|(i, _)| *i)
            .unwrap_or(usize::MAX)
    };
    result.sort_by_key(|f| (f.depth(), discovery(f)));
    result
}
