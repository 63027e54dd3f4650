//! Turning operator input into a selection of missing folders

use folder_fs::FolderDescriptor;

use crate::{Error, Result};

/// Auto mode: every missing folder is selected.
pub fn select_all(missing: &[FolderDescriptor]) -> Vec<FolderDescriptor> {
    missing.to_vec()
}

/// Parse comma-separated 1-based indices such as `1, 3,5`.
///
/// Returns 0-based indices in input order with duplicates dropped. Blank
/// input is an empty selection.
///
/// # Errors
///
/// Returns [`Error::InvalidSelection`] if any token is not a number in
/// `[1, count]`.
pub fn parse_selection(input: &str, count: usize) -> Result<Vec<usize>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let invalid = || Error::InvalidSelection {
        input: input.to_string(),
        max: count,
    };

    let mut indices = Vec::new();
    for token in input.split(',') {
        let n: usize = token.trim().parse().map_err(|_| invalid())?;
        if n < 1 || n > count {
            return Err(invalid());
        }
        if !indices.contains(&(n - 1)) {
            indices.push(n - 1);
        }
    }
    Ok(indices)
}

/// Map 0-based indices onto the missing list. Out-of-range indices are skipped.
pub fn select_indices(missing: &[FolderDescriptor], indices: &[usize]) -> Vec<FolderDescriptor> {
    indices
        .iter()
        .filter_map(|&i| missing.get(i).cloned())
        .collect()
}
