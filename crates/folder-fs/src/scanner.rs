//! Recursive directory tree scanner
//!
//! Walks a root depth-first in pre-order and emits one [`FolderDescriptor`]
//! per directory that survives the exclusion rules. Excluded entries are
//! never descended into. A subtree that cannot be listed is recorded as a
//! [`ScanWarning`] and the walk carries on with its siblings.

use std::ffi::OsString;
use std::fs::{self, FileType};
use std::io;
use std::path::{Path, PathBuf};

use crate::{ExclusionRules, FolderDescriptor, RelativePath};

/// A subtree or entry that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
}

impl std::fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not scan {}: {}", self.path.display(), self.message)
    }
}

/// Result of scanning one root.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// The scanned root. Never part of `folders`.
    pub root: PathBuf,
    /// Discovered folders in pre-order, siblings sorted by name.
    pub folders: Vec<FolderDescriptor>,
    /// Non-fatal listing failures.
    pub warnings: Vec<ScanWarning>,
    /// Symbolic links to directories that were seen but not followed.
    pub skipped_links: Vec<PathBuf>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// An entry listed but not yet evaluated.
struct Pending {
    name: OsString,
    path: PathBuf,
    relative_path: RelativePath,
    file_type: io::Result<FileType>,
}

/// Scan `root` and return every non-excluded folder beneath it.
///
/// An unreadable root produces an empty list and a single warning.
pub fn scan(root: &Path, rules: &ExclusionRules) -> ScanReport {
    let mut report = ScanReport {
        root: root.to_path_buf(),
        ..ScanReport::default()
    };

    // Children are pushed in reverse so pops come out in listing order.
    let mut stack: Vec<Pending> = Vec::new();
    push_children(root, &RelativePath::root(), &mut stack, &mut report.warnings);

    while let Some(entry) = stack.pop() {
        if let Some(rule) = rules.matching_rule(&entry.name, &entry.relative_path) {
            tracing::debug!(path = %entry.relative_path, rule = rule.as_str(), "Excluded");
            continue;
        }

        let file_type = match entry.file_type {
            Ok(ft) => ft,
            Err(e) => {
                record_warning(&mut report.warnings, &entry.path, &e);
                continue;
            }
        };

        if file_type.is_symlink() {
            if entry.path.is_dir() {
                tracing::info!(path = %entry.path.display(), "Not following symlinked folder");
                report.skipped_links.push(entry.path);
            }
            continue;
        }
        if !file_type.is_dir() {
            continue;
        }

        tracing::debug!(path = %entry.relative_path, "Found folder");
        push_children(&entry.path, &entry.relative_path, &mut stack, &mut report.warnings);
        report.folders.push(FolderDescriptor {
            name: entry.name,
            absolute_path: entry.path,
            relative_path: entry.relative_path,
        });
    }

    tracing::info!(
        root = %root.display(),
        folders = report.folders.len(),
        warnings = report.warnings.len(),
        skipped_links = report.skipped_links.len(),
        "Scan complete"
    );
    report
}

fn push_children(
    dir: &Path,
    prefix: &RelativePath,
    stack: &mut Vec<Pending>,
    warnings: &mut Vec<ScanWarning>,
) {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            record_warning(warnings, dir, &e);
            return;
        }
    };

    let mut children = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => {
                let name = entry.file_name();
                children.push(Pending {
                    relative_path: prefix.join(&name),
                    path: entry.path(),
                    file_type: entry.file_type(),
                    name,
                });
            }
            Err(e) => record_warning(warnings, dir, &e),
        }
    }

    children.sort_by(|a, b| a.name.cmp(&b.name));
    stack.extend(children.into_iter().rev());
}

fn record_warning(warnings: &mut Vec<ScanWarning>, path: &Path, error: &io::Error) {
    tracing::warn!(path = %path.display(), error = %error, "Could not scan");
    warnings.push(ScanWarning {
        path: path.to_path_buf(),
        message: error.to_string(),
    });
}
