//! Creating resolved folders under the target root
//!
//! Folders are processed strictly in the order given, which the closure
//! resolver guarantees is ancestors-first. A failure on one folder is
//! recorded and the batch moves on.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folder_fs::{FolderDescriptor, RelativePath};

use crate::progress::ProgressCallback;
use crate::{Error, Result};

/// Directory creation primitive.
pub trait DirCreator {
    /// Create `path` along with any missing intermediate directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`DirCreator`] backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirCreator;

impl DirCreator for FsDirCreator {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

/// What happened to a single folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created,
    /// Dry run: would have been created.
    Planned,
    Failed(String),
}

/// Emitted once per folder, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeEvent {
    /// 1-based position in the batch.
    pub index: usize,
    pub total: usize,
    pub relative_path: RelativePath,
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// A folder that could not be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationError {
    pub relative_path: RelativePath,
    pub path: PathBuf,
    pub message: String,
}

impl std::fmt::Display for CreationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error creating {}: {}", self.path.display(), self.message)
    }
}

/// Final counts for one materialize run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub dry_run: bool,
    /// Folders actually created. Always 0 on a dry run.
    pub created: usize,
    pub errors: Vec<CreationError>,
    /// Dry run only: full paths that would be created, in order.
    pub planned: Vec<PathBuf>,
}

impl MaterializeReport {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// One-line summary, e.g. `4 created, 1 error`.
    pub fn summary(&self) -> String {
        if self.dry_run {
            return format!("{} would be created", self.planned.len());
        }
        let errors = self.error_count();
        format!(
            "{} created, {} {}",
            self.created,
            errors,
            if errors == 1 { "error" } else { "errors" }
        )
    }
}

/// Create each folder under `target_root` using the real filesystem.
///
/// # Errors
///
/// Returns [`Error::TargetRootUnset`] if `target_root` is empty. Per-folder
/// failures never produce an `Err`; they are counted in the report.
pub fn materialize<P>(
    folders: &[FolderDescriptor],
    target_root: &Path,
    dry_run: bool,
    progress: &P,
) -> Result<MaterializeReport>
where
    P: ProgressCallback<MaterializeEvent> + ?Sized,
{
    materialize_with(&FsDirCreator, folders, target_root, dry_run, progress)
}

/// [`materialize`] with an explicit [`DirCreator`].
pub fn materialize_with<C, P>(
    creator: &C,
    folders: &[FolderDescriptor],
    target_root: &Path,
    dry_run: bool,
    progress: &P,
) -> Result<MaterializeReport>
where
    C: DirCreator + ?Sized,
    P: ProgressCallback<MaterializeEvent> + ?Sized,
{
    if target_root.as_os_str().is_empty() {
        return Err(Error::TargetRootUnset);
    }

    let total = folders.len();
    let mut report = MaterializeReport {
        dry_run,
        ..MaterializeReport::default()
    };

    for (i, folder) in folders.iter().enumerate() {
        let path = target_root.join(folder.relative_path.to_native());

        let outcome = if dry_run {
            report.planned.push(path.clone());
            Outcome::Planned
        } else {
            match creator.create_dir_all(&path) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "Created");
                    report.created += 1;
                    Outcome::Created
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to create folder");
                    report.errors.push(CreationError {
                        relative_path: folder.relative_path.clone(),
                        path: path.clone(),
                        message: e.to_string(),
                    });
                    Outcome::Failed(e.to_string())
                }
            }
        };

        progress.on_progress(&MaterializeEvent {
            index: i + 1,
            total,
            relative_path: folder.relative_path.clone(),
            path,
            outcome,
        });
    }

    tracing::info!(
        root = %target_root.display(),
        dry_run,
        created = report.created,
        errors = report.error_count(),
        "Materialize complete"
    );
    Ok(report)
}
