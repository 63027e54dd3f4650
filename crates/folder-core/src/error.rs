//! Error types for folder-core

use std::path::PathBuf;

/// Result type for folder-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folder-core operations
///
/// Only precondition failures live here. Per-folder scan and creation
/// failures are collected in reports and never abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source root does not exist
    #[error("Source directory does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Source root exists but is not a directory
    #[error("Source path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Materializer called without a target root
    #[error("Target root is not set")]
    TargetRootUnset,

    /// Manual index entry that is non-numeric or outside `[1, max]`
    #[error("Invalid selection '{input}': enter numbers between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from folder-fs
    #[error(transparent)]
    Fs(#[from] folder_fs::Error),
}
