//! SyncEngine implementation
//!
//! The engine owns the compiled exclusion rules for one run and exposes the
//! non-interactive steps of a sync. Selection and confirmation happen in the
//! caller between [`SyncEngine::compare`] and [`SyncEngine::apply`].

use std::path::{Path, PathBuf};

use folder_fs::{ExclusionConfig, ExclusionRules, FolderDescriptor, ScanReport, ScanWarning, scan};

use crate::closure::resolve_closure;
use crate::diff::find_missing;
use crate::materialize::{MaterializeEvent, MaterializeReport, materialize};
use crate::progress::ProgressCallback;
use crate::{Error, Result};

/// Options for the apply step
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, report what would be created without touching the filesystem.
    pub dry_run: bool,
}

/// Outcome of scanning both roots.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub source: ScanReport,
    pub target: ScanReport,
    /// Source folders absent from the target, in source discovery order.
    pub missing: Vec<FolderDescriptor>,
}

impl Comparison {
    /// True when every source folder already exists in the target.
    pub fn is_synchronized(&self) -> bool {
        self.missing.is_empty()
    }

    /// Warnings from both scans, source first.
    pub fn warnings(&self) -> impl Iterator<Item = &ScanWarning> {
        self.source.warnings.iter().chain(self.target.warnings.iter())
    }

    /// Symlinked folders from both scans that were not followed.
    pub fn skipped_links(&self) -> impl Iterator<Item = &Path> {
        self.source
            .skipped_links
            .iter()
            .chain(self.target.skipped_links.iter())
            .map(PathBuf::as_path)
    }

    /// Close `selected` over its missing ancestors.
    pub fn resolve(&self, selected: &[FolderDescriptor]) -> Vec<FolderDescriptor> {
        resolve_closure(selected, &self.missing)
    }
}

/// Engine for one folder-structure sync run
pub struct SyncEngine {
    rules: ExclusionRules,
}

impl SyncEngine {
    /// Create an engine with an already compiled rule set.
    pub fn new(rules: ExclusionRules) -> Self {
        tracing::debug!(rules = rules.len(), "Exclusion rules compiled");
        Self { rules }
    }

    /// Compile the rule set from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a wildcard rule cannot be compiled.
    pub fn from_config(config: &ExclusionConfig) -> Result<Self> {
        Ok(Self::new(config.rules()?))
    }

    /// Scan both roots and compute the missing set.
    ///
    /// A target root that does not exist yet (e.g. during a dry run that
    /// would have created it) is treated as empty without being scanned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if `source` does not exist and
    /// [`Error::NotADirectory`] if it is not a directory. No scan runs in
    /// either case.
    pub fn compare(&self, source: &Path, target: &Path) -> Result<Comparison> {
        let source = validate_source(source)?;
        let target = resolve_root(target);

        tracing::debug!(source = %source.display(), target_root = %target.display(), "Comparing trees");
        let source = scan(&source, &self.rules);
        let target = if target.exists() {
            scan(&target, &self.rules)
        } else {
            tracing::debug!(target_root = %target.display(), "Target root absent, treating as empty");
            ScanReport {
                root: target,
                ..ScanReport::default()
            }
        };
        let missing = find_missing(&source.folders, &target.folders);

        tracing::info!(missing = missing.len(), "Comparison complete");
        Ok(Comparison {
            source,
            target,
            missing,
        })
    }

    /// Create the resolved folders under `target`.
    ///
    /// # Errors
    ///
    /// Only precondition failures are returned; see [`materialize`].
    pub fn apply<P>(
        &self,
        folders: &[FolderDescriptor],
        target: &Path,
        options: &SyncOptions,
        progress: &P,
    ) -> Result<MaterializeReport>
    where
        P: ProgressCallback<MaterializeEvent> + ?Sized,
    {
        materialize(folders, target, options.dry_run, progress)
    }
}

fn validate_source(source: &Path) -> Result<PathBuf> {
    if !source.exists() {
        return Err(Error::PathNotFound {
            path: source.to_path_buf(),
        });
    }
    if !source.is_dir() {
        return Err(Error::NotADirectory {
            path: source.to_path_buf(),
        });
    }
    Ok(resolve_root(source))
}

/// Canonicalize when possible so descriptors carry fully resolved paths.
fn resolve_root(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
