//! Folder-diff and dependency-closure engine for folder-sync
//!
//! This crate sits above `folder-fs` and below the CLI:
//!
//! - **Diff**: relative-path set difference between a source and target scan
//! - **Closure**: expand a partial selection with every missing ancestor,
//!   ordered ancestors-first
//! - **Materialize**: create the resolved folders, isolating per-folder failures
//! - **Selection**: helpers for auto mode and manual index entry
//! - **SyncEngine**: validation and scanning glue around the above
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use folder_core::{NoProgress, SyncEngine, SyncOptions};
//! use folder_fs::ExclusionConfig;
//!
//! fn example() -> folder_core::Result<()> {
//!     let engine = SyncEngine::from_config(&ExclusionConfig::default())?;
//!     let comparison = engine.compare(Path::new("src"), Path::new("dst"))?;
//!     let folders = comparison.resolve(&comparison.missing);
//!     let report = engine.apply(&folders, Path::new("dst"), &SyncOptions::default(), &NoProgress)?;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```

pub mod closure;
pub mod diff;
pub mod error;
pub mod materialize;
pub mod progress;
pub mod selection;
pub mod sync;

pub use closure::resolve_closure;
pub use diff::find_missing;
pub use error::{Error, Result};
pub use materialize::{
    CreationError, DirCreator, FsDirCreator, MaterializeEvent, MaterializeReport, Outcome,
    materialize, materialize_with,
};
pub use progress::{NoProgress, ProgressCallback, progress_fn};
pub use selection::{parse_selection, select_all, select_indices};
pub use sync::{Comparison, SyncEngine, SyncOptions};
