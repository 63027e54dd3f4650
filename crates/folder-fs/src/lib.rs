//! Filesystem layer for folder-sync
//!
//! Provides raw-segment relative paths, exclusion rules and the recursive
//! tree scanner that produces [`FolderDescriptor`] lists.

pub mod config;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod matcher;
pub mod path;
pub mod scanner;

pub use config::{ConfigStore, ExclusionConfig};
pub use constants::DEFAULT_EXCLUSIONS;
pub use descriptor::FolderDescriptor;
pub use error::{Error, Result};
pub use matcher::{ExclusionRule, ExclusionRules};
pub use path::RelativePath;
pub use scanner::{ScanReport, ScanWarning, scan};
