//! SyncEngine for comparing two trees and committing a selection
//!
//! This module provides:
//! - **compare**: validate the source root, scan both roots, compute the missing set
//! - **resolve**: close a selection over its missing ancestors
//! - **apply**: materialize the resolved folders under the target root

mod engine;

pub use engine::{Comparison, SyncEngine, SyncOptions};
