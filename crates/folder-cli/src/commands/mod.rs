//! Command implementations

pub mod sync;

pub use sync::{SyncRequest, run_sync};
