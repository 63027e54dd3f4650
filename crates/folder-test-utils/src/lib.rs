//! Shared test utilities for the folder-sync workspace.
//!
//! This crate provides standardised directory-tree fixtures so crate test
//! suites do not each hand-roll `create_dir_all` loops. It is a
//! dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`] — [`TestTree`] builder for temporary directory trees
//! - [`perms`] — helpers for permission-based failure tests

pub mod perms;
pub mod tree;

pub use tree::TestTree;
