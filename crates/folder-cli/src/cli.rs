//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// folder-sync - Create the folders that exist in a source tree but not in a target tree
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "folder-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory path
    pub source: PathBuf,

    /// Target directory path
    pub target: PathBuf,

    /// Preview changes without executing
    #[arg(short, long)]
    pub dry_run: bool,

    /// Show detailed output
    #[arg(short, long)]
    pub verbose: bool,

    /// Create all missing folders without prompting
    #[arg(short, long)]
    pub auto: bool,

    /// Exclusion config file (.json, .toml, .yaml)
    #[arg(short, long, value_name = "PATH", env = "FOLDER_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra exclusion pattern (repeatable, `*` is a wildcard)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,
}
