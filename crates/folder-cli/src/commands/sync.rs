//! The sync command
//!
//! Validates both roots, compares them, lets the operator choose which
//! missing folders to create and then creates them.

use std::path::{Path, PathBuf};

use colored::{Color, Colorize};

use folder_core::{
    Comparison, MaterializeEvent, MaterializeReport, Outcome, SyncEngine, SyncOptions, progress_fn,
    select_all,
};
use folder_fs::FolderDescriptor;

use crate::config::{self, ConfigSource};
use crate::error::{CliError, Result};
use crate::interactive;

/// Colors cycled through by folder depth
const DEPTH_COLORS: &[Color] = &[
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::White,
];

/// Everything the sync command needs from the command line.
#[derive(Debug, Clone, Default)]
pub struct SyncRequest {
    pub source: PathBuf,
    pub target: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
    pub auto: bool,
    pub config: Option<PathBuf>,
    pub exclude: Vec<String>,
}

/// Run the sync command
///
/// Relative roots and config paths are resolved against `cwd`.
pub fn run_sync(cwd: &Path, request: &SyncRequest) -> Result<()> {
    println!("{} Validating paths...", "=>".blue().bold());

    let source = absolutize(cwd, &request.source);
    let target = absolutize(cwd, &request.target);

    if !source.exists() {
        return Err(folder_core::Error::PathNotFound { path: source }.into());
    }
    ensure_target(&target, request)?;

    let (config, origin) = config::load(request.config.as_deref(), cwd)?;
    match &origin {
        ConfigSource::BuiltIn => println!(
            "{} No config file found, using default exclusions",
            "!".yellow().bold()
        ),
        ConfigSource::Explicit(path) | ConfigSource::WorkingDir(path) | ConfigSource::UserDir(path) => {
            tracing::debug!(path = %path.display(), "Using config file");
        }
    }
    let config = config.with_custom(request.exclude.iter().cloned());
    let engine = SyncEngine::from_config(&config)?;

    println!("{} Scanning source and target directories...", "=>".blue().bold());
    let comparison = engine.compare(&source, &target)?;
    print_warnings(&comparison);

    if comparison.is_synchronized() {
        println!("{} All folders are already synchronized!", "OK".green().bold());
        return Ok(());
    }

    print_missing(&comparison.missing);

    let selected = if request.auto {
        println!();
        println!(
            "{} Auto mode: all missing folders will be created",
            "=>".blue().bold()
        );
        select_all(&comparison.missing)
    } else {
        interactive::select_folders(&comparison.missing)?
    };

    if selected.is_empty() {
        println!("{} No folders selected. Exiting...", "!".yellow().bold());
        return Ok(());
    }

    let folders = comparison.resolve(&selected);

    if !request.auto {
        print_plan(&folders, &target);
        if !interactive::confirm_creation(folders.len())? {
            println!("{} Operation cancelled.", "!".yellow().bold());
            return Ok(());
        }
    }

    println!();
    if request.dry_run {
        println!("{} Dry run - folders that would be created:", "=>".blue().bold());
    } else {
        println!("{} Creating folders...", "=>".blue().bold());
    }

    let verbose = request.verbose;
    let progress = progress_fn(move |event: &MaterializeEvent| render_event(event, verbose));
    let options = SyncOptions {
        dry_run: request.dry_run,
    };
    let report = engine.apply(&folders, &target, &options, &progress)?;

    print_summary(&report);
    Ok(())
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Create the target root if needed. Auto mode does not prompt.
fn ensure_target(target: &Path, request: &SyncRequest) -> Result<()> {
    if target.exists() {
        if !target.is_dir() {
            return Err(CliError::user(format!(
                "Target path is not a directory: {}",
                target.display()
            )));
        }
        return Ok(());
    }

    println!(
        "{} Target directory does not exist: {}",
        "!".yellow().bold(),
        target.display()
    );

    if !request.auto && !interactive::confirm_create_target(target)? {
        return Err(CliError::user("Cannot proceed without target directory"));
    }

    if request.dry_run {
        println!(
            "{} Would create target directory: {}",
            "=>".blue().bold(),
            target.display()
        );
    } else {
        std::fs::create_dir_all(target)?;
        println!(
            "{} Created target directory: {}",
            "OK".green().bold(),
            target.display()
        );
    }
    Ok(())
}

fn print_warnings(comparison: &Comparison) {
    let count = comparison.warnings().count();
    if count > 0 {
        println!(
            "{} {} location(s) could not be scanned and were skipped",
            "!".yellow().bold(),
            count
        );
    }
    let links = comparison.skipped_links().count();
    if links > 0 {
        println!(
            "{} {} symlinked folder(s) were not followed",
            "!".yellow().bold(),
            links
        );
        for link in comparison.skipped_links() {
            tracing::debug!(path = %link.display(), "Skipped symlinked folder");
        }
    }
}

fn print_missing(missing: &[FolderDescriptor]) {
    println!();
    println!(
        "{}",
        format!("Found {} missing folders in target:", missing.len())
            .yellow()
            .bold()
    );
    for (i, folder) in missing.iter().enumerate() {
        let depth = folder.depth().saturating_sub(1);
        let line = format!("{}[{}] {}", "  ".repeat(depth), i + 1, folder.relative_path);
        println!("{}", line.color(depth_color(depth)));
    }
}

fn print_plan(folders: &[FolderDescriptor], target: &Path) {
    println!();
    println!("{}", "Folders to be created:".cyan().bold());
    for (i, folder) in folders.iter().enumerate() {
        let full = target.join(folder.relative_path.to_native());
        println!("  {}. {}", i + 1, full.display());
    }
}

fn render_event(event: &MaterializeEvent, verbose: bool) {
    match &event.outcome {
        Outcome::Planned => println!("  {}. {}", event.index, event.path.display()),
        Outcome::Created if verbose => println!(
            "  {} [{}/{}] Created: {}",
            "+".green(),
            event.index,
            event.total,
            event.path.display()
        ),
        Outcome::Created => {}
        Outcome::Failed(message) => println!(
            "  {} Error creating {}: {}",
            "x".red().bold(),
            event.path.display(),
            message
        ),
    }
}

fn print_summary(report: &MaterializeReport) {
    println!();
    if report.dry_run {
        println!("{} Summary: {}", "=>".blue().bold(), report.summary());
        println!("This was a dry run - no actual changes were made.");
    } else if report.is_success() {
        println!("{} Summary: {}", "OK".green().bold(), report.summary());
    } else {
        println!("{} Summary: {}", "!".yellow().bold(), report.summary());
    }
}

/// Color for a folder at `depth` (0 = top level).
pub fn depth_color(depth: usize) -> Color {
    DEPTH_COLORS[depth % DEPTH_COLORS.len()]
}
