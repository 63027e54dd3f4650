//! End-to-end integration test for the whole pipeline
//!
//! Exercises config loading -> scan -> diff -> selection -> closure ->
//! materialize against real temporary directories.

use std::cell::RefCell;
use std::fs;

use folder_core::{
    MaterializeEvent, Outcome, SyncEngine, SyncOptions, parse_selection, progress_fn,
    select_indices,
};
use folder_fs::{ConfigStore, ExclusionConfig};
use folder_test_utils::TestTree;
use pretty_assertions::assert_eq;

fn relative(folders: &[folder_fs::FolderDescriptor]) -> Vec<String> {
    folders.iter().map(|f| f.relative_path.to_string()).collect()
}

#[test]
fn test_full_flow_with_config_file() {
    let source = TestTree::with_dirs(&[
        "src/components/ui",
        "src/utils",
        "docs/api",
        "dist/assets",
        ".git/refs",
    ]);
    let target = TestTree::with_dirs(&["src/utils"]);

    let config_dir = TestTree::new();
    let config = serde_json::json!({ "customExclusions": ["dist"] });
    config_dir.file("sync-config.json", &config.to_string());

    let config = ConfigStore::new()
        .load_exclusions(&config_dir.path("sync-config.json"))
        .unwrap();
    let engine = SyncEngine::from_config(&config).unwrap();

    let comparison = engine.compare(source.root(), target.root()).unwrap();
    assert!(comparison.warnings().next().is_none());
    assert_eq!(
        relative(&comparison.missing),
        vec!["docs", "docs/api", "src/components", "src/components/ui"]
    );

    // Operator picks only the deepest folder; its ancestor comes along.
    let indices = parse_selection("4", comparison.missing.len()).unwrap();
    let selected = select_indices(&comparison.missing, &indices);
    let folders = comparison.resolve(&selected);
    assert_eq!(relative(&folders), vec!["src/components", "src/components/ui"]);

    let events = RefCell::new(Vec::new());
    let progress = progress_fn(|event: &MaterializeEvent| {
        events.borrow_mut().push((event.index, event.outcome.clone()));
    });
    let report = engine
        .apply(&folders, target.root(), &SyncOptions::default(), &progress)
        .unwrap();

    assert_eq!(report.summary(), "2 created, 0 errors");
    assert_eq!(
        events.into_inner(),
        vec![(1, Outcome::Created), (2, Outcome::Created)]
    );
    assert_eq!(
        target.list_dirs(),
        vec!["src", "src/components", "src/components/ui", "src/utils"]
    );

    // A second comparison only reports what was left unselected.
    let again = engine.compare(source.root(), target.root()).unwrap();
    assert_eq!(relative(&again.missing), vec!["docs", "docs/api"]);
}

#[test]
fn test_dry_run_then_real_run() {
    let source = TestTree::with_dirs(&["a/b/c", "d"]);
    let target = TestTree::new();
    let engine = SyncEngine::from_config(&ExclusionConfig::default()).unwrap();

    let comparison = engine.compare(source.root(), target.root()).unwrap();
    let folders = comparison.resolve(&comparison.missing);

    let dry = engine
        .apply(
            &folders,
            target.root(),
            &SyncOptions { dry_run: true },
            &folder_core::NoProgress,
        )
        .unwrap();
    assert_eq!(dry.summary(), "4 would be created");
    assert!(target.list_dirs().is_empty());

    let real = engine
        .apply(&folders, target.root(), &SyncOptions::default(), &folder_core::NoProgress)
        .unwrap();
    assert!(real.is_success());
    assert_eq!(target.list_dirs(), vec!["a", "a/b", "a/b/c", "d"]);

    let after = engine.compare(source.root(), target.root()).unwrap();
    assert!(after.is_synchronized());
}

#[test]
fn test_partial_failure_keeps_going() {
    let source = TestTree::with_dirs(&["one", "two/inner", "three"]);
    let target = TestTree::new();
    fs::write(target.path("two"), "blocking file").unwrap();

    let engine = SyncEngine::from_config(&ExclusionConfig::default()).unwrap();
    let comparison = engine.compare(source.root(), target.root()).unwrap();
    let folders = comparison.resolve(&comparison.missing);
    assert_eq!(relative(&folders), vec!["one", "three", "two", "two/inner"]);

    let report = engine
        .apply(&folders, target.root(), &SyncOptions::default(), &folder_core::NoProgress)
        .unwrap();

    assert_eq!(report.created, 2);
    assert_eq!(report.error_count(), 2);
    assert_eq!(report.summary(), "2 created, 2 errors");
    target.assert_dir_exists("one");
    target.assert_dir_exists("three");
}
