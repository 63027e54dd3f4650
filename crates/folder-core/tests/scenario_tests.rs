//! End-to-end engine scenarios against real temporary trees

use folder_core::{
    NoProgress, SyncEngine, SyncOptions, materialize, parse_selection, select_all,
    select_indices,
};
use folder_fs::ExclusionConfig;
use folder_test_utils::TestTree;
use pretty_assertions::assert_eq;

fn engine() -> SyncEngine {
    SyncEngine::from_config(&ExclusionConfig::default()).unwrap()
}

fn paths(folders: &[folder_fs::FolderDescriptor]) -> Vec<String> {
    folders.iter().map(|f| f.relative_path.to_string()).collect()
}

#[test]
fn partial_selection_creates_leaf_and_missing_parent() {
    let source = TestTree::with_dirs(&["src/components/ui", "docs/api"]);
    let target = TestTree::with_dirs(&["src", "docs"]);

    let comparison = engine().compare(source.root(), target.root()).unwrap();
    assert_eq!(
        paths(&comparison.missing),
        vec!["docs/api", "src/components", "src/components/ui"]
    );

    let ui = select_indices(&comparison.missing, &parse_selection("3", 3).unwrap());
    let closure = comparison.resolve(&ui);
    assert_eq!(paths(&closure), vec!["src/components", "src/components/ui"]);

    let report = engine()
        .apply(&closure, target.root(), &SyncOptions::default(), &NoProgress)
        .unwrap();
    assert_eq!(report.summary(), "2 created, 0 errors");
    target.assert_dir_exists("src/components/ui");
    target.assert_not_exists("docs/api");
}

#[test]
fn synchronized_trees_report_nothing_missing() {
    let source = TestTree::with_dirs(&["a/b", "c"]);
    let target = TestTree::with_dirs(&["a/b", "c", "extra"]);

    let comparison = engine().compare(source.root(), target.root()).unwrap();
    assert!(comparison.is_synchronized());
}

#[test]
fn empty_selection_creates_nothing() {
    let source = TestTree::with_dirs(&["a/b"]);
    let target = TestTree::new();

    let comparison = engine().compare(source.root(), target.root()).unwrap();
    let closure = comparison.resolve(&[]);
    let report = materialize(&closure, target.root(), false, &NoProgress).unwrap();

    assert_eq!(report.created, 0);
    assert!(target.list_dirs().is_empty());
}

#[test]
fn git_directory_never_appears_in_either_scan() {
    let source = TestTree::with_dirs(&[".git/objects", "src"]);
    let target = TestTree::with_dirs(&[".git/hooks"]);

    let comparison = engine().compare(source.root(), target.root()).unwrap();
    assert_eq!(paths(&comparison.source.folders), vec!["src"]);
    assert!(comparison.target.folders.is_empty());
    assert_eq!(paths(&comparison.missing), vec!["src"]);
}

#[test]
fn dry_run_leaves_target_untouched() {
    let source = TestTree::with_dirs(&["a/b/c", "d/e", "f"]);
    let target = TestTree::new();

    let comparison = engine().compare(source.root(), target.root()).unwrap();
    let closure = comparison.resolve(&select_all(&comparison.missing));
    let report = materialize(&closure, target.root(), true, &NoProgress).unwrap();

    assert_eq!(report.planned.len(), 6);
    assert_eq!(report.created, 0);
    assert!(target.list_dirs().is_empty());
}

#[test]
fn one_blocked_folder_in_five_is_isolated() {
    let source = TestTree::with_dirs(&["a", "b", "c", "d", "e"]);
    let target = TestTree::new();
    // A file where `c` should go makes that single creation fail.
    target.file("c", "not a directory");

    let comparison = engine().compare(source.root(), target.root()).unwrap();
    let closure = comparison.resolve(&select_all(&comparison.missing));
    assert_eq!(closure.len(), 5);

    let report = materialize(&closure, target.root(), false, &NoProgress).unwrap();
    assert_eq!(report.summary(), "4 created, 1 error");
    assert_eq!(report.errors[0].relative_path.to_string(), "c");
    for dir in ["a", "b", "d", "e"] {
        target.assert_dir_exists(dir);
    }
}

#[cfg(unix)]
mod raw_names {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    #[test]
    fn backslash_name_is_created_as_single_folder() {
        let source = TestTree::new();
        std::fs::create_dir(source.root().join("a\\b")).unwrap();
        let target = TestTree::new();

        let comparison = engine().compare(source.root(), target.root()).unwrap();
        assert_eq!(comparison.missing.len(), 1);
        let closure = comparison.resolve(&comparison.missing);
        let report = materialize(&closure, target.root(), false, &NoProgress).unwrap();

        assert_eq!(report.created, 1);
        assert_eq!(target.list_dirs(), vec!["a\\b"]);
        target.assert_not_exists("a");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_created_verbatim() {
        let ff = OsStr::from_bytes(b"x\xff");
        let fe = OsStr::from_bytes(b"x\xfe");
        let source = TestTree::new();
        std::fs::create_dir(source.root().join(ff)).unwrap();
        std::fs::create_dir(source.root().join(fe)).unwrap();
        let target = TestTree::new();
        std::fs::create_dir(target.root().join(fe)).unwrap();

        let comparison = engine().compare(source.root(), target.root()).unwrap();
        assert_eq!(comparison.missing.len(), 1);
        assert_eq!(comparison.missing[0].name, ff);

        let closure = comparison.resolve(&comparison.missing);
        let report = materialize(&closure, target.root(), false, &NoProgress).unwrap();
        assert_eq!(report.summary(), "1 created, 0 errors");
        assert!(target.root().join(ff).is_dir());
        assert!(engine().compare(source.root(), target.root()).unwrap().is_synchronized());
    }
}
