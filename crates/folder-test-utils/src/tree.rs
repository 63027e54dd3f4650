//! [`TestTree`] builder for temporary directory trees.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory populated from relative path lists.
///
/// # Example
///
/// ```rust,no_run
/// use folder_test_utils::TestTree;
///
/// let tree = TestTree::with_dirs(&["src/components/ui", "docs/api"]);
/// tree.assert_dir_exists("src/components");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a tree containing every directory in `dirs` (parents included).
    pub fn with_dirs(dirs: &[&str]) -> Self {
        let tree = Self::new();
        tree.dirs(dirs);
        tree
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path for a `/`-separated relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|s| !s.is_empty())
            .fold(self.root().to_path_buf(), |acc, seg| acc.join(seg))
    }

    /// Create each directory (and its parents).
    ///
    /// # Panics
    /// Panics if a directory cannot be created.
    pub fn dirs(&self, dirs: &[&str]) -> &Self {
        for dir in dirs {
            let path = self.path(dir);
            fs::create_dir_all(&path)
                .unwrap_or_else(|e| panic!("TestTree::dirs: failed to create {}: {e}", path.display()));
        }
        self
    }

    /// Write a file with `content`, creating parents as needed.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestTree::file: failed to write {}: {e}", path.display()));
        self
    }

    /// Every directory under the root as sorted `/`-separated relative paths.
    pub fn list_dirs(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_dirs(self.root(), "", &mut out);
        out.sort();
        out
    }

    /// Assert that `relative` exists and is a directory.
    ///
    /// # Panics
    /// Panics with a descriptive message if it is not.
    pub fn assert_dir_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.is_dir(),
            "Expected directory to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}

fn collect_dirs(dir: &Path, prefix: &str, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };
        collect_dirs(&entry.path(), &rel, out);
        out.push(rel);
    }
}
