//! Temporary project trees.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A project directory that is removed when dropped.
///
/// ```
/// use adrkit_test_utils::TempProject;
///
/// let project = TempProject::new().with_file("src/app.js", "// hello\n");
/// assert!(project.path("src/app.js").exists());
/// ```
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    /// Create an empty project.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write a file, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics on any I/O error.
    pub fn with_file(self, relative: &str, contents: impl AsRef<[u8]>) -> Self {
        self.write(relative, contents);
        self
    }

    /// Write a file in place, creating parent directories.
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture file");
    }

    /// Read a file back as UTF-8.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read project file")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}
