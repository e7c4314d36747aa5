//! Shared test utilities for E2E tests.
//!
//! Provides a `TestFixture` wrapping a temp directory with a repositories
//! file, plus a command builder pre-wired to run `repoherd` inside it.

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A test fixture that provides a temporary directory with an optional
/// repositories file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `repos.txt` file with the given content.
    pub fn with_repos(self, content: &str) -> Self {
        self.temp_dir
            .child("repos.txt")
            .write_str(content)
            .expect("Failed to write repos file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the repositories file.
    pub fn repos_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("repos.txt")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    ///
    /// `GIT_SSH_COMMAND=false` makes every SSH-based clone fail
    /// immediately and deterministically, so batch behavior is testable
    /// offline; `GIT_TERMINAL_PROMPT=0` keeps git from ever waiting on
    /// credentials.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("repoherd");
        cmd.current_dir(self.path())
            .env("GIT_SSH_COMMAND", "false")
            .env("GIT_TERMINAL_PROMPT", "0");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_repos() {
        let fixture = TestFixture::new().with_repos("org/a\n");
        assert!(fixture.repos_path().exists());
    }
}
