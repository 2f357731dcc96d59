//! Shared testing utilities for tablakit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `tablakit` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablakit").expect("Failed to locate tablakit binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write `tablakit.toml` into the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("tablakit.toml"), content)
            .expect("Failed to write tablakit.toml");
    }

    /// Create a directory under the working directory, populated with files.
    pub fn create_dir_with_files(&self, dir: &str, files: &[&str]) -> PathBuf {
        let path = self.work_dir.join(dir);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        for file in files {
            fs::write(path.join(file), b"fLaC").expect("Failed to write test file");
        }
        path
    }

    /// Create a fake pipe pair backed by regular files: an empty command
    /// channel and a response channel preloaded with the given lines.
    pub fn create_fake_pipes(&self, responses: &[&str]) -> (PathBuf, PathBuf) {
        let to = self.work_dir.join("to_pipe");
        let from = self.work_dir.join("from_pipe");
        fs::write(&to, "").expect("Failed to create command pipe file");
        let mut content = responses.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&from, content).expect("Failed to create response pipe file");
        (to, from)
    }

    /// Content accumulated on the fake command channel.
    pub fn sent_commands(&self, to_pipe: &Path) -> String {
        fs::read_to_string(to_pipe).expect("Failed to read command pipe file")
    }
}
