//! StoreWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Declarative container-layout builder.
///
/// # Example
/// ```no_run
/// use serde_json::json;
/// use shipex_testing::StoreWorld;
///
/// let world = StoreWorld::new()
///     .with_event("2025-8-1", "PRO123", "a.json", &json!({"currentTerminal": "010-CLT"}));
///
/// let output = world
///     .run(&["--start-date", "2025-8-1", "--end-date", "2025-8-1"])
///     .unwrap();
/// assert!(output.status.success());
/// ```
pub struct StoreWorld {
    temp_dir: TempDir,
    container_root: PathBuf,
}

impl Default for StoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreWorld {
    /// Create an isolated environment with an empty container directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let container_root = temp_dir.path().join("container");
        std::fs::create_dir_all(&container_root).expect("Failed to create container dir");
        Self {
            temp_dir,
            container_root,
        }
    }

    /// The directory standing in for the container root.
    pub fn container_root(&self) -> &Path {
        &self.container_root
    }

    /// Path under the temp root, for output files and config files.
    pub fn scratch_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Place one event JSON at `<date>/<pro>/<file>`.
    pub fn with_event(self, date: &str, pro: &str, file: &str, payload: &Value) -> Self {
        let dir = self.container_root.join(date).join(pro);
        std::fs::create_dir_all(&dir).expect("Failed to create entity dir");
        std::fs::write(
            dir.join(file),
            serde_json::to_vec_pretty(payload).expect("Failed to serialize payload"),
        )
        .expect("Failed to write event file");
        self
    }

    /// Place arbitrary bytes at a container-relative path (for malformed
    /// JSON and non-event files).
    pub fn with_raw_object(self, rel: &str, bytes: &[u8]) -> Self {
        let path = self.container_root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, bytes).expect("Failed to write raw object");
        self
    }

    /// Create an empty container-relative directory.
    pub fn with_dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.container_root.join(rel)).expect("Failed to create dir");
        self
    }

    /// A `shipex` command pointed at this world's container, with any
    /// ambient Azure credentials stripped so tests stay hermetic.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("shipex").expect("shipex binary should build");
        cmd.current_dir(self.temp_dir.path());
        cmd.arg("--local-root").arg(&self.container_root);
        for var in [
            "AZURE_STORAGE_CONNECTION_STRING",
            "AZURE_ACCOUNT_NAME",
            "AZURE_ACCOUNT_KEY",
            "AZURE_SAS_TOKEN",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run the CLI with extra args and capture the output.
    pub fn run(&self, args: &[&str]) -> Result<Output> {
        let mut cmd = self.command();
        cmd.args(args);
        Ok(cmd.output()?)
    }
}
