//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a stub drush executable
//! - Command builder helpers for common patterns
//! - State inspection helpers for asserting on imported documents

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated stub drush installation.
///
/// The stub serves `config:get` from `<state>/<id>.yml`, answers with a
/// "does not exist" message for unknown ids, and copies staged files into
/// the state directory on `config:import`. Behavior flags are plain marker
/// files:
///
/// - `fail-get`: every fetch fails with a non-absence error
/// - `fail-import`: every import fails
/// - `slow`: the tool sleeps long enough to trip any short timeout
///
/// Every invocation records its working directory in `last-cwd`, which
/// lets tests verify that `--root` reaches the tool.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the stub drush executable
    pub drush_path: PathBuf,
    /// Directory the stub serves and stores configuration from
    pub state_dir: PathBuf,
    /// Site root passed to the CLI
    pub root_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with a stub drush on disk.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let state_dir = temp_path.join("state");
        let root_dir = temp_path.join("site");
        fs::create_dir_all(&state_dir).expect("Failed to create state dir");
        fs::create_dir_all(&root_dir).expect("Failed to create root dir");
        let drush_path = write_stub_drush(&temp_path, &state_dir);

        Self {
            temp_dir,
            temp_path,
            drush_path,
            state_dir,
            root_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Use this when you need to override the drush path or site root, or
    /// test global flag behavior.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("confsync").expect("Failed to find confsync binary")
    }

    /// Get a command builder wired to the stub drush and fixture site root.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--drush-path").arg(&self.drush_path);
        cmd.arg("--root").arg(&self.root_dir);
        cmd
    }

    /// Place a document in the stub's state, as if previously imported.
    pub fn seed(&self, id: &str, yaml: &str) {
        fs::write(self.state_dir.join(format!("{id}.yml")), yaml)
            .expect("Failed to seed state dir");
    }

    /// Return the stored YAML text for `id`, if the stub holds one.
    pub fn stored(&self, id: &str) -> Option<String> {
        fs::read_to_string(self.state_dir.join(format!("{id}.yml"))).ok()
    }

    /// Create a behavior flag for the stub.
    pub fn touch(&self, flag: &str) {
        fs::write(self.state_dir.join(flag), "").expect("Failed to create flag file");
    }

    /// Write a desired document into the test environment and return its path.
    pub fn write_desired(&self, name: &str, yaml: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, yaml).expect("Failed to write desired document");
        path
    }

    /// The working directory of the most recent stub invocation.
    pub fn last_cwd(&self) -> Option<String> {
        let recorded = fs::read_to_string(self.state_dir.join("last-cwd")).ok()?;
        Some(recorded.trim().to_string())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_stub_drush(bin_dir: &Path, state_dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r#"#!/bin/sh
STATE="{state}"
pwd -P > "$STATE/last-cwd"
case "$1" in
  config:get)
    ID="$2"
    if [ -f "$STATE/fail-get" ]; then
      echo "Command config:get failed: bootstrap error" >&2
      exit 1
    fi
    if [ -f "$STATE/slow" ]; then
      sleep 30
    fi
    if [ -f "$STATE/$ID.yml" ]; then
      cat "$STATE/$ID.yml"
      exit 0
    fi
    echo "Config $ID does not exist" >&2
    exit 1
    ;;
  --yes)
    if [ -f "$STATE/fail-import" ]; then
      echo "Import of staged configuration failed" >&2
      exit 1
    fi
    if [ -f "$STATE/slow" ]; then
      sleep 30
    fi
    cp "$5"/*.yml "$STATE"/
    exit 0
    ;;
esac
echo "unexpected drush invocation: $*" >&2
exit 64
"#,
        state = state_dir.display()
    );

    let path = bin_dir.join("drush");
    fs::write(&path, script).expect("Failed to write stub drush");
    let mut permissions = fs::metadata(&path)
        .expect("Failed to stat stub drush")
        .permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).expect("Failed to mark stub drush executable");
    path
}
