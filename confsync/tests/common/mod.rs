//! Common test utilities for integration tests.
//!
//! Provides document and id builders plus a stub `drush` executable that
//! serves and records configuration through a state directory, so store
//! behavior can be exercised without a real site.

use confsync::{ConfigDocument, ConfigId};

/// Builds a [`ConfigId`], panicking on invalid input.
#[allow(dead_code)]
pub fn id(value: &str) -> ConfigId {
    ConfigId::new(value).unwrap()
}

/// Parses a [`ConfigDocument`] from YAML, panicking on invalid input.
#[allow(dead_code)]
pub fn doc(yaml: &str) -> ConfigDocument {
    ConfigDocument::from_yaml_str(yaml).unwrap()
}

#[cfg(unix)]
#[allow(unused_imports)]
pub use fixture::DrushFixture;

#[cfg(unix)]
mod fixture {
    use std::fs;
    use std::path::{Path, PathBuf};

    use confsync::DrushStore;
    use tempfile::TempDir;

    /// A stub drush installation backed by a state directory.
    ///
    /// The stub serves `config:get` from `<state>/<id>.yml`, answers with a
    /// "does not exist" message for unknown ids, and copies staged files
    /// into the state directory on `config:import`. Behavior flags are
    /// plain marker files:
    ///
    /// - `fail-get`: every fetch fails with a non-absence error
    /// - `fail-import`: every import fails
    /// - `slow`: the tool sleeps long enough to trip any short timeout
    ///
    /// Each import also records its `--source` directory in `last-source`,
    /// which lets tests verify staging cleanup.
    #[allow(dead_code)]
    pub struct DrushFixture {
        // Held for its Drop; removes the whole fixture tree.
        _temp: TempDir,
        pub drush_path: PathBuf,
        pub state_dir: PathBuf,
        pub root_dir: PathBuf,
    }

    #[allow(dead_code)]
    impl DrushFixture {
        pub fn new() -> Self {
            let temp = tempfile::tempdir().unwrap();
            let state_dir = temp.path().join("state");
            let root_dir = temp.path().join("site");
            fs::create_dir_all(&state_dir).unwrap();
            fs::create_dir_all(&root_dir).unwrap();
            let drush_path = write_stub_drush(temp.path(), &state_dir);
            Self {
                _temp: temp,
                drush_path,
                state_dir,
                root_dir,
            }
        }

        /// A store wired to the stub tool and fixture site root.
        pub fn store(&self) -> DrushStore {
            DrushStore::new(&self.root_dir).with_drush_path(&self.drush_path)
        }

        /// Places a document in the stub's state, as if previously imported.
        pub fn seed(&self, id: &str, yaml: &str) {
            fs::write(self.state_dir.join(format!("{id}.yml")), yaml).unwrap();
        }

        /// Returns the stored YAML text for `id`, if the stub holds one.
        pub fn stored(&self, id: &str) -> Option<String> {
            fs::read_to_string(self.state_dir.join(format!("{id}.yml"))).ok()
        }

        /// Creates a behavior flag for the stub.
        pub fn touch(&self, flag: &str) {
            fs::write(self.state_dir.join(flag), "").unwrap();
        }

        /// The `--source` directory of the most recent import attempt.
        pub fn last_source(&self) -> Option<PathBuf> {
            let recorded = fs::read_to_string(self.state_dir.join("last-source")).ok()?;
            let trimmed = recorded.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            }
        }
    }

    fn write_stub_drush(bin_dir: &Path, state_dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            r#"#!/bin/sh
STATE="{state}"
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
    echo "$5" > "$STATE/last-source"
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
        fs::write(&path, script).unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&path, permissions).unwrap();
        path
    }
}
