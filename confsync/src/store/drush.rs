//! Drush-backed configuration store.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::ConfigStore;
use crate::document::{ConfigDocument, ConfigId};
use crate::error::{Error, Result};
use crate::exec::{ToolCommand, DEFAULT_TIMEOUT_SECS};

/// Marker drush prints when asked for configuration that does not exist.
///
/// Matched case-insensitively over the combined diagnostic output; the
/// exact message shape has varied across drush releases.
const ABSENT_MARKER: &str = "does not exist";

/// A [`ConfigStore`] backed by the `drush` command-line tool.
///
/// Fetches run `drush config:get <id>` and parse stdout as YAML. Writes
/// stage the document as `<id>.yml` in a fresh temporary directory and run
/// `drush --yes config:import --partial --source <dir>`; the partial import
/// leaves every other configuration entry untouched. The staging directory
/// is removed on every exit path.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use confsync::DrushStore;
///
/// let store = DrushStore::new("/var/www/site")
///     .with_drush_path("/usr/local/bin/drush")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct DrushStore {
    drush_path: PathBuf,
    root: PathBuf,
    timeout: Duration,
}

impl DrushStore {
    /// Creates a store for the site installed at `root`.
    ///
    /// The tool defaults to `drush` resolved via the search path, with the
    /// default invocation timeout.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            drush_path: PathBuf::from("drush"),
            root: root.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the path to the drush executable.
    #[must_use]
    pub fn with_drush_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.drush_path = path.into();
        self
    }

    /// Sets the per-invocation timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured site root.
    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Base command with the site root as working directory.
    fn command(&self) -> ToolCommand {
        ToolCommand::new(&self.drush_path)
            .current_dir(&self.root)
            .timeout(self.timeout)
    }
}

impl ConfigStore for DrushStore {
    fn get(&self, id: &ConfigId) -> Result<Option<ConfigDocument>> {
        let output = self.command().arg("config:get").arg(id.as_str()).run()?;
        if output.success() {
            return Ok(Some(ConfigDocument::from_yaml_str(output.stdout())?));
        }

        let diagnostic = output.diagnostic();
        if diagnostic.to_lowercase().contains(ABSENT_MARKER) {
            log::debug!("config '{id}' does not exist in the store");
            return Ok(None);
        }

        Err(Error::Store {
            id: id.to_string(),
            details: diagnostic,
        })
    }

    fn set(&self, id: &ConfigId, document: &ConfigDocument) -> Result<()> {
        // The guard removes the staging directory on every exit path,
        // including the early error returns below.
        let staging = tempfile::Builder::new().prefix("confsync-").tempdir()?;
        let staged_file = staging.path().join(id.file_name());
        fs::write(&staged_file, document.to_yaml_string()?)?;

        let output = self
            .command()
            .arg("--yes")
            .arg("config:import")
            .arg("--partial")
            .arg("--source")
            .arg(staging.path().to_string_lossy().into_owned())
            .run()?;

        if output.success() {
            Ok(())
        } else {
            Err(Error::Apply {
                id: id.to_string(),
                details: output.diagnostic(),
            })
        }
    }
}
