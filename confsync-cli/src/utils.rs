//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including site root resolution, store construction, desired-document
//! loading, and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use confsync::{ConfigDocument, DrushStore};
use serde::Serialize;
use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the site installation root.
    pub root: Option<PathBuf>,

    /// Override the path to the drush executable.
    pub drush_path: Option<PathBuf>,

    /// Override the tool invocation timeout (in seconds).
    pub timeout: Option<u64>,
}

/// Resolve the site root, using CWD if not specified.
///
/// Explicit roots are taken verbatim; the external tool resolves them
/// relative to its own working directory, so relative paths keep working.
pub fn resolve_root(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.root {
        Some(path) => Ok(path.clone()),
        None => Ok(env::current_dir()?),
    }
}

/// Build the drush-backed store from global options.
pub fn build_store(global: &GlobalOptions) -> Result<DrushStore, CliError> {
    let mut store = DrushStore::new(resolve_root(global)?);

    if let Some(drush_path) = &global.drush_path {
        store = store.with_drush_path(drush_path);
    }
    if let Some(seconds) = global.timeout {
        store = store.with_timeout(Duration::from_secs(seconds));
    }

    Ok(store)
}

/// Read a desired document from a file, or from stdin when the path is `-`.
///
/// Parse failures map to invalid-arguments since the document came from the
/// caller, not from the live site.
pub fn read_document(path: &Path) -> Result<ConfigDocument, CliError> {
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    ConfigDocument::from_yaml_str(&text)
        .map_err(|e| CliError::InvalidArguments(format!("invalid desired document: {e}")))
}

/// Output format for documents and outcomes.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML (the staging file format)
    Yaml,
    /// JSON
    Json,
}

/// Serialize a value using the selected output format.
///
/// The returned string always ends with a newline.
pub fn render<T: Serialize>(format: OutputFormat, value: &T) -> Result<String, CliError> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| CliError::Library(e.into())),
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(value)
                .map_err(|e| CliError::Render(e.to_string()))?;
            text.push('\n');
            Ok(text)
        }
    }
}
