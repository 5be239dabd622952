#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # confsync
//!
//! A library for reconciling declared configuration documents with the live
//! configuration of a Drupal site, driven through the `drush` command-line
//! tool.
//!
//! Reconciliation is idempotent: the current document is fetched, desired
//! values are merged into it (or replace it outright), and an import runs
//! only when the two differ in canonical form.
//!
//! ## Core Types
//!
//! - [`ConfigId`] and [`ConfigDocument`]: The data model
//! - [`ConfigStore`], [`DrushStore`], [`MemoryStore`]: Storage backends
//! - [`Reconciler`], [`ReconcileOptions`], [`ReconcileOutcome`]: The operation
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use confsync::{ConfigDocument, ConfigId, MemoryStore, ReconcileOptions, Reconciler};
//!
//! let store = MemoryStore::new();
//! let id = ConfigId::new("system.site").unwrap();
//! let desired = ConfigDocument::from_yaml_str("name: My Site").unwrap();
//!
//! // First call imports, second call is a no-op.
//! let reconciler = Reconciler::new(&store);
//! let first = reconciler
//!     .reconcile(&ReconcileOptions::new(id.clone(), desired.clone()))
//!     .unwrap();
//! let second = reconciler
//!     .reconcile(&ReconcileOptions::new(id, desired))
//!     .unwrap();
//! assert!(first.changed);
//! assert!(!second.changed);
//! ```

pub mod document;
pub mod error;
pub mod exec;
pub mod logging;
pub mod merge;
pub mod reconcile;
pub mod store;

// Re-export key types at crate root for convenience
pub use document::{ConfigDocument, ConfigId, InvalidIdError, RESERVED_METADATA_KEY};
pub use error::{Error, Result};
pub use exec::{ToolCommand, ToolOutput, DEFAULT_TIMEOUT_SECS};
pub use logging::{init_logger, LogLevel, Logger};
pub use merge::merge_documents;
pub use reconcile::{
    ReconcileAction, ReconcileOptions, ReconcileOutcome, ReconcilePlan, Reconciler,
};
pub use store::{ConfigStore, DrushStore, MemoryStore};
