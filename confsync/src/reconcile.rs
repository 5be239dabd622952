//! The reconciliation operation.
//!
//! Reconciliation brings one remote configuration entry in line with a
//! desired document: fetch the current state, normalize it, merge or
//! replace, diff canonically, and import only when something differs.

use serde::{Deserialize, Serialize};

use crate::document::{ConfigDocument, ConfigId};
use crate::error::Result;
use crate::merge::merge_documents;
use crate::store::ConfigStore;

/// Options for one reconciliation call.
///
/// # Examples
///
/// ```
/// use confsync::{ConfigDocument, ConfigId, ReconcileOptions};
///
/// let id = ConfigId::new("system.site").unwrap();
/// let desired = ConfigDocument::from_yaml_str("name: New Name").unwrap();
///
/// let options = ReconcileOptions::new(id, desired)
///     .with_merge(false)
///     .with_dry_run(true);
/// assert!(!options.merge());
/// assert!(options.dry_run());
/// ```
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    id: ConfigId,
    desired: ConfigDocument,
    merge: bool,
    dry_run: bool,
}

impl ReconcileOptions {
    /// Creates options targeting `id` with the given desired document.
    ///
    /// Merging is enabled and dry-run disabled by default.
    #[must_use]
    pub const fn new(id: ConfigId, desired: ConfigDocument) -> Self {
        Self {
            id,
            desired,
            merge: true,
            dry_run: false,
        }
    }

    /// Enables or disables merging with the current document.
    ///
    /// With merging disabled the desired document replaces the current one
    /// outright.
    #[must_use]
    pub const fn with_merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    /// Enables or disables dry-run mode.
    ///
    /// A dry run computes the would-be result but never writes.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The target configuration id.
    #[must_use]
    pub const fn id(&self) -> &ConfigId {
        &self.id
    }

    /// The desired document.
    #[must_use]
    pub const fn desired(&self) -> &ConfigDocument {
        &self.desired
    }

    /// Whether merging is enabled.
    #[must_use]
    pub const fn merge(&self) -> bool {
        self.merge
    }

    /// Whether dry-run mode is enabled.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Action a reconciliation plan will take.
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileAction {
    /// Live configuration already matches the target; nothing to import.
    NoChange,
    /// Import the target document under the given id.
    Import {
        /// The id being written.
        id: ConfigId,
    },
}

impl ReconcileAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::NoChange => "no change required".to_string(),
            Self::Import { id } => format!("import configuration '{id}'"),
        }
    }
}

/// The computed plan for one reconciliation.
///
/// A plan holds everything decided before any write: the literal previous
/// document, the target document, and the action the diff calls for.
/// Building a plan never mutates the store.
#[derive(Debug, Clone)]
pub struct ReconcilePlan {
    action: ReconcileAction,
    previous: Option<ConfigDocument>,
    target: ConfigDocument,
}

impl ReconcilePlan {
    /// The action the diff calls for.
    #[must_use]
    pub const fn action(&self) -> &ReconcileAction {
        &self.action
    }

    /// The previous document exactly as fetched, including any reserved
    /// metadata. `None` when the store had no entry.
    #[must_use]
    pub const fn previous(&self) -> Option<&ConfigDocument> {
        self.previous.as_ref()
    }

    /// The document that would be imported.
    #[must_use]
    pub const fn target(&self) -> &ConfigDocument {
        &self.target
    }

    /// Returns true if executing this plan would write to the store.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        matches!(self.action, ReconcileAction::Import { .. })
    }
}

/// Result of one reconciliation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    /// Whether an import was performed.
    pub changed: bool,
    /// The document previously in the store, exactly as fetched.
    pub old_config: Option<ConfigDocument>,
    /// The document that describes the target state after the call.
    pub config: ConfigDocument,
}

/// Reconciles desired configuration documents against a [`ConfigStore`].
///
/// # Examples
///
/// ```
/// use confsync::{ConfigDocument, ConfigId, MemoryStore, ReconcileOptions, Reconciler};
///
/// let store = MemoryStore::new();
/// let id = ConfigId::new("system.site").unwrap();
/// let desired = ConfigDocument::from_yaml_str("name: Site").unwrap();
///
/// let outcome = Reconciler::new(&store)
///     .reconcile(&ReconcileOptions::new(id, desired))
///     .unwrap();
/// assert!(outcome.changed);
/// ```
pub struct Reconciler<'a, S: ConfigStore> {
    store: &'a S,
}

impl<'a, S: ConfigStore> Reconciler<'a, S> {
    /// Creates a reconciler over the given store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Builds the reconciliation plan: fetch, normalize, merge or replace,
    /// and diff. Never writes.
    ///
    /// Absence of the current document is absorbed as an empty current
    /// state. The reserved metadata key is stripped from both sides before
    /// merging and comparing, so it can never reach a freshly imported
    /// document, while [`ReconcilePlan::previous`] still carries the fetch
    /// result verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails for a reason other than absence
    /// or a document cannot be serialized for comparison.
    pub fn plan(&self, options: &ReconcileOptions) -> Result<ReconcilePlan> {
        let previous = self.store.get(options.id())?;
        log::debug!(
            "fetched '{}': {}",
            options.id(),
            if previous.is_some() { "present" } else { "absent" }
        );

        let current = previous
            .as_ref()
            .map(ConfigDocument::stripped)
            .unwrap_or_default();
        let desired = options.desired().stripped();

        let target = if options.merge() {
            merge_documents(&current, &desired)
        } else {
            desired
        };

        let changed = target.canonical_yaml()? != current.canonical_yaml()?;
        let action = if changed {
            ReconcileAction::Import {
                id: options.id().clone(),
            }
        } else {
            ReconcileAction::NoChange
        };
        log::debug!("plan for '{}': {}", options.id(), action.description());

        Ok(ReconcilePlan {
            action,
            previous,
            target,
        })
    }

    /// Runs the full reconciliation described by `options`.
    ///
    /// In dry-run mode the outcome reports `changed: false` and no write
    /// happens, but the returned document still reflects the would-be
    /// result. Otherwise the target is imported exactly when the plan found
    /// a difference.
    ///
    /// # Errors
    ///
    /// Returns an error if planning fails or the import is rejected by the
    /// store. A failed import never reports `changed: true`.
    pub fn reconcile(&self, options: &ReconcileOptions) -> Result<ReconcileOutcome> {
        let plan = self.plan(options)?;

        if options.dry_run() {
            return Ok(ReconcileOutcome {
                changed: false,
                old_config: plan.previous,
                config: plan.target,
            });
        }

        let changed = match &plan.action {
            ReconcileAction::NoChange => false,
            ReconcileAction::Import { id } => {
                self.store.set(id, &plan.target)?;
                log::debug!("imported '{id}'");
                true
            }
        };

        Ok(ReconcileOutcome {
            changed,
            old_config: plan.previous,
            config: plan.target,
        })
    }
}
