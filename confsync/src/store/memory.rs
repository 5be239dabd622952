//! In-memory configuration store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::ConfigStore;
use crate::document::{ConfigDocument, ConfigId};
use crate::error::{Error, Result};

/// A [`ConfigStore`] holding documents in process memory.
///
/// Built for exercising reconciliation without a site: it counts calls and
/// can be told to fail, so tests can assert that no write happened or that
/// failures propagate. Nothing here shells out.
///
/// # Examples
///
/// ```
/// use confsync::{ConfigDocument, ConfigId, ConfigStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// let id = ConfigId::new("system.site").unwrap();
/// let doc = ConfigDocument::from_yaml_str("name: Site").unwrap();
///
/// store.set(&id, &doc).unwrap();
/// assert_eq!(store.get(&id).unwrap(), Some(doc));
/// assert_eq!(store.set_calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    documents: HashMap<ConfigId, ConfigDocument>,
    get_calls: usize,
    set_calls: usize,
    fail_gets: Option<String>,
    fail_sets: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a document, without counting as a `set` call.
    pub fn seed(&self, id: &ConfigId, document: ConfigDocument) {
        self.lock().documents.insert(id.clone(), document);
    }

    /// Returns the stored document for `id`, if any.
    #[must_use]
    pub fn document(&self, id: &ConfigId) -> Option<ConfigDocument> {
        self.lock().documents.get(id).cloned()
    }

    /// Number of `get` calls made so far.
    #[must_use]
    pub fn get_calls(&self) -> usize {
        self.lock().get_calls
    }

    /// Number of `set` calls made so far.
    #[must_use]
    pub fn set_calls(&self) -> usize {
        self.lock().set_calls
    }

    /// Makes every subsequent `get` fail with a store error.
    pub fn fail_gets(&self, details: impl Into<String>) {
        self.lock().fail_gets = Some(details.into());
    }

    /// Makes every subsequent `set` fail with an apply error.
    pub fn fail_sets(&self, details: impl Into<String>) {
        self.lock().fail_sets = Some(details.into());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, id: &ConfigId) -> Result<Option<ConfigDocument>> {
        let mut inner = self.lock();
        inner.get_calls += 1;
        if let Some(details) = &inner.fail_gets {
            return Err(Error::Store {
                id: id.to_string(),
                details: details.clone(),
            });
        }
        Ok(inner.documents.get(id).cloned())
    }

    fn set(&self, id: &ConfigId, document: &ConfigDocument) -> Result<()> {
        let mut inner = self.lock();
        inner.set_calls += 1;
        if let Some(details) = &inner.fail_sets {
            return Err(Error::Apply {
                id: id.to_string(),
                details: details.clone(),
            });
        }
        inner.documents.insert(id.clone(), document.clone());
        Ok(())
    }
}
