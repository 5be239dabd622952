//! Storage backends for remote configuration.
//!
//! The management tool is a black-box subprocess; this module hides it
//! behind the [`ConfigStore`] trait so reconciliation logic can be tested
//! without spawning anything.

mod drush;
mod memory;

pub use drush::DrushStore;
pub use memory::MemoryStore;

use crate::document::{ConfigDocument, ConfigId};
use crate::error::Result;

/// Access to named configuration documents in a remote store.
///
/// Absence is not an error: [`get`](Self::get) returns `Ok(None)` when the
/// store holds no document under the id.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    /// Fetches the document named by `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails for any reason other than the
    /// document being absent.
    fn get(&self, id: &ConfigId) -> Result<Option<ConfigDocument>>;

    /// Writes `document` under `id` using the store's partial import.
    ///
    /// Only the named entry is touched; all other configuration in the
    /// store is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if staging or the import itself fails.
    fn set(&self, id: &ConfigId, document: &ConfigDocument) -> Result<()>;
}
