// crates/suggest-core/src/model/shared.rs
use super::Catalog;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// A catalog that can be replaced while lookups are running.
///
/// Readers take a [`snapshot`](SharedCatalog::snapshot) (an `Arc` clone) and
/// keep using it for the whole lookup; [`replace`](SharedCatalog::replace)
/// swaps the pointer in one step, so nobody ever sees half a catalog.
///
/// ```rust
/// use suggest_core::{Catalog, City, SharedCatalog};
///
/// # fn main() -> suggest_core::Result<()> {
/// let shared = SharedCatalog::new(Catalog::new(vec![])?);
/// let before = shared.snapshot();
///
/// shared.replace(Catalog::new(vec![City::new("Oslo", "Oslo", 700_000, 59.91, 10.75)])?);
///
/// assert!(before.is_empty());
/// assert_eq!(shared.snapshot().len(), 1);
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self::from_arc(Arc::new(catalog))
    }

    pub fn from_arc(catalog: Arc<Catalog>) -> Self {
        Self {
            current: RwLock::new(catalog),
        }
    }

    /// The catalog as of now. Later replacements do not affect it.
    pub fn snapshot(&self) -> Arc<Catalog> {
        // The guarded value is a single Arc; a panicked writer cannot tear it.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Installs `catalog` and returns the one it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        debug!(
            old = guard.len(),
            new = next.len(),
            "replacing shared catalog"
        );
        std::mem::replace(&mut *guard, next)
    }
}
