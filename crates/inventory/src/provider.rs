//! Scoped access to an initialized store.

use std::sync::{Mutex, MutexGuard, OnceLock};

use steelstock_core::{DomainError, DomainResult};

use crate::store::InventoryStore;

/// Handle through which application scopes reach the one store instance.
///
/// The store must be installed exactly once with
/// [`init`](InventoryProvider::init) before any access. Touching
/// [`read`](InventoryProvider::read) or [`write`](InventoryProvider::write)
/// first is a programming error and panics immediately — an uninitialized
/// provider never hands out an empty store in its place.
#[derive(Debug)]
pub struct InventoryProvider {
    slot: OnceLock<Mutex<InventoryStore>>,
}

impl InventoryProvider {
    /// Empty, uninitialized provider. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Install the store. A second call is rejected with a conflict; the
    /// originally installed store stays in place.
    pub fn init(&self, store: InventoryStore) -> DomainResult<()> {
        self.slot
            .set(Mutex::new(store))
            .map_err(|_| DomainError::conflict("inventory provider already initialized"))
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Run `f` against the store read-only.
    ///
    /// # Panics
    /// If called before [`init`](InventoryProvider::init).
    pub fn read<R>(&self, f: impl FnOnce(&InventoryStore) -> R) -> R {
        f(&self.lock())
    }

    /// Run `f` against the store mutably.
    ///
    /// # Panics
    /// If called before [`init`](InventoryProvider::init).
    pub fn write<R>(&self, f: impl FnOnce(&mut InventoryStore) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, InventoryStore> {
        let slot = self
            .slot
            .get()
            .unwrap_or_else(|| panic!("inventory store accessed before InventoryProvider::init"));
        // The store stays usable even if a closure panicked mid-access.
        slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InventoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordDraft;

    #[test]
    fn init_then_read_and_write() {
        let provider = InventoryProvider::new();
        assert!(!provider.is_initialized());

        provider.init(InventoryStore::seeded()).unwrap();
        assert!(provider.is_initialized());
        assert_eq!(provider.read(|store| store.len()), 3);

        let id = provider.write(|store| {
            store
                .add_item(RecordDraft {
                    name: "Wire Rods".to_string(),
                    category: "Wire Products".to_string(),
                    quantity: 20,
                    location: "Warehouse 4".to_string(),
                    ..RecordDraft::default()
                })
                .id
                .clone()
        });
        assert_eq!(id.as_str(), "ST004");
        assert_eq!(provider.read(|store| store.len()), 4);
    }

    #[test]
    fn second_init_is_a_conflict_and_keeps_the_first_store() {
        let provider = InventoryProvider::new();
        provider.init(InventoryStore::seeded()).unwrap();

        let err = provider.init(InventoryStore::new()).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(provider.read(|store| store.len()), 3);
    }

    #[test]
    #[should_panic(expected = "accessed before InventoryProvider::init")]
    fn read_before_init_panics() {
        let provider = InventoryProvider::new();
        provider.read(|store| store.len());
    }

    #[test]
    #[should_panic(expected = "accessed before InventoryProvider::init")]
    fn write_before_init_panics() {
        let provider = InventoryProvider::new();
        provider.write(|store| store.remove_item(&"ST001".parse().unwrap()));
    }
}
