//! Memoized filtered view and dropdown derivations.

use steelstock_inventory::{InventoryRecord, InventoryStore};

use crate::filter::InventoryQuery;

/// A list screen's filtered slice of the store.
///
/// Caches exactly the last computed result, keyed on the store revision
/// and the query; any change to either recomputes synchronously. There is
/// no deeper cache.
#[derive(Debug, Default)]
pub struct FilteredView {
    cache: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    revision: u64,
    query: InventoryQuery,
    results: Vec<InventoryRecord>,
}

impl FilteredView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The records matching `query`, in snapshot order.
    pub fn results(&mut self, store: &InventoryStore, query: &InventoryQuery) -> &[InventoryRecord] {
        let stale = !matches!(
            &self.cache,
            Some(entry) if entry.revision == store.revision() && &entry.query == query
        );
        if stale {
            self.cache = Some(CacheEntry {
                revision: store.revision(),
                query: query.clone(),
                results: query.apply(store.snapshot()),
            });
        }
        self.cache
            .as_ref()
            .map(|entry| entry.results.as_slice())
            .unwrap_or(&[])
    }
}

/// Distinct category labels in first-appearance order, as the list
/// screen's category dropdown derives them from the snapshot.
pub fn distinct_categories(snapshot: &[InventoryRecord]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for record in snapshot {
        if !categories.contains(&record.category) {
            categories.push(record.category.clone());
        }
    }
    categories
}
