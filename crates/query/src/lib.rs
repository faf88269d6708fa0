//! View-level derived queries over the inventory snapshot.
//!
//! Nothing here is stored state: a query is a pure projection recomputed
//! from the store's current snapshot, with at most the last computed
//! result memoized. List screens build their tables and dropdowns from
//! this crate instead of reaching into the store.

pub mod filter;
pub mod view;

pub use filter::InventoryQuery;
pub use view::{FilteredView, distinct_categories};
