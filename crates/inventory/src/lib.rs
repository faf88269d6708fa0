//! Inventory domain module.
//!
//! The single source of truth for the plant's inventory collection: an
//! ordered in-memory store with monotonic identifier minting, derived
//! stock status, and change notification. No IO, no HTTP, no storage —
//! state lives only in the owning process.

pub mod catalog;
pub mod events;
pub mod provider;
pub mod record;
pub mod store;

pub use events::InventoryEvent;
pub use provider::InventoryProvider;
pub use record::{InventoryRecord, RecordDraft, StockStatus, LOW_STOCK_THRESHOLD};
pub use store::InventoryStore;
