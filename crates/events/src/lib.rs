//! `steelstock-events` — change-notification mechanics.
//!
//! Domain-agnostic pub/sub used by the inventory store to tell observers
//! that the snapshot changed. Synchronous and in-process only; there is no
//! transport, no persistence, and no delivery beyond the running process.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::InMemoryEventBus;
