use chrono::{DateTime, Utc};

use steelstock_core::RecordId;
use steelstock_events::Event;

/// Fact published by the store after a successful mutation.
///
/// Observers holding a stale snapshot re-read [`InventoryStore::snapshot`]
/// when one of these arrives; the event itself carries only what changed.
///
/// [`InventoryStore::snapshot`]: crate::store::InventoryStore::snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    RecordAdded {
        id: RecordId,
        occurred_at: DateTime<Utc>,
    },
    RecordRemoved {
        id: RecordId,
        occurred_at: DateTime<Utc>,
    },
}

impl InventoryEvent {
    pub fn record_id(&self) -> &RecordId {
        match self {
            InventoryEvent::RecordAdded { id, .. } => id,
            InventoryEvent::RecordRemoved { id, .. } => id,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::RecordAdded { .. } => "inventory.record.added",
            InventoryEvent::RecordRemoved { .. } => "inventory.record.removed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::RecordAdded { occurred_at, .. } => *occurred_at,
            InventoryEvent::RecordRemoved { occurred_at, .. } => *occurred_at,
        }
    }
}
