//! The inventory store: single source of truth for the record collection.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use steelstock_core::{Entity, IdSequence, RecordId};
use steelstock_events::{EventBus, InMemoryEventBus, Subscription};

use crate::events::InventoryEvent;
use crate::record::{InventoryRecord, RecordDraft};

/// Ordered, in-memory inventory collection.
///
/// The store exclusively owns its records: callers read the full ordered
/// [`snapshot`](InventoryStore::snapshot) and mutate only through
/// [`add_item`](InventoryStore::add_item) /
/// [`remove_item`](InventoryStore::remove_item). Identifiers come from a
/// strictly monotonic sequence, so a removed record's id is never minted
/// again. Every successful mutation bumps the revision counter and
/// publishes an [`InventoryEvent`] to subscribers.
#[derive(Debug)]
pub struct InventoryStore {
    records: Vec<InventoryRecord>,
    ids: IdSequence,
    revision: u64,
    bus: InMemoryEventBus<InventoryEvent>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Empty store; the first added record gets id `ST001`.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdSequence::new(),
            revision: 0,
            bus: InMemoryEventBus::new(),
        }
    }

    /// Store pre-loaded with the plant's standing example inventory
    /// (ST001..ST003). The id sequence continues after the seeds.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, category, quantity, location, date) in [
            (
                "Hot Rolled Coils",
                "Hot Rolled Products",
                250,
                "Warehouse 1",
                seed_date(2024, 1, 15),
            ),
            (
                "Cold Rolled Sheets",
                "Cold Rolled Products",
                180,
                "Warehouse 2",
                seed_date(2024, 1, 14),
            ),
            (
                "Galvanized Coils",
                "Coated Products",
                15,
                "Warehouse 3",
                seed_date(2024, 1, 13),
            ),
        ] {
            let draft = RecordDraft {
                name: name.to_string(),
                category: category.to_string(),
                quantity,
                location: location.to_string(),
                ..RecordDraft::default()
            };
            store.insert(draft, date);
        }
        info!(records = store.len(), "inventory store seeded");
        store
    }

    /// Full ordered view of the collection. Always current; never paged.
    pub fn snapshot(&self) -> &[InventoryRecord] {
        &self.records
    }

    /// Counter bumped once per successful mutation. Lets derived views
    /// detect staleness without comparing whole snapshots.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Open a subscription receiving an [`InventoryEvent`] per mutation
    /// from this point on.
    pub fn subscribe(&self) -> Subscription<InventoryEvent> {
        self.bus.subscribe()
    }

    /// Create a record from `draft`: mint the next id, derive the stock
    /// status from the quantity, stamp today's date, and append.
    ///
    /// The draft is taken as-is — required-field presence is the creation
    /// form's concern, checked via [`RecordDraft::validate`] before this
    /// call.
    pub fn add_item(&mut self, draft: RecordDraft) -> &InventoryRecord {
        self.add_item_on(draft, Utc::now().date_naive())
    }

    /// [`add_item`](InventoryStore::add_item) with an explicit
    /// `last_updated` date, for deterministic callers.
    pub fn add_item_on(&mut self, draft: RecordDraft, date: NaiveDate) -> &InventoryRecord {
        let idx = self.insert(draft, date);
        let record = &self.records[idx];
        info!(id = %record.id, status = %record.status, "inventory record added");
        record
    }

    /// Remove the record with the given id. Removing an unknown id is a
    /// silent no-op, not an error.
    pub fn remove_item(&mut self, id: &RecordId) {
        match self.records.iter().position(|record| record.has_id(id)) {
            Some(idx) => {
                self.records.remove(idx);
                self.revision += 1;
                info!(%id, "inventory record removed");
                self.notify(InventoryEvent::RecordRemoved {
                    id: id.clone(),
                    occurred_at: Utc::now(),
                });
            }
            None => debug!(%id, "remove ignored, no such record"),
        }
    }

    fn insert(&mut self, draft: RecordDraft, date: NaiveDate) -> usize {
        let id = self.ids.next_id();
        let record = draft.into_record(id.clone(), date);
        let idx = self.records.len();
        self.records.push(record);
        self.revision += 1;
        self.notify(InventoryEvent::RecordAdded {
            id,
            occurred_at: Utc::now(),
        });
        idx
    }

    fn notify(&self, event: InventoryEvent) {
        // Notification is best-effort; the mutation itself already holds.
        if let Err(err) = self.bus.publish(event) {
            warn!(?err, "inventory change notification dropped");
        }
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
