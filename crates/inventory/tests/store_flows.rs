//! Black-box flows against the store's public surface.

use steelstock_core::RecordId;
use steelstock_inventory::{InventoryStore, RecordDraft, StockStatus};

fn parse_id(text: &str) -> RecordId {
    text.parse().unwrap()
}

fn setup() {
    steelstock_observability::init();
}

#[test]
fn receive_new_material_then_retire_a_line() {
    setup();
    let mut store = InventoryStore::seeded();

    // New delivery of wire rods, none on hand yet.
    let draft = RecordDraft {
        name: "Wire Rods".to_string(),
        category: "Wire Rods".to_string(),
        quantity: 0,
        unit: "Tonnes".to_string(),
        location: "Warehouse 4".to_string(),
        description: None,
    };
    draft.validate().unwrap();

    let added = store.add_item(draft);
    assert_eq!(added.id.as_str(), "ST004");
    assert_eq!(added.status, StockStatus::OutOfStock);
    assert_eq!(added.status.label(), "Out of Stock");

    // Cold rolled sheets line retired.
    store.remove_item(&parse_id("ST002"));

    let ids: Vec<_> = store
        .snapshot()
        .iter()
        .map(|record| record.id.as_str())
        .collect();
    assert_eq!(ids, ["ST001", "ST003", "ST004"]);
}

#[test]
fn deleting_then_adding_never_reuses_a_live_id() {
    setup();
    let mut store = InventoryStore::seeded();
    store.remove_item(&parse_id("ST002"));

    let new_id = store
        .add_item(RecordDraft {
            name: "Stainless Slabs".to_string(),
            category: "Stainless Steel".to_string(),
            quantity: 75,
            location: "Warehouse 6".to_string(),
            ..RecordDraft::default()
        })
        .id
        .clone();

    for record in store.snapshot() {
        if record.name != "Stainless Slabs" {
            assert_ne!(record.id, new_id, "minted id collides with a live record");
        }
    }
    assert_eq!(new_id.as_str(), "ST004");
}

#[test]
fn snapshot_reflects_every_mutation_in_order() {
    setup();
    let mut store = InventoryStore::new();
    assert!(store.is_empty());

    for (name, quantity) in [("R1", 60), ("R2", 10), ("R3", 0)] {
        store.add_item(RecordDraft {
            name: name.to_string(),
            category: "Special Steel".to_string(),
            quantity,
            location: "Warehouse 5".to_string(),
            ..RecordDraft::default()
        });
    }

    let names: Vec<_> = store.snapshot().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["R1", "R2", "R3"]);

    store.remove_item(&parse_id("ST001"));
    let names: Vec<_> = store.snapshot().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["R2", "R3"]);
}
