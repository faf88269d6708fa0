use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use steelstock_core::{DomainError, DomainResult, Entity, RecordId};

use crate::catalog;

/// Quantities below this (but above zero) are low stock; at or above it,
/// in stock. Zero is out of stock.
pub const LOW_STOCK_THRESHOLD: u64 = 50;

/// Derived stock-level classification.
///
/// Serialized with the human-facing labels the warehouse screens show
/// ("In Stock" / "Low Stock" / "Out of Stock").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// All statuses, in display order (used to populate filter choices).
    pub const ALL: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    /// Classification for a quantity. Total over `u64`.
    pub fn for_quantity(quantity: u64) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// One inventory entry.
///
/// Records are created only through [`InventoryStore::add_item`] (which
/// mints the id, derives the status, and stamps the date) and are never
/// mutated in place; removal deletes them outright.
///
/// [`InventoryStore::add_item`]: crate::store::InventoryStore::add_item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub unit: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: StockStatus,
    pub last_updated: NaiveDate,
}

impl Entity for InventoryRecord {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Caller-supplied fields for a new record, before id/status/date are
/// assigned.
///
/// `Default` mirrors the creation form's initial state: blank text fields,
/// zero quantity, and the default unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub unit: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            quantity: 0,
            unit: catalog::DEFAULT_UNIT.to_string(),
            location: String::new(),
            description: None,
        }
    }
}

impl RecordDraft {
    /// Required-field presence check, performed by the creation form
    /// before the store is called. The store itself never validates.
    pub fn validate(&self) -> DomainResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("unit", &self.unit),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{field} is required")));
            }
        }
        Ok(())
    }

    /// Finalize the draft into a record. Status is derived from quantity
    /// here and nowhere else.
    pub(crate) fn into_record(self, id: RecordId, last_updated: NaiveDate) -> InventoryRecord {
        InventoryRecord {
            id,
            status: StockStatus::for_quantity(self.quantity),
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            location: self.location,
            description: self.description,
            last_updated,
        }
    }
}
