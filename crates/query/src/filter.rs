use steelstock_inventory::{InventoryRecord, StockStatus};

/// Free-text / category / status filter over a snapshot.
///
/// Each part defaults to match-all: empty search text, `None` category,
/// `None` status. A record is kept only when all three predicates hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryQuery {
    /// Case-insensitive substring matched against the record name or the
    /// id's canonical text. Empty matches everything.
    pub search: String,
    /// Exact category label; `None` matches everything.
    pub category: Option<String>,
    /// `None` matches everything.
    pub status: Option<StockStatus>,
}

impl InventoryQuery {
    pub fn is_match_all(&self) -> bool {
        self.search.is_empty() && self.category.is_none() && self.status.is_none()
    }

    pub fn matches(&self, record: &InventoryRecord) -> bool {
        self.matches_search(record) && self.matches_category(record) && self.matches_status(record)
    }

    pub fn matches_search(&self, record: &InventoryRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.id.as_str().to_lowercase().contains(&needle)
    }

    pub fn matches_category(&self, record: &InventoryRecord) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| category == record.category)
    }

    pub fn matches_status(&self, record: &InventoryRecord) -> bool {
        self.status.map_or(true, |status| status == record.status)
    }

    /// The subsequence of `snapshot` matching all predicates, in snapshot
    /// order.
    pub fn apply(&self, snapshot: &[InventoryRecord]) -> Vec<InventoryRecord> {
        snapshot
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
