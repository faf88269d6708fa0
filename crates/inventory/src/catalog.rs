//! Advisory label catalogs.
//!
//! The fixed option lists the management form offers for new records. The
//! category set is open: the store accepts any label, so these exist for
//! form population and sanity checks, not enforcement.

/// Product categories carried by the plant.
pub const CATEGORIES: [&str; 8] = [
    "Hot Rolled Products",
    "Cold Rolled Products",
    "Coated Products",
    "Stainless Steel",
    "Alloy Steel",
    "Wire Products",
    "Rail Products",
    "Special Steel",
];

/// Measurement units.
pub const UNITS: [&str; 5] = ["Tonnes", "Kg", "Pieces", "Meters", "Sheets"];

/// Storage locations.
pub const LOCATIONS: [&str; 6] = [
    "Warehouse 1",
    "Warehouse 2",
    "Warehouse 3",
    "Warehouse 4",
    "Warehouse 5",
    "Warehouse 6",
];

/// Unit preselected on a blank draft.
pub const DEFAULT_UNIT: &str = "Tonnes";

pub fn is_known_category(label: &str) -> bool {
    CATEGORIES.contains(&label)
}

pub fn is_known_unit(label: &str) -> bool {
    UNITS.contains(&label)
}

pub fn is_known_location(label: &str) -> bool {
    LOCATIONS.contains(&label)
}
