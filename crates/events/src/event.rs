use chrono::{DateTime, Utc};

/// A domain event: an immutable fact about a completed state change.
pub trait Event: Clone + core::fmt::Debug + Send + 'static {
    /// Stable event name (e.g. "inventory.record.added").
    fn event_type(&self) -> &'static str;

    /// When the change occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
