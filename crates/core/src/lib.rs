//! `steelstock-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by the inventory and query crates: the
//! error model, strongly-typed record identifiers, and the entity trait.
//! No IO, no infrastructure concerns.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{IdSequence, RecordId};
