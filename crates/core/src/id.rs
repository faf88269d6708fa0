//! Strongly-typed record identifiers and the minting sequence.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Prefix carried by every record identifier ("ST001", "ST002", ...).
pub const ID_PREFIX: &str = "ST";

/// Minimum number of digits in the sequence part; wider sequences are
/// rendered without truncation (ST999 is followed by ST1000).
const SEQUENCE_WIDTH: usize = 3;

/// Identifier of an inventory record.
///
/// Canonical text form is the prefix followed by a zero-padded sequence
/// number. Identifiers are minted by [`IdSequence`] and are immutable for
/// the life of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Identifier for the given sequence number.
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("{ID_PREFIX}{n:03}"))
    }

    /// Canonical text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sequence number embedded in the identifier.
    pub fn sequence(&self) -> u64 {
        // Guaranteed numeric by construction/parsing.
        self.0[ID_PREFIX.len()..].parse().unwrap_or(0)
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(ID_PREFIX)
            .ok_or_else(|| DomainError::invalid_id(format!("missing {ID_PREFIX} prefix: {s}")))?;
        if digits.len() < SEQUENCE_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!("bad sequence digits: {s}")));
        }
        Ok(Self(s.to_string()))
    }
}

/// Strictly monotonic identifier mint.
///
/// Sequence numbers are never reused: removing a record does not free its
/// number, so a later mint can never collide with a live identifier. (A
/// length-derived scheme would re-mint the id of a surviving record after
/// any deletion.)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Fresh sequence; the first mint is `ST001`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence positioned after `last`, e.g. after the highest seeded id.
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    /// Mint the next identifier.
    pub fn next_id(&mut self) -> RecordId {
        self.last += 1;
        RecordId::from_sequence(self.last)
    }

    /// Highest sequence number minted (or seeded) so far.
    pub fn last(&self) -> u64 {
        self.last
    }
}
