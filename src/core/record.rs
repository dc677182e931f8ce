//! Contact records and pair canonicalization

use std::fmt;

/// Entity identifier as it appears in the input
pub type EntityId = i64;

/// Raw timestamp as it appears in the input
pub type RawTime = i64;

/// Unordered pair of entities, stored with the smaller identifier first
///
/// Two observations of the same contact always produce the same key,
/// whichever entity was reported first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    low: EntityId,
    high: EntityId,
}

impl PairKey {
    /// Create a canonical key for the pair `(a, b)`
    pub fn new(a: EntityId, b: EntityId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Smaller entity identifier
    pub fn low(&self) -> EntityId {
        self.low
    }

    /// Larger entity identifier
    pub fn high(&self) -> EntityId {
        self.high
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.low, self.high)
    }
}

/// A single contact observation between two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRecord {
    /// When the contact was observed
    pub time: RawTime,
    /// Who was in contact
    pub pair: PairKey,
}

impl ContactRecord {
    /// Create a record, canonicalizing the pair
    pub fn new(time: RawTime, a: EntityId, b: EntityId) -> Self {
        Self {
            time,
            pair: PairKey::new(a, b),
        }
    }
}
