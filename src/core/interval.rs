//! Slot indices and merged contact intervals

use crate::error::{Error, Result};
use std::fmt;

/// Dense, zero-based rank of a distinct timestamp
pub type Slot = u64;

/// Closed range of slots `[begin, end]` during which a pair was in contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    begin: Slot,
    end: Slot,
}

impl Interval {
    /// Create an interval, rejecting `begin > end`
    pub fn new(begin: Slot, end: Slot) -> Result<Self> {
        if begin > end {
            return Err(Error::InvariantViolation(format!(
                "interval begins at slot {} after it ends at slot {}",
                begin, end
            )));
        }
        Ok(Self { begin, end })
    }

    /// Interval covering a single slot
    pub fn instant(slot: Slot) -> Self {
        Self {
            begin: slot,
            end: slot,
        }
    }

    /// First slot of the interval
    pub fn begin(&self) -> Slot {
        self.begin
    }

    /// Last slot of the interval
    pub fn end(&self) -> Slot {
        self.end
    }

    /// Move the end forward to `slot`. Slots behind the current end are ignored.
    pub fn extend_to(&mut self, slot: Slot) {
        self.end = self.end.max(slot);
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.begin, self.end)
    }
}
