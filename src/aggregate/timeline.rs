//! Pair timelines: the slots at which each pair was observed

use crate::core::interval::Slot;
use crate::core::record::PairKey;
use crate::error::{Error, Result};
use crate::index::slot::{IndexedRecord, SlotIndex};
use hashbrown::HashMap;

/// Observed slots for a single pair, in non-decreasing order
///
/// Repeated slots are kept; they never start a new interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTimeline {
    pair: PairKey,
    slots: Vec<Slot>,
}

impl PairTimeline {
    fn new(pair: PairKey) -> Self {
        Self {
            pair,
            slots: Vec::new(),
        }
    }

    pub fn pair(&self) -> PairKey {
        self.pair
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn push(&mut self, slot: Slot) -> Result<()> {
        if let Some(&last) = self.slots.last() {
            if slot < last {
                return Err(Error::InvariantViolation(format!(
                    "pair ({}) observed at slot {} after slot {}",
                    self.pair, slot, last
                )));
            }
        }
        self.slots.push(slot);
        Ok(())
    }
}

/// Timelines for every pair, in the order pairs were first encountered
#[derive(Debug, Clone, Default)]
pub struct PairTimelines {
    /// Position of each pair in `timelines`
    positions: HashMap<PairKey, usize>,
    timelines: Vec<PairTimeline>,
}

impl PairTimelines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group the records of a slot index by pair
    pub fn from_index(index: &SlotIndex) -> Result<Self> {
        let mut timelines = Self::new();
        for record in index.records() {
            timelines.record(record)?;
        }
        Ok(timelines)
    }

    /// Append an observation to its pair's timeline
    ///
    /// Records must arrive in non-decreasing slot order per pair.
    pub fn record(&mut self, indexed: &IndexedRecord) -> Result<()> {
        let pair = indexed.record.pair;
        let position = *self.positions.entry(pair).or_insert_with(|| {
            self.timelines.push(PairTimeline::new(pair));
            self.timelines.len() - 1
        });
        self.timelines[position].push(indexed.slot)
    }

    /// Look up a pair's timeline
    pub fn get(&self, pair: &PairKey) -> Option<&PairTimeline> {
        self.positions.get(pair).map(|&position| &self.timelines[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairTimeline> {
        self.timelines.iter()
    }

    /// Number of distinct pairs
    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}
