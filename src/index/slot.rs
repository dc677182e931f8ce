//! Time-slot index: maps raw timestamps to dense, ordered slots

use crate::core::interval::Slot;
use crate::core::record::{ContactRecord, RawTime};
use tracing::debug;

/// A contact record tagged with the slot of its timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedRecord {
    pub record: ContactRecord,
    pub slot: Slot,
}

/// Records sorted by time, each assigned the rank of its distinct timestamp
///
/// Equal timestamps share a slot, and slots are dense: with `K` distinct
/// timestamps the slots used are exactly `0..K`.
#[derive(Debug, Clone, Default)]
pub struct SlotIndex {
    records: Vec<IndexedRecord>,
    slot_count: u64,
}

impl SlotIndex {
    /// Sort `records` by time and assign slots
    ///
    /// The sort is stable, so records sharing a timestamp keep their input order.
    pub fn build(mut records: Vec<ContactRecord>) -> Self {
        records.sort_by_key(|record| record.time);

        let mut current: Option<(RawTime, Slot)> = None;
        let mut indexed = Vec::with_capacity(records.len());
        for record in records {
            let slot = match current {
                Some((time, slot)) if time == record.time => slot,
                Some((_, slot)) => slot + 1,
                None => 0,
            };
            current = Some((record.time, slot));
            indexed.push(IndexedRecord { record, slot });
        }

        let slot_count = current.map_or(0, |(_, slot)| slot + 1);
        debug!(records = indexed.len(), slots = slot_count, "assigned time slots");

        Self {
            records: indexed,
            slot_count,
        }
    }

    /// Indexed records in ascending time order
    pub fn records(&self) -> &[IndexedRecord] {
        &self.records
    }

    /// Number of distinct timestamps
    pub fn slot_count(&self) -> u64 {
        self.slot_count
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
