//! Gap-tolerant merging of a pair's slots into intervals

use crate::config::{AggregatorConfig, TrailingPolicy};
use crate::core::interval::{Interval, Slot};
use crate::error::{Error, Result};

/// Intervals produced from one pair's slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Reported intervals, in ascending order of `begin`
    pub intervals: Vec<Interval>,
    /// The still-open interval discarded under [`TrailingPolicy::Drop`]
    pub dropped: Option<Interval>,
}

/// Merges slots into maximal intervals under a gap tolerance
#[derive(Debug, Clone, Copy)]
pub struct IntervalMerger {
    delta: u64,
    trailing: TrailingPolicy,
}

impl IntervalMerger {
    pub fn new(config: &AggregatorConfig) -> Self {
        Self {
            delta: config.delta(),
            trailing: config.trailing(),
        }
    }

    /// Merge a non-empty, non-decreasing slot list
    ///
    /// A slot joins the running interval when it is not behind the interval's
    /// end and fewer than `delta` slots past it. Otherwise the running
    /// interval is closed and a new one starts at that slot.
    pub fn merge(&self, slots: &[Slot]) -> Result<MergeOutcome> {
        let (&first, rest) = slots.split_first().ok_or_else(|| {
            Error::InvariantViolation("empty slot list reached the merge step".to_string())
        })?;

        let mut open = Interval::instant(first);
        let mut intervals = Vec::new();
        for &slot in rest {
            if open.end() <= slot && slot - open.end() < self.delta {
                open.extend_to(slot);
            } else {
                intervals.push(open);
                open = Interval::instant(slot);
            }
        }

        let dropped = match self.trailing {
            TrailingPolicy::Drop => Some(open),
            TrailingPolicy::Flush => {
                intervals.push(open);
                None
            }
        };

        Ok(MergeOutcome { intervals, dropped })
    }
}
