//! Interval aggregation: group indexed records by pair and merge their slots

pub mod merge;
pub mod timeline;

pub use merge::*;
pub use timeline::*;

use crate::config::AggregatorConfig;
use crate::core::interval::Interval;
use crate::core::record::PairKey;
use crate::error::Result;
use tracing::{debug, warn};

/// Merged intervals for a single pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairIntervals {
    pub pair: PairKey,
    pub intervals: Vec<Interval>,
}

/// Result of aggregating every pair timeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// One entry per pair, in first-encountered order
    pub pairs: Vec<PairIntervals>,
    /// Number of trailing intervals that were discarded
    pub dropped_trailing: usize,
}

impl Aggregation {
    /// Total number of reported intervals
    pub fn interval_count(&self) -> usize {
        self.pairs.iter().map(|p| p.intervals.len()).sum()
    }

    /// Every reported interval with its pair, in output order
    pub fn iter(&self) -> impl Iterator<Item = (PairKey, &Interval)> {
        self.pairs
            .iter()
            .flat_map(|p| p.intervals.iter().map(move |interval| (p.pair, interval)))
    }
}

/// Turns pair timelines into merged intervals
#[derive(Debug, Clone, Copy)]
pub struct IntervalAggregator {
    merger: IntervalMerger,
}

impl IntervalAggregator {
    pub fn new(config: &AggregatorConfig) -> Self {
        Self {
            merger: IntervalMerger::new(config),
        }
    }

    pub fn aggregate(&self, timelines: &PairTimelines) -> Result<Aggregation> {
        let mut aggregation = Aggregation::default();
        for timeline in timelines.iter() {
            let outcome = self.merger.merge(timeline.slots())?;
            if let Some(dropped) = outcome.dropped {
                debug!(pair = %timeline.pair(), interval = %dropped, "dropped trailing interval");
                aggregation.dropped_trailing += 1;
            }
            aggregation.pairs.push(PairIntervals {
                pair: timeline.pair(),
                intervals: outcome.intervals,
            });
        }

        if aggregation.dropped_trailing > 0 {
            warn!(
                dropped = aggregation.dropped_trailing,
                "trailing intervals were not reported; use the flush policy to keep them"
            );
        }
        Ok(aggregation)
    }
}
