//! End-to-end driver: read, index, group, merge, write

use crate::aggregate::{Aggregation, IntervalAggregator, PairTimelines};
use crate::config::AggregatorConfig;
use crate::core::record::ContactRecord;
use crate::error::Result;
use crate::index::slot::SlotIndex;
use crate::ingest::reader::read_records;
use crate::output::write_intervals;
use std::io::{BufRead, BufWriter, Write};
use tracing::{debug, info};

/// Counters describing one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Records read from the input
    pub records: usize,
    /// Distinct timestamps
    pub slots: u64,
    /// Distinct pairs
    pub pairs: usize,
    /// Intervals written
    pub intervals: usize,
    /// Trailing intervals discarded
    pub dropped_trailing: usize,
}

/// Batch pipeline turning contact records into per-pair intervals
pub struct ContactPipeline {
    config: AggregatorConfig,
}

impl ContactPipeline {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Index, group and merge an in-memory batch of records
    pub fn process(&self, records: Vec<ContactRecord>) -> Result<Aggregation> {
        let (aggregation, _, _) = self.process_counted(records)?;
        Ok(aggregation)
    }

    fn process_counted(&self, records: Vec<ContactRecord>) -> Result<(Aggregation, u64, usize)> {
        let index = SlotIndex::build(records);
        let timelines = PairTimelines::from_index(&index)?;
        debug!(pairs = timelines.len(), "grouped records by pair");

        let aggregation = IntervalAggregator::new(&self.config).aggregate(&timelines)?;
        Ok((aggregation, index.slot_count(), timelines.len()))
    }

    /// Read every record from `input`, then write the interval listing to `output`
    ///
    /// Nothing is written unless the whole input parses.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<PipelineStats> {
        let records = read_records(input)?;
        let record_count = records.len();

        let (aggregation, slots, pairs) = self.process_counted(records)?;

        let mut writer = BufWriter::new(output);
        let intervals = write_intervals(&mut writer, &aggregation)?;
        writer.flush()?;

        let stats = PipelineStats {
            records: record_count,
            slots,
            pairs,
            intervals,
            dropped_trailing: aggregation.dropped_trailing,
        };
        info!(
            records = stats.records,
            slots = stats.slots,
            pairs = stats.pairs,
            intervals = stats.intervals,
            dropped_trailing = stats.dropped_trailing,
            delta = self.config.delta(),
            "aggregation complete"
        );
        Ok(stats)
    }
}
