//! contact-intervals: pairwise contact interval aggregation
//!
//! Turns a batch of timestamped contact observations between pairs of
//! entities into per-pair contact intervals.
//!
//! # Core Concepts
//!
//! - **Slots**: every distinct timestamp gets a dense, zero-based rank in time order
//! - **Pair keys**: unordered entity pairs, smaller identifier first
//! - **Intervals**: maximal runs of a pair's slots whose gaps stay below `delta`
//!
//! # Example
//!
//! ```no_run
//! use contact_intervals::prelude::*;
//!
//! # fn example() -> contact_intervals::error::Result<()> {
//! let pipeline = ContactPipeline::new(AggregatorConfig::default());
//! let stats = pipeline.run(std::io::stdin().lock(), std::io::stdout().lock())?;
//! eprintln!("{} intervals", stats.intervals);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod index;
pub mod ingest;
pub mod output;

/// End-to-end driver
pub mod pipeline;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::aggregate::{Aggregation, IntervalAggregator, PairIntervals, PairTimelines};
    pub use crate::config::{AggregatorConfig, TrailingPolicy, DEFAULT_DELTA};
    pub use crate::core::*;
    pub use crate::error::{Error, Result};
    pub use crate::index::SlotIndex;
    pub use crate::pipeline::{ContactPipeline, PipelineStats};
}
