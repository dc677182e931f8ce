//! Aggregation parameters

use crate::error::{Error, Result};
use clap::ValueEnum;

/// Default gap tolerance, in slots
pub const DEFAULT_DELTA: u64 = 30;

/// What happens to the interval that is still open when a pair's slots run out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TrailingPolicy {
    /// Discard it. Only intervals closed by a later out-of-range slot are
    /// reported, so a pair that never exceeds the gap produces no output.
    #[default]
    Drop,
    /// Report it as the pair's last interval
    Flush,
}

/// Validated parameters for the interval aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorConfig {
    delta: u64,
    trailing: TrailingPolicy,
}

impl AggregatorConfig {
    /// Create a configuration with the given gap tolerance
    pub fn new(delta: u64) -> Result<Self> {
        if delta == 0 {
            return Err(Error::Configuration(
                "delta must be at least 1 slot".to_string(),
            ));
        }
        Ok(Self {
            delta,
            trailing: TrailingPolicy::default(),
        })
    }

    /// Set the trailing-interval policy
    pub fn with_trailing(mut self, trailing: TrailingPolicy) -> Self {
        self.trailing = trailing;
        self
    }

    /// Gap tolerance: a slot joins the running interval if it is fewer than
    /// `delta` slots past the interval's end
    pub fn delta(&self) -> u64 {
        self.delta
    }

    pub fn trailing(&self) -> TrailingPolicy {
        self.trailing
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            trailing: TrailingPolicy::Drop,
        }
    }
}
