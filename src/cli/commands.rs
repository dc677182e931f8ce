//! CLI arguments

use crate::config::{AggregatorConfig, TrailingPolicy, DEFAULT_DELTA};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// contact-intervals CLI
///
/// Reads `time<TAB>a<TAB>b<TAB>x<TAB>y` lines and prints `a b begin end`
/// for every merged contact interval.
#[derive(Parser, Debug)]
#[command(name = "contact-intervals")]
#[command(about = "Aggregate timestamped pairwise contacts into slot intervals")]
pub struct Cli {
    /// Gap tolerance in slots for merging contacts into one interval
    #[arg(short, long, default_value_t = DEFAULT_DELTA)]
    pub delta: u64,

    /// What to do with each pair's last, still-open interval
    #[arg(long, value_enum, default_value_t = TrailingPolicy::Drop)]
    pub trailing: TrailingPolicy,

    /// Read records from this file instead of standard input
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write intervals to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validated aggregation parameters
    pub fn config(&self) -> Result<AggregatorConfig> {
        Ok(AggregatorConfig::new(self.delta)?.with_trailing(self.trailing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["contact-intervals"]).unwrap();
        assert_eq!(cli.delta, 30);
        assert_eq!(cli.trailing, TrailingPolicy::Drop);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.config().unwrap(), AggregatorConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "contact-intervals",
            "--delta",
            "5",
            "--trailing",
            "flush",
            "-i",
            "in.tsv",
            "-o",
            "out.txt",
            "-v",
        ])
        .unwrap();

        let config = cli.config().unwrap();
        assert_eq!(config.delta(), 5);
        assert_eq!(config.trailing(), TrailingPolicy::Flush);
        assert_eq!(cli.input, Some(PathBuf::from("in.tsv")));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_zero_delta() {
        let cli = Cli::try_parse_from(["contact-intervals", "-d", "0"]).unwrap();
        assert!(matches!(cli.config(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["contact-intervals", "--trailing", "keep"]).is_err());
        assert!(Cli::try_parse_from(["contact-intervals", "-d", "-3"]).is_err());
    }
}
