//! Plain-text interval listing

use crate::aggregate::Aggregation;
use crate::error::Result;
use std::io::Write;

/// Write one `a b begin end` line per interval and return the line count
pub fn write_intervals<W: Write>(out: &mut W, aggregation: &Aggregation) -> Result<usize> {
    let mut lines = 0;
    for (pair, interval) in aggregation.iter() {
        writeln!(out, "{} {}", pair, interval)?;
        lines += 1;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::PairIntervals;
    use crate::core::interval::Interval;
    use crate::core::record::PairKey;

    #[test]
    fn test_write_intervals() {
        let aggregation = Aggregation {
            pairs: vec![
                PairIntervals {
                    pair: PairKey::new(2, 1),
                    intervals: vec![Interval::new(0, 5).unwrap(), Interval::new(40, 41).unwrap()],
                },
                PairIntervals {
                    pair: PairKey::new(9, 3),
                    intervals: Vec::new(),
                },
                PairIntervals {
                    pair: PairKey::new(-3, 4),
                    intervals: vec![Interval::instant(7)],
                },
            ],
            dropped_trailing: 0,
        };

        let mut out = Vec::new();
        let lines = write_intervals(&mut out, &aggregation).unwrap();

        assert_eq!(lines, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 2 0 5\n1 2 40 41\n-3 4 7 7\n"
        );
    }

    #[test]
    fn test_write_nothing() {
        let mut out = Vec::new();
        let lines = write_intervals(&mut out, &Aggregation::default()).unwrap();
        assert_eq!(lines, 0);
        assert!(out.is_empty());
    }
}
