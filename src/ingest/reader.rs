//! Buffered reader that collects every record before processing starts

use crate::core::record::ContactRecord;
use crate::error::Result;
use crate::ingest::parser::parse_record;
use std::io::BufRead;
use tracing::debug;

/// Read contact records until end of input
///
/// Stops at the first malformed line; no records are returned in that case.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<ContactRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        records.push(parse_record(&line, index + 1)?);
    }
    debug!(records = records.len(), "reached end of input");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    #[test]
    fn test_read_empty_input() {
        let records = read_records(Cursor::new("")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_multiple_lines() {
        let input = "10\t1\t2\ta\tb\n5\t3\t1\ta\tb\r\n7\t2\t2\ta\tb";
        let records = read_records(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], ContactRecord::new(10, 1, 2));
        assert_eq!(records[1], ContactRecord::new(5, 1, 3));
        assert_eq!(records[2], ContactRecord::new(7, 2, 2));
    }

    #[test]
    fn test_read_fails_fast() {
        let input = "10\t1\t2\ta\tb\n\n11\t1\t2\ta\tb\n";
        match read_records(Cursor::new(input)) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_invalid_utf8() {
        let input: &[u8] = &[0x31, 0x09, 0xff, 0xfe, 0x0a];
        let err = read_records(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
