//! Parser for tab-separated contact lines
//!
//! A line carries exactly five fields: `time`, `a`, `b` and two trailing
//! tokens that are accepted but never interpreted.

use crate::core::record::ContactRecord;
use crate::error::{Error, Result};
use nom::bytes::complete::{tag, take_till};
use nom::character::complete::i64 as integer;
use nom::combinator::eof;
use nom::error::{context, VerboseError, VerboseErrorKind};
use nom::sequence::terminated;
use nom::IResult;

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

fn tab(input: &str) -> ParseResult<'_, &str> {
    tag("\t")(input)
}

fn token(input: &str) -> ParseResult<'_, &str> {
    take_till(|c: char| c == '\t')(input)
}

fn contact_fields(input: &str) -> ParseResult<'_, (i64, i64, i64)> {
    let (input, time) = context("time field", terminated(integer, tab))(input)?;
    let (input, a) = context("first entity field", terminated(integer, tab))(input)?;
    let (input, b) = context("second entity field", terminated(integer, tab))(input)?;
    let (input, _) = context("fourth field", terminated(token, tab))(input)?;
    let (input, _) = context("fifth field", token)(input)?;
    let (input, _) = context("end of record", eof)(input)?;
    Ok((input, (time, a, b)))
}

/// Innermost context label attached to a parse failure
fn failed_field(err: nom::Err<VerboseError<&str>>) -> &'static str {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e
            .errors
            .iter()
            .find_map(|(_, kind)| match kind {
                VerboseErrorKind::Context(ctx) => Some(*ctx),
                _ => None,
            })
            .unwrap_or("record"),
        nom::Err::Incomplete(_) => "record",
    }
}

/// Parse one input line into a canonicalized contact record
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_record(line: &str, line_number: usize) -> Result<ContactRecord> {
    match contact_fields(line) {
        Ok((_, (time, a, b))) => Ok(ContactRecord::new(time, a, b)),
        Err(err) => Err(Error::Parse {
            line: line_number,
            field: failed_field(err),
            content: line.to_string(),
        }),
    }
}
