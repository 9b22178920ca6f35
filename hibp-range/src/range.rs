//! Parsing of range API response bodies.
//!
//! A body holds one `SUFFIX:COUNT` record per line for every known hash that
//! shares the queried prefix. The service terminates lines with `\r\n`.

use tracing::trace;

/// A single record of a range response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRecord<'a> {
    /// The 35 character hash suffix.
    pub suffix: &'a str,
    /// How many times the hash appears in the corpus. Zero for padding
    /// records.
    pub occurrences: u64,
}

/// Parses one line of a range response.
///
/// Returns `None` unless the line is exactly two `:` separated fields with a
/// decimal count.
pub fn parse_record(line: &str) -> Option<RangeRecord<'_>> {
    let mut fields = line.split(':');
    let suffix = fields.next()?.trim();
    let count = fields.next()?.trim();
    if fields.next().is_some() || suffix.is_empty() {
        return None;
    }

    let occurrences = count.parse().ok()?;
    Some(RangeRecord { suffix, occurrences })
}

/// Iterates the well formed records of a body, skipping malformed lines.
pub fn records(body: &str) -> impl Iterator<Item = RangeRecord<'_>> {
    body.lines().filter(|line| !line.trim().is_empty()).filter_map(|line| {
        let record = parse_record(line);
        if record.is_none() {
            trace!(line, "skipping malformed range record");
        }
        record
    })
}

/// Returns the count of the first record whose suffix equals `suffix`.
///
/// Both sides are uppercase hex, so this is an exact comparison.
pub fn find_suffix(body: &str, suffix: &str) -> Option<u64> {
    records(body).find(|record| record.suffix == suffix).map(|record| record.occurrences)
}
