//! Uncovered gaps between numeric ranges.
//!
//! Independent of routing. Given closed ranges in any order, reports the
//! stretches between their merged coverage, sorted by start.

use std::fmt;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::batch::reader::{read_block, InputError};

/// A `[start, end]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

/// Gaps not covered by any interval, between the first start and last end.
///
/// Touching ranges (`next.start == covered`) leave no gap. O(n log n).
pub fn uncovered(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(|interval| interval.start);

    let mut iter = intervals.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut gaps = Vec::new();
    let mut covered = first.end;
    for interval in iter {
        if interval.start > covered {
            gaps.push(Interval::new(covered, interval.start));
        }
        covered = covered.max(interval.end);
    }
    gaps
}

/// Read `<start> <end>` lines until EOF or a blank line.
pub fn read_intervals<R: BufRead>(reader: R) -> Result<Vec<Interval>, InputError> {
    read_block(reader)?
        .into_iter()
        .map(|(line, content)| {
            let parsed = {
                let mut fields = content.split_whitespace().map(str::parse::<i64>);
                (fields.next(), fields.next())
            };
            match parsed {
                (Some(Ok(start)), Some(Ok(end))) => Ok(Interval::new(start, end)),
                _ => Err(InputError::MalformedInterval { line, content }),
            }
        })
        .collect()
}

/// Write one `start end` line per interval.
pub fn write_intervals<W: Write>(writer: &mut W, intervals: &[Interval]) -> std::io::Result<()> {
    for interval in intervals {
        writeln!(writer, "{}", interval)?;
    }
    writer.flush()
}
