//! `RangeSpec`: the two accepted shapes of an index sequence description.

use std::ops::Range;

use cardstack_common::{Error, RangeErrorKind, Result, verify_arg};

/// Describes an ordered sequence of consecutive integers.
///
/// - `Size(n)` is shorthand for `0..n` and is always valid; `Size(0)` is empty.
/// - `Bounds { start, end }` is the half-open interval `start..end`. Unlike a
///   Rust `Range`, an empty interval is rejected: `start` must be strictly less
///   than `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSpec {
    Size(u64),
    Bounds { start: i64, end: i64 },
}

impl RangeSpec {
    pub fn bounds(start: i64, end: i64) -> RangeSpec {
        RangeSpec::Bounds { start, end }
    }

    /// Checks the description and returns the equivalent half-open interval.
    ///
    /// Fails with `InvalidRange` when the bounds are equal or reversed, and with
    /// `InvalidArgument` when a size does not fit into `i64`.
    pub fn resolve(&self) -> Result<Range<i64>> {
        match *self {
            RangeSpec::Size(size) => {
                verify_arg!(size, size <= i64::MAX as u64);
                Ok(0..size as i64)
            }
            RangeSpec::Bounds { start, end } => match RangeErrorKind::classify(start, end) {
                None => Ok(start..end),
                Some(kind) => Err(Error::invalid_range(kind, start, end)),
            },
        }
    }
}

impl From<u64> for RangeSpec {
    fn from(size: u64) -> Self {
        RangeSpec::Size(size)
    }
}

impl From<u32> for RangeSpec {
    fn from(size: u32) -> Self {
        RangeSpec::Size(size as u64)
    }
}

impl From<usize> for RangeSpec {
    fn from(size: usize) -> Self {
        RangeSpec::Size(size as u64)
    }
}

impl From<Range<i64>> for RangeSpec {
    fn from(range: Range<i64>) -> Self {
        RangeSpec::Bounds {
            start: range.start,
            end: range.end,
        }
    }
}
