//! Lazy and materialized index sequences built from a [`RangeSpec`].

use std::iter::FusedIterator;

use cardstack_common::{Error, Result};

use crate::RangeSpec;

/// Largest number of values a `Vec<i64>` can hold.
const MAX_MATERIALIZED_LEN: u64 = (isize::MAX as usize / std::mem::size_of::<i64>()) as u64;

/// Creates a vector of consecutive integers described by `spec`.
/// The upper bound is exclusive.
///
/// # Examples
///
/// ```
/// use cardstack_ranges::{range, RangeSpec};
///
/// assert_eq!(range(3u64).unwrap(), vec![0, 1, 2]);
/// assert_eq!(range(RangeSpec::bounds(1, 4)).unwrap(), vec![1, 2, 3]);
/// assert!(range(2i64..2).is_err());
/// ```
///
/// # Errors
///
/// - `InvalidRange` with `StartGreaterThanEnd` when `start > end`.
/// - `InvalidRange` with `StartEqualsEnd` when `start == end`.
/// - `InvalidArgument` when a size does not fit into `i64`, or when the
///   sequence is too long to be held in memory. [`IndexRange`] has no such
///   limit.
pub fn range(spec: impl Into<RangeSpec>) -> Result<Vec<i64>> {
    let spec = spec.into();
    let indexes = IndexRange::new(spec)?;
    let len = indexes.remaining();
    if len > MAX_MATERIALIZED_LEN {
        return Err(Error::invalid_arg(
            "range",
            format!("{spec:?} holds {len} values, more than a vector can store"),
        ));
    }

    let mut values = Vec::new();
    values.try_reserve_exact(len as usize).map_err(|e| {
        Error::invalid_arg(
            "range",
            format!("cannot allocate {len} values for {spec:?}: {e}"),
        )
    })?;
    values.extend(indexes);
    log::trace!("range({spec:?}) produced {} values", values.len());
    Ok(values)
}

/// A validated iterator over `start..end`, consumable from both ends.
///
/// Construction applies the same checks as [`range`], so an `IndexRange`
/// built from bounds is never empty at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRange {
    /// Next value yielded from the front.
    front: i64,
    /// One past the next value yielded from the back.
    back: i64,
}

impl IndexRange {
    pub fn new(spec: impl Into<RangeSpec>) -> Result<IndexRange> {
        let bounds = spec.into().resolve()?;
        Ok(IndexRange {
            front: bounds.start,
            back: bounds.end,
        })
    }

    /// Number of values not yet yielded.
    pub fn remaining(&self) -> u64 {
        if self.front < self.back {
            self.back.abs_diff(self.front)
        } else {
            0
        }
    }
}

impl Iterator for IndexRange {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        if self.front < self.back {
            let value = self.front;
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for IndexRange {
    #[inline]
    fn next_back(&mut self) -> Option<i64> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.back)
        } else {
            None
        }
    }
}

impl FusedIterator for IndexRange {}
