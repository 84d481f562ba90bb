//! Detection of anomalies in a candidate collection of indexes.
//!
//! A candidate collection (for example, card indexes requested by a player) is
//! compared against a reference collection (the indexes that actually exist).
//! Every candidate value is classified independently into up to three groups:
//!
//! - **invalid**: the value fails the caller's predicate; checked on every
//!   occurrence;
//! - **not found**: the value is absent from the reference; checked on the
//!   first occurrence only;
//! - **duplicates**: the value occurs again after its first occurrence.
//!
//! The groups are not exclusive: `-1` repeated twice against a reference of
//! non-negative values is invalid, not found and a duplicate at once.

use std::borrow::Borrow;

use ahash::AHashSet;

use crate::OrderedSet;

/// The result of [`compare_and_find_anomalies`].
///
/// Each list holds unique values in the order they were first classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Anomalies {
    pub not_found: Vec<i64>,
    pub invalid: Vec<i64>,
    pub duplicates: Vec<i64>,
}

impl Anomalies {
    /// `true` when the candidate collection passed all checks.
    pub fn is_empty(&self) -> bool {
        self.not_found.is_empty() && self.invalid.is_empty() && self.duplicates.is_empty()
    }

    /// Total number of entries across the three lists.
    pub fn total(&self) -> usize {
        self.not_found.len() + self.invalid.len() + self.duplicates.len()
    }
}

/// Compares `candidate` against `reference` and reports the anomalies.
///
/// Candidate values are processed in iteration order:
/// 1. `predicate(v)` is evaluated for every occurrence; `false` marks `v` invalid.
/// 2. On the first occurrence of `v`, it is marked not found unless `reference`
///    contains it.
/// 3. On any later occurrence, `v` is marked as a duplicate.
///
/// Repeated values inside `reference` have no effect. Never fails; empty inputs
/// yield an empty result.
///
/// # Examples
///
/// ```
/// use cardstack_collections::compare_and_find_anomalies;
///
/// let anomalies = compare_and_find_anomalies([1i64, 2], [-1i64, 3], |v| v >= 0);
/// assert_eq!(anomalies.invalid, vec![-1]);
/// assert_eq!(anomalies.not_found, vec![-1, 3]);
/// assert!(anomalies.duplicates.is_empty());
/// ```
pub fn compare_and_find_anomalies<R, C, F>(
    reference: R,
    candidate: C,
    predicate: F,
) -> Anomalies
where
    R: IntoIterator,
    R::Item: Borrow<i64>,
    C: IntoIterator,
    C::Item: Borrow<i64>,
    F: FnMut(i64) -> bool,
{
    let reference = reference
        .into_iter()
        .map(|v| *v.borrow())
        .collect::<AHashSet<i64>>();
    log::trace!("reference set holds {} distinct values", reference.len());
    find_anomalies_by(|v| reference.contains(&v), candidate, predicate)
}

/// Same classification as [`compare_and_find_anomalies`], with the reference
/// collection given as a membership test.
///
/// Useful when the reference is too large to enumerate but cheap to query,
/// such as every index of a very large stack.
///
/// ```
/// use cardstack_collections::find_anomalies_by;
///
/// let size = 1i64 << 50;
/// let anomalies = find_anomalies_by(|v| (0..size).contains(&v), [3i64, size], |v| v >= 0);
/// assert_eq!(anomalies.not_found, vec![size]);
/// ```
pub fn find_anomalies_by<M, C, F>(
    mut in_reference: M,
    candidate: C,
    mut predicate: F,
) -> Anomalies
where
    M: FnMut(i64) -> bool,
    C: IntoIterator,
    C::Item: Borrow<i64>,
    F: FnMut(i64) -> bool,
{
    let mut seen = AHashSet::<i64>::new();
    let mut not_found = OrderedSet::new();
    let mut invalid = OrderedSet::new();
    let mut duplicates = OrderedSet::new();
    let mut candidate_len = 0usize;

    for value in candidate {
        let value = *value.borrow();
        candidate_len += 1;

        if !predicate(value) {
            invalid.insert(value);
        }
        if seen.insert(value) {
            if !in_reference(value) {
                not_found.insert(value);
            }
        } else {
            duplicates.insert(value);
        }
    }

    let anomalies = Anomalies {
        not_found: not_found.into_vec(),
        invalid: invalid.into_vec(),
        duplicates: duplicates.into_vec(),
    };
    log::debug!(
        "checked {candidate_len} candidate values: \
         {} not found, {} invalid, {} duplicates",
        anomalies.not_found.len(),
        anomalies.invalid.len(),
        anomalies.duplicates.len()
    );
    anomalies
}
