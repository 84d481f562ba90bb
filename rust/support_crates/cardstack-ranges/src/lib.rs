//! Generation of ordered integer index sequences.
//!
//! A sequence is described by a [`RangeSpec`]: either a plain size (`0..size`)
//! or explicit `start..end` bounds with `start < end`. [`range`] materializes
//! the sequence into a fresh `Vec<i64>`, while [`IndexRange`] yields the same
//! values lazily and can be traversed from either end.
//!
//! # Key Types
//!
//! - [`RangeSpec`] - Size or bounds description of a sequence
//! - [`IndexRange`] - Validated, double-ended iterator over the described values

pub mod index_range;
pub mod range_spec;

pub use index_range::{IndexRange, range};
pub use range_spec::RangeSpec;
