//! Collections and traversal helpers shared by cardstack crates.
//!
//! # Modules
//!
//! - [`anomalies`]: classification of a candidate index collection against a
//!   reference collection (invalid, not found, duplicate values)
//! - [`ordered_set`]: insertion-ordered set used to report results deterministically
//! - [`directional_view`]: forward/reverse traversal over indexable data without copying

pub mod anomalies;
pub mod directional_view;
pub mod ordered_set;

pub use anomalies::{Anomalies, compare_and_find_anomalies, find_anomalies_by};
pub use directional_view::{Direction, DirectionalView, Iteratee, ReverseIterable, Traversal};
pub use ordered_set::OrderedSet;
