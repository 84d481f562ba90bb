//! Command implementations for cardstack-cmd

pub mod anomalies;
pub mod range;
pub mod traverse;
pub mod validate;
