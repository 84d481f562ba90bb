//! Core definitions (error types and result helpers), relied upon by all cardstack-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind, RangeErrorKind};
pub use result::Result;
