//! # Cardstack: index utilities for card-game engines
//!
//! Card-game engines constantly address cards by position: "draw the top three",
//! "discard cards 2 and 5", "iterate the pile from the bottom". This crate bundles
//! the small building blocks behind such operations and re-exports them through
//! a single dependency.
//!
//! ## Module Organization
//!
//! * [`common`] - Error types and result helpers shared by all components
//! * [`ranges`] - Generation of ordered index sequences (`range`, `IndexRange`)
//! * [`collections`] - Anomaly detection for index collections and forward/reverse views
//! * [`card_stack`] - A named stack of cards that validates requested indexes
//!
//! ## Getting Started
//!
//! ```
//! use cardstack::CardStack;
//! use cardstack::collections::ReverseIterable;
//!
//! let mut hand = CardStack::with_cards("hand", vec!["7H", "QS", "2D"]);
//! assert_eq!(hand.pick(&[2, 0]).unwrap(), vec![&"2D", &"7H"]);
//! assert!(hand.pick(&[3]).is_err());
//!
//! hand.to_reverse_iterable();
//! assert_eq!(hand.traverse().copied().collect::<Vec<_>>(), vec!["2D", "QS", "7H"]);
//! ```

pub use cardstack_collections as collections;
pub use cardstack_common as common;
pub use cardstack_ranges as ranges;

pub mod card_stack;

pub use card_stack::{CardStack, validate_card_indexes};
