//! Rule tables for three-state, two-cell automata.
//!
//! A rule index in `[0, 19682]` is read as nine base-3 digits, one per
//! [`Neighbourhood`](trine_core::Neighbourhood). [`build_rule_table`]
//! decodes an index into an immutable [`RuleTable`]; the [`ternary`]
//! module holds the digit codec both directions share.
//!
//! # Digit order
//!
//! The canonical [`DigitOrder::MostSignificantFirst`] assigns the most
//! significant digit to neighbourhood `(0,0)` and the least significant
//! to `(2,2)`. [`DigitOrder::LeastSignificantFirst`] is available for
//! interoperating with tables numbered the other way round; it must be
//! requested explicitly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod table;
pub mod ternary;

pub use table::{build_rule_table, DigitOrder, RuleTable};
