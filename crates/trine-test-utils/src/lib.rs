//! Test utilities for Trine development.
//!
//! Provides golden fixtures with hand-verified expected fields, helpers
//! for building rule tables from readable digit strings, and proptest
//! strategies for the core types.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{golden_8711, shift_left_table, table_from_digits, Golden};
pub use strategies::{arb_configuration, arb_rule_index, arb_rule_table, arb_symbol};
