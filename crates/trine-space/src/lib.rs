//! Spatial topology for Trine automata.
//!
//! Trine automata live on a single periodic row. [`Ring1D`] owns the
//! wraparound arithmetic: the left neighbour of cell 0 is the last cell.
//! Every update kernel reads neighbourhoods through it, so no other
//! crate does modular index arithmetic of its own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ring1d;

pub use ring1d::Ring1D;
