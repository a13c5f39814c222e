//! Determinism verification for Trine runs.
//!
//! A run is fully determined by its rule, initial row and step count,
//! so two runs can be checked for agreement by comparing compact
//! fingerprints instead of whole fields.
//!
//! - [`field_hash`] fingerprints a [`SpacetimeField`](trine_core::SpacetimeField)
//! - [`run_hash`] fingerprints the parameters that produced it
//! - [`first_divergence`] locates the first cell where two fields differ

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod hash;

pub use compare::{first_divergence, Divergence};
pub use hash::{field_hash, run_hash};
