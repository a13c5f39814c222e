//! Evolution engine for Trine automata.
//!
//! Two entry points share one single-step kernel:
//!
//! - [`evolve()`]: a pure function from `(rule table, initial row, steps)`
//!   to a complete [`SpacetimeField`](trine_core::SpacetimeField).
//! - [`Automaton`]: an owned-state wrapper whose
//!   [`evolve()`](Automaton::evolve) appends to an accumulated history.
//!
//! [`RunConfig`] bundles the construction parameters of a run (rule,
//! width, steps, optional seed) and [`initial`] generates reproducible
//! random starting rows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod config;
pub mod evolve;
pub mod initial;
pub mod metrics;

pub use automaton::Automaton;
pub use config::{ConfigError, RunConfig};
pub use evolve::{evolve, evolve_configuration, step};
pub use initial::{random_configuration, random_configuration_unseeded};
pub use metrics::EvolveMetrics;
