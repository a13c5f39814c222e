//! Trine: three-state cellular automata with a two-cell neighbourhood.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Trine sub-crates. For most users, adding `trine` as a single dependency is
//! sufficient.
//!
//! Each cell holds `0`, `1` or `2`. A cell's next value depends on its left
//! neighbour and itself, read around a ring so that cell 0 sees the last cell.
//! The 9 possible neighbourhoods give `3^9 = 19683` rules, numbered by the
//! base-3 digits of their outputs.
//!
//! # Quick start
//!
//! ```rust
//! use trine::prelude::*;
//!
//! let table = build_rule_table(8711).unwrap();
//! assert_eq!(table.to_string(), "102221122");
//!
//! // Pure: one call, one complete field.
//! let field = evolve(&table, &[1, 0, 2, 1, 0], 2).unwrap();
//! assert_eq!(field.len(), 3);
//! assert_eq!(field.last().to_string(), "12222");
//!
//! // Stateful: history accumulates across calls.
//! let mut ca = Automaton::new(table, &[1, 0, 2, 1, 0]).unwrap();
//! ca.evolve(1).unwrap();
//! ca.evolve(1).unwrap();
//! assert_eq!(ca.spacetime(), &field);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trine-core` | Symbols, configurations, spacetime fields, IDs, errors |
//! | [`space`] | `trine-space` | Ring topology and neighbourhood enumeration |
//! | [`rule`] | `trine-rule` | Rule index decoding and base-3 helpers |
//! | [`engine`] | `trine-engine` | Evolution, the stateful automaton, run configuration |
//! | [`replay`] | `trine-replay` | Determinism fingerprints and field comparison |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`trine-core`).
///
/// Contains [`types::Symbol`], [`types::Configuration`],
/// [`types::SpacetimeField`], the [`types::RuleIndex`] and
/// [`types::TimeSteps`] newtypes, and [`types::InvalidArgument`].
pub use trine_core as types;

/// Ring topology (`trine-space`).
///
/// [`space::Ring1D`] maps each cell to its wrapped left neighbour.
pub use trine_space as space;

/// Rule decoding (`trine-rule`).
///
/// [`rule::build_rule_table`] decodes a rule index; [`rule::ternary`]
/// exposes the base-3 digit helpers.
pub use trine_rule as rule;

/// Evolution (`trine-engine`).
///
/// [`engine::evolve()`] for one-shot fields, [`engine::Automaton`] for
/// incremental runs, [`engine::RunConfig`] for seeded runs.
pub use trine_engine as engine;

/// Determinism verification (`trine-replay`).
///
/// Fingerprint fields with [`replay::field_hash`] and locate
/// differences with [`replay::first_divergence`].
pub use trine_replay as replay;

/// Common imports for typical Trine usage.
///
/// ```rust
/// use trine::prelude::*;
/// ```
///
/// This imports the most frequently used types: the cell alphabet, rows and
/// fields, rule tables, and both evolution entry points.
pub mod prelude {
    // Core types
    pub use trine_core::{Configuration, Neighbourhood, RuleIndex, SpacetimeField, Symbol, TimeSteps};

    // Errors
    pub use trine_core::InvalidArgument;
    pub use trine_engine::ConfigError;

    // Rules
    pub use trine_rule::{build_rule_table, DigitOrder, RuleTable};

    // Engine
    pub use trine_engine::{evolve, Automaton, EvolveMetrics, RunConfig};
}
