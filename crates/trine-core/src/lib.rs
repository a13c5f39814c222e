//! Core types for the Trine cellular automaton workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Trine workspace:
//! the three-symbol cell alphabet, two-cell neighbourhoods, spatial
//! configurations, the append-only spacetime field, strongly-typed rule
//! indices and step counts, and the argument error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod configuration;
pub mod error;
pub mod field;
pub mod id;
pub mod symbol;

pub use configuration::Configuration;
pub use error::InvalidArgument;
pub use field::SpacetimeField;
pub use id::{RuleIndex, TimeSteps};
pub use symbol::{Neighbourhood, Symbol};
