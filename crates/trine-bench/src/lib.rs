//! Benchmark profiles for the Trine cellular automaton workspace.
//!
//! Provides pre-built [`RunConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 1,000 cells for 1,000 steps (1M cell updates)
//! - [`stress_profile`]: 10,000 cells for 1,000 steps (10M cell updates)
//! - [`all_tables`]: every decodable rule table, for decode throughput

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trine_core::{RuleIndex, TimeSteps};
use trine_engine::config::DEFAULT_RULE;
use trine_engine::RunConfig;
use trine_rule::RuleTable;

/// Build a reference benchmark profile: 1,000 cells, 1,000 steps.
///
/// Uses the default rule and a seeded random initial row.
pub fn reference_profile(seed: u64) -> RunConfig {
    RunConfig {
        rule_index: DEFAULT_RULE,
        width: 1_000,
        time_steps: TimeSteps::new(1_000),
        seed: Some(seed),
        initial: None,
    }
}

/// Build a stress benchmark profile: 10,000 cells, 1,000 steps.
///
/// Same rule as [`reference_profile`] at 10x the width.
pub fn stress_profile(seed: u64) -> RunConfig {
    RunConfig {
        width: 10_000,
        ..reference_profile(seed)
    }
}

/// Decode every rule index in `RuleIndex::MIN..=RuleIndex::MAX`.
pub fn all_tables() -> Vec<RuleTable> {
    RuleIndex::all().map(RuleTable::from_index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        assert!(reference_profile(1).validate().is_ok());
        assert!(stress_profile(1).validate().is_ok());
        assert_eq!(stress_profile(1).width, 10_000);
    }

    #[test]
    fn all_tables_is_exhaustive() {
        assert_eq!(all_tables().len(), RuleIndex::COUNT as usize);
    }
}
