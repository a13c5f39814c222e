//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the builder-input for a simulation run: the rule,
//! the row width, the number of steps, and either an explicit initial
//! row or an optional seed for a random one.
//! [`validate()`](RunConfig::validate) checks structural invariants;
//! [`build()`](RunConfig::build) returns a ready [`Automaton`].

use std::error::Error;
use std::fmt;

use trine_core::{Configuration, InvalidArgument, RuleIndex, TimeSteps};
use trine_rule::RuleTable;

use crate::automaton::Automaton;
use crate::initial::{random_configuration, random_configuration_unseeded};

/// Rule used when none is configured.
pub const DEFAULT_RULE: RuleIndex = match RuleIndex::new(8711) {
    Some(rule) => rule,
    None => RuleIndex::MIN,
};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating or building a [`RunConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An argument failed validation.
    Argument(InvalidArgument),
    /// The explicit initial row does not have the configured width.
    InitialWidthMismatch {
        /// The configured width.
        expected: usize,
        /// The width of the supplied row.
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(e) => write!(f, "invalid argument: {e}"),
            Self::InitialWidthMismatch { expected, actual } => {
                write!(
                    f,
                    "initial configuration has {actual} cells, width is {expected}"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Argument(e) => Some(e),
            Self::InitialWidthMismatch { .. } => None,
        }
    }
}

impl From<InvalidArgument> for ConfigError {
    fn from(e: InvalidArgument) -> Self {
        Self::Argument(e)
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Parameters for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Rule number. Default: 8711.
    pub rule_index: RuleIndex,
    /// Cells per row. Default: 100.
    pub width: usize,
    /// Steps evolved by [`run()`](RunConfig::run). Default: 100.
    pub time_steps: TimeSteps,
    /// Seed for a random initial row. `None` draws a fresh seed, which
    /// is logged so the run can be repeated. Ignored when `initial` is
    /// set. Default: `None`.
    pub seed: Option<u64>,
    /// Explicit initial row; must be `width` cells long. Default: `None`.
    pub initial: Option<Configuration>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rule_index: DEFAULT_RULE,
            width: 100,
            time_steps: TimeSteps::new(100),
            seed: None,
            initial: None,
        }
    }
}

impl RunConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(initial) = &self.initial {
            if initial.len() != self.width {
                return Err(ConfigError::InitialWidthMismatch {
                    expected: self.width,
                    actual: initial.len(),
                });
            }
        }
        Ok(())
    }

    /// Validate and build an automaton at time 0.
    pub fn build(&self) -> Result<Automaton, ConfigError> {
        self.validate()?;
        let table = RuleTable::from_index(self.rule_index);
        let initial = match (&self.initial, self.seed) {
            (Some(initial), _) => initial.clone(),
            (None, Some(seed)) => random_configuration(self.width, seed),
            (None, None) => {
                let (row, seed) = random_configuration_unseeded(self.width);
                tracing::info!(seed, width = self.width, "drew random initial configuration");
                row
            }
        };
        tracing::debug!(
            rule = %self.rule_index,
            table = %table,
            width = self.width,
            "built automaton"
        );
        Ok(Automaton::from_configuration(table, initial))
    }

    /// Build an automaton and evolve it for [`time_steps`](Self::time_steps).
    pub fn run(&self) -> Result<Automaton, ConfigError> {
        let mut automaton = self.build()?;
        automaton.evolve(self.time_steps)?;
        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = RunConfig::default();
        assert_eq!(c.rule_index.get(), 8711);
        assert_eq!(c.width, 100);
        assert_eq!(c.time_steps.get(), 100);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn width_mismatch_is_rejected() {
        let c = RunConfig {
            width: 4,
            initial: Some("102".parse().unwrap()),
            ..RunConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::InitialWidthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(c.build().is_err());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let c = RunConfig {
            width: 30,
            time_steps: TimeSteps::new(10),
            seed: Some(99),
            ..RunConfig::default()
        };
        let a = c.run().unwrap();
        let b = c.run().unwrap();
        assert_eq!(a.spacetime(), b.spacetime());
        assert_eq!(a.time(), 10);
    }

    #[test]
    fn explicit_initial_wins_over_seed() {
        let c = RunConfig {
            width: 5,
            time_steps: TimeSteps::new(2),
            seed: Some(1),
            initial: Some("10210".parse().unwrap()),
            ..RunConfig::default()
        };
        let a = c.run().unwrap();
        assert_eq!(a.initial().to_string(), "10210");
        assert_eq!(a.current().to_string(), "12222");
    }

    #[test]
    fn argument_error_has_source() {
        let e = ConfigError::from(InvalidArgument::InvalidTimeSteps { value: "-1".into() });
        assert!(e.source().is_some());
        assert!(e.to_string().contains("time_steps"));
    }
}
