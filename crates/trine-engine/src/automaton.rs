//! Stateful automaton with an accumulating history.
//!
//! [`Automaton`] owns its rule table and spacetime field. Each call to
//! [`evolve()`](Automaton::evolve) validates its argument, then appends
//! the requested rows and advances the current configuration as one
//! step: repeated calls accumulate history instead of restarting it.
//!
//! # Ownership model
//!
//! `Automaton` is [`Send`] and all mutating methods take `&mut self`,
//! so the field has exactly one writer. Borrowed views returned by
//! [`spacetime()`](Automaton::spacetime) must be dropped before the next
//! `evolve()`; the borrow checker enforces this.

use std::fmt;
use std::time::Instant;

use trine_core::{Configuration, InvalidArgument, SpacetimeField, TimeSteps};
use trine_rule::RuleTable;

use crate::evolve;
use crate::metrics::EvolveMetrics;

// Compile-time assertion: Automaton is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Automaton>();
    }
};

/// A three-state automaton that can be evolved incrementally.
///
/// # Example
///
/// ```
/// use trine_engine::Automaton;
/// use trine_rule::build_rule_table;
///
/// let table = build_rule_table(8711).unwrap();
/// let mut ca = Automaton::new(table, &[1, 0, 2, 1, 0]).unwrap();
/// ca.evolve(1).unwrap();
/// ca.evolve(1).unwrap();
///
/// assert_eq!(ca.time(), 2);
/// assert_eq!(ca.current().to_string(), "12222");
/// assert_eq!(ca.spacetime().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    rule_table: RuleTable,
    field: SpacetimeField,
    last_metrics: EvolveMetrics,
}

impl Automaton {
    /// Create an automaton from raw initial cell values.
    ///
    /// The values are validated and copied; the caller's slice is not
    /// retained.
    pub fn new<T>(rule_table: RuleTable, initial_configuration: &[T]) -> Result<Self, InvalidArgument>
    where
        T: Copy + TryInto<u8> + fmt::Display,
    {
        let initial = Configuration::from_values(initial_configuration)?;
        Ok(Self::from_configuration(rule_table, initial))
    }

    /// Create an automaton from an already-validated configuration.
    pub fn from_configuration(rule_table: RuleTable, initial: Configuration) -> Self {
        Self {
            rule_table,
            field: SpacetimeField::new(initial),
            last_metrics: EvolveMetrics::default(),
        }
    }

    /// Evolve `time_steps` further steps from the current configuration.
    ///
    /// Appends `time_steps` rows to the accumulated field. On error
    /// nothing is appended and the current configuration is unchanged.
    pub fn evolve<S>(&mut self, time_steps: S) -> Result<EvolveMetrics, InvalidArgument>
    where
        S: TryInto<TimeSteps>,
        S::Error: Into<InvalidArgument>,
    {
        let time_steps = time_steps.try_into().map_err(Into::into)?;
        let start = Instant::now();

        evolve::extend(&self.rule_table, &mut self.field, time_steps)?;

        let metrics = EvolveMetrics {
            total_us: start.elapsed().as_micros() as u64,
            steps: time_steps.get(),
            cells_updated: time_steps.get().saturating_mul(self.field.width()),
        };
        tracing::debug!(
            rule = %self.rule_table,
            steps = metrics.steps,
            time = self.field.time_steps(),
            total_us = metrics.total_us,
            "automaton evolved"
        );
        self.last_metrics = metrics;
        Ok(metrics)
    }

    /// Discard all evolved rows, returning to the initial configuration.
    pub fn reset(&mut self) {
        self.field = SpacetimeField::new(self.field.initial().clone());
        self.last_metrics = EvolveMetrics::default();
    }

    /// The rule table driving this automaton.
    pub fn rule_table(&self) -> &RuleTable {
        &self.rule_table
    }

    /// The configuration at the latest time step.
    pub fn current(&self) -> &Configuration {
        self.field.last()
    }

    /// The configuration the automaton was created with.
    pub fn initial(&self) -> &Configuration {
        self.field.initial()
    }

    /// The accumulated field, including the initial row.
    pub fn spacetime(&self) -> &SpacetimeField {
        &self.field
    }

    /// Number of steps taken so far.
    pub fn time(&self) -> usize {
        self.field.time_steps()
    }

    /// Metrics from the most recent successful `evolve()` call.
    pub fn last_metrics(&self) -> EvolveMetrics {
        self.last_metrics
    }

    /// Consume the automaton, returning its field.
    pub fn into_spacetime(self) -> SpacetimeField {
        self.field
    }
}
