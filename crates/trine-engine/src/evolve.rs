//! Pure spacetime-field generation.
//!
//! Every row is computed from the previous row alone (synchronous
//! update): the kernel reads a finished [`Configuration`] and builds a
//! fresh one, so no cell ever sees a value written in the same step.

use std::fmt;

use trine_core::{Configuration, InvalidArgument, SpacetimeField, TimeSteps};
use trine_rule::RuleTable;
use trine_space::Ring1D;

/// Advance `current` by one step under `rule_table`.
///
/// Cell `i` of the result is `rule_table[(current[i - 1], current[i])]`
/// with indices taken around the ring, so cell 0 reads the last cell as
/// its left neighbour. The result has the width of `current`.
pub fn step(rule_table: &RuleTable, current: &Configuration) -> Configuration {
    Ring1D::neighbourhoods(current.cells())
        .map(|n| rule_table.get(n))
        .collect()
}

/// Evolve an already-validated configuration for `time_steps` steps.
///
/// Returns `time_steps + 1` rows; row 0 is an owned copy of `initial`.
/// Every generated row has the width of `initial`, so the only error
/// is a [`InvalidArgument::RowWidthMismatch`] from a broken kernel.
pub fn evolve_configuration(
    rule_table: &RuleTable,
    initial: &Configuration,
    time_steps: TimeSteps,
) -> Result<SpacetimeField, InvalidArgument> {
    let mut field = SpacetimeField::new(initial.clone());
    extend(rule_table, &mut field, time_steps)?;
    tracing::trace!(
        rule = %rule_table,
        width = field.width(),
        steps = time_steps.get(),
        "evolved spacetime field"
    );
    Ok(field)
}

/// Append `time_steps` rows to `field`, each computed from the last.
///
/// Rows are staged first and committed with
/// [`SpacetimeField::append`], so on error `field` is unchanged.
pub(crate) fn extend(
    rule_table: &RuleTable,
    field: &mut SpacetimeField,
    time_steps: TimeSteps,
) -> Result<(), InvalidArgument> {
    let mut staged: Vec<Configuration> = Vec::with_capacity(time_steps.get());
    for _ in 0..time_steps.get() {
        let next = step(rule_table, staged.last().unwrap_or(field.last()));
        staged.push(next);
    }
    field.append(staged)
}

/// Generate the spacetime field of `rule_table` from raw inputs.
///
/// Validates before computing anything:
///
/// - `time_steps` must convert to a non-negative integer, else
///   [`InvalidArgument::InvalidTimeSteps`]. Integers, floats (truncated)
///   and [`TimeSteps`] are accepted.
/// - every cell of `initial_configuration` must be `0`, `1` or `2`, else
///   [`InvalidArgument::InvalidSymbol`].
///
/// The initial row is copied; mutating the caller's slice afterwards has
/// no effect on the returned field. An empty initial row is valid and
/// yields `time_steps + 1` empty rows.
///
/// # Examples
///
/// ```
/// use trine_engine::evolve;
/// use trine_rule::build_rule_table;
///
/// let table = build_rule_table(8711).unwrap();
/// let field = evolve(&table, &[1, 0, 2, 1, 0], 2).unwrap();
/// assert_eq!(
///     field.to_rows(),
///     vec![vec![1, 0, 2, 1, 0], vec![0, 2, 2, 2, 2], vec![1, 2, 2, 2, 2]],
/// );
/// ```
pub fn evolve<T, S>(
    rule_table: &RuleTable,
    initial_configuration: &[T],
    time_steps: S,
) -> Result<SpacetimeField, InvalidArgument>
where
    T: Copy + TryInto<u8> + fmt::Display,
    S: TryInto<TimeSteps>,
    S::Error: Into<InvalidArgument>,
{
    let time_steps = time_steps.try_into().map_err(Into::into)?;
    let initial = Configuration::from_values(initial_configuration)?;
    evolve_configuration(rule_table, &initial, time_steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use trine_core::{Neighbourhood, RuleIndex, Symbol};
    use trine_rule::build_rule_table;

    fn row(s: &str) -> Configuration {
        s.parse().unwrap()
    }

    #[test]
    fn step_wraps_left_neighbour() {
        // Identity on the left neighbour: out = left.
        let shift = RuleTable::from_outputs(Neighbourhood::ALL.map(|n| n.left));
        assert_eq!(step(&shift, &row("1200")), row("0120"));
        assert_eq!(step(&shift, &row("0002")), row("2000"));
    }

    #[test]
    fn step_on_empty_row_is_empty() {
        let t = build_rule_table(8711).unwrap();
        assert!(step(&t, &Configuration::default()).is_empty());
    }

    #[test]
    fn zero_steps_returns_initial_only() {
        let t = build_rule_table(8711).unwrap();
        let f = evolve(&t, &[2u8, 1, 0], 0).unwrap();
        assert_eq!(f.len(), 1);
        assert_eq!(f.initial(), &row("210"));
    }

    #[test]
    fn time_steps_are_checked_before_cells() {
        let t = build_rule_table(0).unwrap();
        let err = evolve(&t, &[9], -1).unwrap_err();
        assert!(matches!(err, InvalidArgument::InvalidTimeSteps { .. }));
    }

    #[test]
    fn float_time_steps_are_truncated() {
        let t = build_rule_table(0).unwrap();
        assert_eq!(evolve(&t, &[1], 2.9f64).unwrap().len(), 3);
        assert!(evolve(&t, &[1], f64::NAN).is_err());
    }

    #[test]
    fn synchronous_update() {
        // out = left: a sequential in-place sweep would smear cell 0
        // across the whole row; a synchronous update rotates it.
        let shift = RuleTable::from_outputs(Neighbourhood::ALL.map(|n| n.left));
        let f = evolve_configuration(&shift, &row("1000"), TimeSteps::new(4)).unwrap();
        let rows: Vec<String> = f.iter().map(|r| r.to_string()).collect();
        assert_eq!(rows, vec!["1000", "0100", "0010", "0001", "1000"]);
    }

    fn arb_row() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..3, 0..24)
    }

    proptest! {
        #[test]
        fn shape_is_steps_plus_one_by_width(
            rule in 0u16..=19682,
            cells in arb_row(),
            steps in 0usize..12,
        ) {
            let t = RuleTable::from_index(RuleIndex::new(rule).unwrap());
            let f = evolve(&t, &cells, steps).unwrap();
            prop_assert_eq!(f.len(), steps + 1);
            prop_assert_eq!(f.initial().to_values(), cells.clone());
            for r in f.iter() {
                prop_assert_eq!(r.len(), cells.len());
            }
        }

        #[test]
        fn each_cell_follows_the_table(
            rule in 0u16..=19682,
            cells in prop::collection::vec(0u8..3, 1..24),
        ) {
            let t = RuleTable::from_index(RuleIndex::new(rule).unwrap());
            let f = evolve(&t, &cells, 1usize).unwrap();
            let prev = f.initial().cells();
            let next = f.last().cells();
            let len = prev.len();
            for i in 0..len {
                let left = prev[(i + len - 1) % len];
                prop_assert_eq!(next[i], t.apply(left, prev[i]));
            }
            prop_assert_eq!(next[0], t.apply(prev[len - 1], prev[0]));
        }

        #[test]
        fn outputs_stay_in_alphabet(rule in 0u16..=19682, cells in arb_row()) {
            let t = RuleTable::from_index(RuleIndex::new(rule).unwrap());
            let f = evolve(&t, &cells, 5u8).unwrap();
            prop_assert!(f.as_flat().iter().all(|&v| v <= 2));
            prop_assert!(f.iter().flat_map(|r| r.iter()).all(|s| Symbol::ALL.contains(&s)));
        }
    }
}
