//! Golden fixtures and readable rule-table constructors.
//!
//! Expected fields here were worked by hand from the rule digits, not
//! produced by the engine under test.

use trine_core::{Neighbourhood, RuleIndex};
use trine_rule::{ternary, RuleTable};

/// A rule, an initial row, and the exact field it must produce.
#[derive(Clone, Debug)]
pub struct Golden {
    pub rule: RuleIndex,
    pub initial: Vec<u8>,
    pub time_steps: usize,
    pub expected: Vec<Vec<u8>>,
}

impl Golden {
    /// The same scenario cut to its first `time_steps` steps.
    pub fn truncated(&self, time_steps: usize) -> Golden {
        Golden {
            rule: self.rule,
            initial: self.initial.clone(),
            time_steps,
            expected: self.expected[..=time_steps].to_vec(),
        }
    }
}

/// Rule 8711 (`102221122`) on `[1, 0, 2, 1, 0]` for five steps.
///
/// After two steps the row fills with 2s and a single 1 walks right one
/// cell per step.
pub fn golden_8711() -> Golden {
    Golden {
        rule: RuleIndex::new(8711).expect("8711 is a valid rule"),
        initial: vec![1, 0, 2, 1, 0],
        time_steps: 5,
        expected: vec![
            vec![1, 0, 2, 1, 0],
            vec![0, 2, 2, 2, 2],
            vec![1, 2, 2, 2, 2],
            vec![2, 1, 2, 2, 2],
            vec![2, 2, 1, 2, 2],
            vec![2, 2, 2, 1, 2],
        ],
    }
}

/// Build a table from its digit string, `(0,0)` first.
///
/// Panics on malformed input; intended for test setup only.
pub fn table_from_digits(digits: &str) -> RuleTable {
    match ternary::parse(digits) {
        Ok(d) => RuleTable::from_outputs(d),
        Err(e) => panic!("bad rule digits {digits:?}: {e}"),
    }
}

/// The rule whose output is the left neighbour: each step rotates the
/// row one cell to the right.
pub fn shift_left_table() -> RuleTable {
    RuleTable::from_outputs(Neighbourhood::ALL.map(|n| n.left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_table_matches_digits() {
        let g = golden_8711();
        assert_eq!(RuleTable::from_index(g.rule), table_from_digits("102221122"));
        assert_eq!(g.expected.len(), g.time_steps + 1);
        assert_eq!(g.expected[0], g.initial);
    }

    #[test]
    fn truncated_keeps_prefix() {
        let g = golden_8711().truncated(2);
        assert_eq!(g.expected.len(), 3);
        assert_eq!(g.expected[2], vec![1, 2, 2, 2, 2]);
    }

    #[test]
    fn shift_table_digits() {
        let t = shift_left_table();
        assert_eq!(t.to_string(), "000111222");
        assert_eq!(t.rule_index().get(), 377);
    }
}
