//! Proptest strategies for core types.

use proptest::prelude::*;
use trine_core::{Configuration, RuleIndex, Symbol};
use trine_rule::RuleTable;

pub fn arb_symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![Just(Symbol::Zero), Just(Symbol::One), Just(Symbol::Two)]
}

/// Rows of up to `max_width` cells, empty rows included.
pub fn arb_configuration(max_width: usize) -> impl Strategy<Value = Configuration> {
    prop::collection::vec(arb_symbol(), 0..=max_width).prop_map(Configuration::new)
}

pub fn arb_rule_index() -> impl Strategy<Value = RuleIndex> {
    (RuleIndex::MIN.get()..=RuleIndex::MAX.get()).prop_filter_map("in range", RuleIndex::new)
}

pub fn arb_rule_table() -> impl Strategy<Value = RuleTable> {
    arb_rule_index().prop_map(RuleTable::from_index)
}
