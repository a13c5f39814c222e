//! Immutable neighbourhood → output lookup tables.

use std::fmt;

use trine_core::{InvalidArgument, Neighbourhood, RuleIndex, Symbol};

use crate::ternary;

/// How the nine digits of a rule index map onto neighbourhoods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigitOrder {
    /// Digit 0 (most significant) → `(0,0)`, …, digit 8 → `(2,2)`.
    #[default]
    MostSignificantFirst,
    /// Digit 8 (least significant) → `(0,0)`, …, digit 0 → `(2,2)`.
    LeastSignificantFirst,
}

impl DigitOrder {
    /// Neighbourhood index that digit `position` (0 = most significant)
    /// is assigned to.
    const fn slot(self, position: usize) -> usize {
        match self {
            Self::MostSignificantFirst => position,
            Self::LeastSignificantFirst => ternary::DIGITS - 1 - position,
        }
    }
}

/// A total mapping from each of the nine [`Neighbourhood`]s to an output
/// [`Symbol`].
///
/// Built once and never mutated. Outputs are stored in lexicographic
/// neighbourhood order, so lookup is a single array index.
///
/// # Examples
///
/// ```
/// use trine_core::{Neighbourhood, Symbol};
/// use trine_rule::build_rule_table;
///
/// let table = build_rule_table(8711).unwrap();
/// assert_eq!(table.to_string(), "102221122");
/// assert_eq!(table.apply(Symbol::Zero, Symbol::Zero), Symbol::One);
/// assert_eq!(table.get(Neighbourhood::new(Symbol::Two, Symbol::Two)), Symbol::Two);
/// assert_eq!(table.rule_index().get(), 8711);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable {
    outputs: [Symbol; Neighbourhood::COUNT],
}

impl RuleTable {
    /// Decode `index` with the canonical digit order.
    pub fn from_index(index: RuleIndex) -> Self {
        Self::from_index_with(index, DigitOrder::MostSignificantFirst)
    }

    /// Decode `index` with an explicit digit order.
    pub fn from_index_with(index: RuleIndex, order: DigitOrder) -> Self {
        let digits = ternary::digits(index);
        let mut outputs = [Symbol::Zero; Neighbourhood::COUNT];
        for (position, digit) in digits.into_iter().enumerate() {
            outputs[order.slot(position)] = digit;
        }
        Self { outputs }
    }

    /// Build a table from outputs listed in lexicographic neighbourhood
    /// order.
    pub const fn from_outputs(outputs: [Symbol; Neighbourhood::COUNT]) -> Self {
        Self { outputs }
    }

    /// Output for `neighbourhood`.
    pub const fn get(&self, neighbourhood: Neighbourhood) -> Symbol {
        self.outputs[neighbourhood.index()]
    }

    /// Output for a cell with value `centre` whose left neighbour is
    /// `left`.
    pub const fn apply(&self, left: Symbol, centre: Symbol) -> Symbol {
        self.get(Neighbourhood::new(left, centre))
    }

    /// Outputs in lexicographic neighbourhood order.
    pub const fn outputs(&self) -> &[Symbol; Neighbourhood::COUNT] {
        &self.outputs
    }

    /// `(neighbourhood, output)` entries in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (Neighbourhood, Symbol)> + '_ {
        Neighbourhood::ALL.into_iter().zip(self.outputs.iter().copied())
    }

    /// Re-encode the canonical rule index (inverse of
    /// [`from_index`](Self::from_index)).
    pub fn rule_index(&self) -> RuleIndex {
        self.rule_index_with(DigitOrder::MostSignificantFirst)
    }

    /// Re-encode under an explicit digit order.
    pub fn rule_index_with(&self, order: DigitOrder) -> RuleIndex {
        let mut digits = [Symbol::Zero; ternary::DIGITS];
        for (position, digit) in digits.iter_mut().enumerate() {
            *digit = self.outputs[order.slot(position)];
        }
        ternary::encode(&digits)
    }
}

/// Outputs as nine digits, `(0,0)` first.
impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ternary::format(&self.outputs))
    }
}

impl From<RuleIndex> for RuleTable {
    fn from(index: RuleIndex) -> Self {
        Self::from_index(index)
    }
}

/// Decode a rule number into its lookup table.
///
/// Accepts any integer (or a [`RuleIndex`]); values outside
/// `[0, 19682]`, negative ones included, are rejected with
/// [`InvalidArgument::RuleIndexOutOfRange`].
///
/// # Examples
///
/// ```
/// use trine_core::{InvalidArgument, Symbol};
/// use trine_rule::build_rule_table;
///
/// let zero = build_rule_table(0).unwrap();
/// assert!(zero.outputs().iter().all(|&s| s == Symbol::Zero));
///
/// assert!(matches!(
///     build_rule_table(19683),
///     Err(InvalidArgument::RuleIndexOutOfRange { .. })
/// ));
/// ```
pub fn build_rule_table<I>(rule_index: I) -> Result<RuleTable, InvalidArgument>
where
    I: TryInto<RuleIndex>,
    I::Error: Into<InvalidArgument>,
{
    let index = rule_index.try_into().map_err(Into::into)?;
    Ok(RuleTable::from_index(index))
}
