//! The cell alphabet and two-cell neighbourhoods.

use std::fmt;

/// The state of a single cell: one of `0`, `1` or `2`.
///
/// Values outside the alphabet are unrepresentable; raw integers enter
/// through [`Symbol::from_digit`] or
/// [`Configuration::from_values`](crate::Configuration::from_values).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Symbol {
    /// State `0`.
    #[default]
    Zero = 0,
    /// State `1`.
    One = 1,
    /// State `2`.
    Two = 2,
}

impl Symbol {
    /// Size of the alphabet.
    pub const COUNT: usize = 3;

    /// Every symbol, in ascending order.
    pub const ALL: [Symbol; Self::COUNT] = [Symbol::Zero, Symbol::One, Symbol::Two];

    /// Convert a raw digit, returning `None` outside `{0, 1, 2}`.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Symbol::Zero),
            1 => Some(Symbol::One),
            2 => Some(Symbol::Two),
            _ => None,
        }
    }

    /// The numeric value of this symbol.
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl From<Symbol> for u8 {
    fn from(s: Symbol) -> Self {
        s.value()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The inputs that determine a cell's next value: its left neighbour and
/// the cell itself.
///
/// The derived ordering is lexicographic on `(left, centre)`, which is
/// also the order of [`Neighbourhood::ALL`] and of
/// [`index()`](Neighbourhood::index).
///
/// # Examples
///
/// ```
/// use trine_core::{Neighbourhood, Symbol};
///
/// let n = Neighbourhood::new(Symbol::One, Symbol::Two);
/// assert_eq!(n.index(), 5);
/// assert_eq!(Neighbourhood::ALL[5], n);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Neighbourhood {
    /// Value of the cell to the left (wrapping at the boundary).
    pub left: Symbol,
    /// Value of the cell being updated.
    pub centre: Symbol,
}

impl Neighbourhood {
    /// Number of distinct neighbourhoods (3 × 3).
    pub const COUNT: usize = Symbol::COUNT * Symbol::COUNT;

    /// Every neighbourhood in lexicographic order:
    /// `(0,0), (0,1), (0,2), (1,0), …, (2,2)`.
    pub const ALL: [Neighbourhood; Self::COUNT] = [
        Self::new(Symbol::Zero, Symbol::Zero),
        Self::new(Symbol::Zero, Symbol::One),
        Self::new(Symbol::Zero, Symbol::Two),
        Self::new(Symbol::One, Symbol::Zero),
        Self::new(Symbol::One, Symbol::One),
        Self::new(Symbol::One, Symbol::Two),
        Self::new(Symbol::Two, Symbol::Zero),
        Self::new(Symbol::Two, Symbol::One),
        Self::new(Symbol::Two, Symbol::Two),
    ];

    /// Build a neighbourhood from its left and centre values.
    pub const fn new(left: Symbol, centre: Symbol) -> Self {
        Self { left, centre }
    }

    /// Lexicographic position in `0..9`.
    pub const fn index(self) -> usize {
        self.left as usize * Symbol::COUNT + self.centre as usize
    }

    /// Inverse of [`index()`](Self::index); `None` for `index >= 9`.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        Some(Self::ALL[index])
    }
}

impl fmt::Display for Neighbourhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.left, self.centre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_digit_accepts_only_alphabet() {
        assert_eq!(Symbol::from_digit(0), Some(Symbol::Zero));
        assert_eq!(Symbol::from_digit(1), Some(Symbol::One));
        assert_eq!(Symbol::from_digit(2), Some(Symbol::Two));
        assert_eq!(Symbol::from_digit(3), None);
        assert_eq!(Symbol::from_digit(u8::MAX), None);
    }

    #[test]
    fn value_round_trips() {
        for s in Symbol::ALL {
            assert_eq!(Symbol::from_digit(s.value()), Some(s));
            assert_eq!(u8::from(s), s.value());
        }
    }

    #[test]
    fn all_is_lexicographic_and_matches_index() {
        for (i, n) in Neighbourhood::ALL.iter().enumerate() {
            assert_eq!(n.index(), i);
            assert_eq!(Neighbourhood::from_index(i), Some(*n));
        }
        assert!(Neighbourhood::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Neighbourhood::from_index(9), None);
    }

    #[test]
    fn display() {
        assert_eq!(Symbol::Two.to_string(), "2");
        assert_eq!(
            Neighbourhood::new(Symbol::Two, Symbol::Zero).to_string(),
            "(2,0)"
        );
    }
}
