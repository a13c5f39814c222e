//! Spatial configurations: one row of cells at one time step.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidArgument;
use crate::symbol::Symbol;

/// An ordered, fixed-length row of [`Symbol`]s.
///
/// A configuration owns its cells. Building one from caller data always
/// copies, so later mutation of the caller's buffer cannot reach into a
/// running simulation. A zero-length configuration is valid.
///
/// # Examples
///
/// ```
/// use trine_core::Configuration;
///
/// let row = Configuration::from_values(&[1, 0, 2]).unwrap();
/// assert_eq!(row.len(), 3);
/// assert_eq!(row.to_string(), "102");
///
/// assert!(Configuration::from_values(&[0, 1, 3]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Configuration {
    cells: Vec<Symbol>,
}

impl Configuration {
    /// Wrap already-validated cells.
    pub fn new(cells: Vec<Symbol>) -> Self {
        Self { cells }
    }

    /// A row of `len` zero cells.
    pub fn zeros(len: usize) -> Self {
        Self {
            cells: vec![Symbol::Zero; len],
        }
    }

    /// Validate and copy raw cell values.
    ///
    /// Returns [`InvalidArgument::InvalidSymbol`] naming the first cell
    /// that is not `0`, `1` or `2`.
    pub fn from_values<T>(values: &[T]) -> Result<Self, InvalidArgument>
    where
        T: Copy + TryInto<u8> + fmt::Display,
    {
        let mut cells = Vec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            let symbol = value
                .try_into()
                .ok()
                .and_then(Symbol::from_digit)
                .ok_or_else(|| InvalidArgument::InvalidSymbol {
                    index,
                    value: value.to_string(),
                })?;
            cells.push(symbol);
        }
        Ok(Self { cells })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells as a slice.
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// The cell at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied()
    }

    /// Iterate over the cells from left to right.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Symbol>> {
        self.cells.iter().copied()
    }

    /// The cells as raw values.
    pub fn to_values(&self) -> Vec<u8> {
        self.cells.iter().map(|s| s.value()).collect()
    }

    /// Consume the configuration, returning its cells.
    pub fn into_cells(self) -> Vec<Symbol> {
        self.cells
    }
}

impl AsRef<[Symbol]> for Configuration {
    fn as_ref(&self) -> &[Symbol] {
        &self.cells
    }
}

impl From<Vec<Symbol>> for Configuration {
    fn from(cells: Vec<Symbol>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Symbol> for Configuration {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<&[u8]> for Configuration {
    type Error = InvalidArgument;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl TryFrom<Vec<u8>> for Configuration {
    type Error = InvalidArgument;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

/// Parses a digit string such as `"10210"`.
impl FromStr for Configuration {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, ch)| {
                ch.to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .and_then(Symbol::from_digit)
                    .ok_or_else(|| InvalidArgument::InvalidSymbol {
                        index,
                        value: ch.to_string(),
                    })
            })
            .collect()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.cells {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = Symbol;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Symbol>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_values_reports_first_bad_cell() {
        let err = Configuration::from_values(&[0, 1, 3, 7]).unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::InvalidSymbol {
                index: 2,
                value: "3".into()
            }
        );
    }

    #[test]
    fn from_values_rejects_negative() {
        let err = Configuration::from_values(&[0i64, -1]).unwrap_err();
        assert!(matches!(err, InvalidArgument::InvalidSymbol { index: 1, .. }));
    }

    #[test]
    fn from_values_accepts_empty() {
        let row = Configuration::from_values::<u8>(&[]).unwrap();
        assert!(row.is_empty());
        assert_eq!(row.to_string(), "");
    }

    #[test]
    fn copies_caller_buffer() {
        let mut raw = vec![1u8, 0, 2];
        let row = Configuration::try_from(raw.as_slice()).unwrap();
        raw[0] = 2;
        assert_eq!(row.to_values(), vec![1, 0, 2]);
    }

    #[test]
    fn parse_digit_string() {
        let row: Configuration = "10210".parse().unwrap();
        assert_eq!(row.to_values(), vec![1, 0, 2, 1, 0]);

        let err = "10x".parse::<Configuration>().unwrap_err();
        assert!(matches!(err, InvalidArgument::InvalidSymbol { index: 2, .. }));
        assert!("123".parse::<Configuration>().is_err());
    }

    #[test]
    fn zeros() {
        let row = Configuration::zeros(4);
        assert_eq!(row.to_string(), "0000");
    }

    proptest! {
        #[test]
        fn valid_values_survive_round_trip(values in prop::collection::vec(0u8..3, 0..64)) {
            let row = Configuration::from_values(&values).unwrap();
            prop_assert_eq!(row.len(), values.len());
            prop_assert_eq!(row.to_values(), values.clone());
            let reparsed: Configuration = row.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, row);
        }
    }
}
