//! The spacetime field: the append-only history of a run.

use std::fmt;

use crate::configuration::Configuration;
use crate::error::InvalidArgument;

/// An ordered history of [`Configuration`]s, indexed by time step.
///
/// Row 0 is the initial configuration. Rows are only ever appended;
/// the field never shrinks or reorders, and every row has the width of
/// row 0; appends of any other width are rejected. This is the
/// boundary handed to renderers: rows are time, columns are space.
///
/// # Examples
///
/// ```
/// use trine_core::{Configuration, SpacetimeField};
///
/// let initial: Configuration = "120".parse().unwrap();
/// let mut field = SpacetimeField::new(initial.clone());
/// field.push("012".parse().unwrap()).unwrap();
/// assert!(field.push("01".parse().unwrap()).is_err());
///
/// assert_eq!(field.len(), 2);
/// assert_eq!(field.time_steps(), 1);
/// assert_eq!(field.initial(), &initial);
/// assert_eq!(field.to_rows(), vec![vec![1, 2, 0], vec![0, 1, 2]]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpacetimeField {
    width: usize,
    rows: Vec<Configuration>,
}

impl SpacetimeField {
    /// Start a field whose row 0 is `initial`.
    pub fn new(initial: Configuration) -> Self {
        Self {
            width: initial.len(),
            rows: vec![initial],
        }
    }

    /// Append the next row.
    ///
    /// Rejects a row whose length differs from [`width()`](Self::width)
    /// with [`InvalidArgument::RowWidthMismatch`], leaving the field
    /// unchanged.
    pub fn push(&mut self, row: Configuration) -> Result<(), InvalidArgument> {
        self.check_width(&row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Append several rows in order.
    ///
    /// Every row is checked before any is appended, so on error the
    /// field is unchanged.
    pub fn append(&mut self, rows: Vec<Configuration>) -> Result<(), InvalidArgument> {
        for row in &rows {
            self.check_width(row)?;
        }
        self.rows.extend(rows);
        Ok(())
    }

    fn check_width(&self, row: &Configuration) -> Result<(), InvalidArgument> {
        if row.len() == self.width {
            Ok(())
        } else {
            Err(InvalidArgument::RowWidthMismatch {
                expected: self.width,
                actual: row.len(),
            })
        }
    }

    /// Number of cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, including the initial configuration.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always returns `false`: a field holds at least its initial row.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of evolution steps recorded (`len() - 1`).
    pub fn time_steps(&self) -> usize {
        self.rows.len() - 1
    }

    /// Row 0.
    pub fn initial(&self) -> &Configuration {
        &self.rows[0]
    }

    /// The most recent row.
    pub fn last(&self) -> &Configuration {
        &self.rows[self.rows.len() - 1]
    }

    /// The row at time `t`, if recorded.
    pub fn row(&self, t: usize) -> Option<&Configuration> {
        self.rows.get(t)
    }

    /// All rows in time order.
    pub fn rows(&self) -> &[Configuration] {
        &self.rows
    }

    /// Iterate over rows in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Configuration> {
        self.rows.iter()
    }

    /// Rows as nested raw values, ready for an image library.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(Configuration::to_values).collect()
    }

    /// Row-major raw values (`len() * width()` entries).
    pub fn as_flat(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.rows.len() * self.width);
        for row in &self.rows {
            out.extend(row.iter().map(|s| s.value()));
        }
        out
    }

    /// Consume the field, returning its rows.
    pub fn into_rows(self) -> Vec<Configuration> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a SpacetimeField {
    type Item = &'a Configuration;
    type IntoIter = std::slice::Iter<'a, Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// One row per line, oldest first.
impl fmt::Display for SpacetimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (t, row) in self.rows.iter().enumerate() {
            if t > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
