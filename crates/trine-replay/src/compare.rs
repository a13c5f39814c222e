//! Cell-exact comparison of two spacetime fields.

use std::fmt;

use trine_core::{SpacetimeField, Symbol};

/// Where a replayed field departs from a recorded one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Divergence {
    /// The fields have different numbers of rows or cells per row.
    Shape {
        /// `(rows, width)` of the recorded field.
        recorded: (usize, usize),
        /// `(rows, width)` of the replayed field.
        replayed: (usize, usize),
    },
    /// The first differing cell, in row-major order.
    Cell {
        /// Time step of the differing row.
        row: usize,
        /// Position within the row.
        column: usize,
        /// Value in the recorded field.
        recorded: Symbol,
        /// Value in the replayed field.
        replayed: Symbol,
    },
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { recorded, replayed } => write!(
                f,
                "shape mismatch: recorded {}x{}, replayed {}x{}",
                recorded.0, recorded.1, replayed.0, replayed.1
            ),
            Self::Cell {
                row,
                column,
                recorded,
                replayed,
            } => write!(
                f,
                "cell ({row}, {column}) diverged: recorded {recorded}, replayed {replayed}"
            ),
        }
    }
}

/// Find the first difference between `recorded` and `replayed`.
///
/// Returns `None` when the fields are identical. Shape is checked
/// before cells.
pub fn first_divergence(
    recorded: &SpacetimeField,
    replayed: &SpacetimeField,
) -> Option<Divergence> {
    let rec_shape = (recorded.len(), recorded.width());
    let rep_shape = (replayed.len(), replayed.width());
    if rec_shape != rep_shape {
        return Some(Divergence::Shape {
            recorded: rec_shape,
            replayed: rep_shape,
        });
    }

    for (row, (a, b)) in recorded.iter().zip(replayed.iter()).enumerate() {
        for (column, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            if x != y {
                return Some(Divergence::Cell {
                    row,
                    column,
                    recorded: x,
                    replayed: y,
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use trine_core::Configuration;

    fn field(rows: &[&str]) -> SpacetimeField {
        let mut iter = rows.iter().map(|r| r.parse::<Configuration>().unwrap());
        let mut f = SpacetimeField::new(iter.next().unwrap());
        for r in iter {
            f.push(r).unwrap();
        }
        f
    }

    #[test]
    fn identical_fields_have_no_divergence() {
        let a = field(&["012", "201"]);
        assert_eq!(first_divergence(&a, &a.clone()), None);
    }

    #[test]
    fn reports_first_cell_in_row_major_order() {
        let a = field(&["012", "201", "000"]);
        let b = field(&["012", "221", "001"]);
        assert_eq!(
            first_divergence(&a, &b),
            Some(Divergence::Cell {
                row: 1,
                column: 1,
                recorded: Symbol::Zero,
                replayed: Symbol::Two,
            })
        );
    }

    #[test]
    fn reports_shape_mismatch() {
        let a = field(&["01", "10"]);
        let b = field(&["01"]);
        let d = first_divergence(&a, &b).unwrap();
        assert_eq!(
            d,
            Divergence::Shape {
                recorded: (2, 2),
                replayed: (1, 2)
            }
        );
        assert_eq!(d.to_string(), "shape mismatch: recorded 2x2, replayed 1x2");
    }
}
