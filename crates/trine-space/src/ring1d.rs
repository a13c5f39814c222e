//! 1D ring lattice (always-wrap periodic boundary).

use trine_core::{Neighbourhood, Symbol};

/// A one-dimensional ring of `len` cells.
///
/// Unlike a bounded line, every cell has a left neighbour: index `0`'s
/// left neighbour is `len - 1`. A zero-length ring is allowed; it has
/// no cells and therefore no neighbourhoods.
///
/// # Examples
///
/// ```
/// use trine_space::Ring1D;
///
/// let ring = Ring1D::new(5);
/// assert_eq!(ring.left_of(0), Some(4));
/// assert_eq!(ring.left_of(5), None);
///
/// let pairs: Vec<_> = ring.neighbourhood_indices().collect();
/// assert_eq!(pairs, vec![(4, 0), (0, 1), (1, 2), (2, 3), (3, 4)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ring1D {
    len: usize,
}

impl Ring1D {
    /// Create a ring with `len` cells.
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Number of cells.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the ring has no cells.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the cell to the left of `i`, wrapping at `0`.
    ///
    /// Returns `None` if `i` is not a cell of this ring.
    pub fn left_of(&self, i: usize) -> Option<usize> {
        if i >= self.len {
            return None;
        }
        Some(if i == 0 { self.len - 1 } else { i - 1 })
    }

    /// `(left, centre)` index pairs for every cell, in cell order.
    pub fn neighbourhood_indices(&self) -> impl Iterator<Item = (usize, usize)> {
        let ring = *self;
        (0..ring.len).filter_map(move |i| ring.left_of(i).map(|left| (left, i)))
    }

    /// The [`Neighbourhood`] seen by each cell of `row`, in cell order.
    ///
    /// The ring is sized from `row`, so the wraparound always closes on
    /// the row's own last cell.
    pub fn neighbourhoods(row: &[Symbol]) -> impl Iterator<Item = Neighbourhood> + '_ {
        Ring1D::new(row.len())
            .neighbourhood_indices()
            .map(move |(left, centre)| Neighbourhood::new(row[left], row[centre]))
    }
}
