//! The result of a path query.

use vw_core::Position;

/// An ordered sequence of 4-connected cells, `start` first and `goal` last.
///
/// Never empty: a path from a cell to itself holds that one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    pub(crate) fn from_cells(cells: Vec<Position>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves needed to walk the path.
    #[inline]
    pub fn hops(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// The first cell after `start`, or `None` when start is the goal.
    #[inline]
    pub fn next_step(&self) -> Option<Position> {
        self.cells.get(1).copied()
    }

    /// `true` if start and goal are the same cell.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.cells.len() <= 1
    }

    pub fn into_cells(self) -> Vec<Position> {
        self.cells
    }
}
