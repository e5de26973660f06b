//! Pathfinder trait and the default A* implementation.
//!
//! # Pluggability
//!
//! Decision policies call search through the [`Pathfinder`] trait, so a
//! grid with obstacles or weighted cells can plug in its own search without
//! touching the goal-seeking policy.
//!
//! # Cost model
//!
//! Every directional move costs 1.  Dirt does not affect traversal.  The
//! heuristic is Manhattan distance, which is admissible and consistent on a
//! 4-connected grid, so the first time the goal is popped its path is
//! optimal.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::trace;
use vw_core::{Grid, Position};

use crate::Path;

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path search over a grid snapshot.
pub trait Pathfinder {
    /// Shortest 4-connected path from `start` to `goal`, both endpoints
    /// included.
    ///
    /// Returns `None` when either endpoint is out of bounds or the frontier
    /// empties without reaching `goal`.
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Option<Path>;
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// A* with a Manhattan heuristic and deterministic tie-breaking.
///
/// Frontier entries are ordered by `(f, seq)` where `seq` is a discovery
/// counter, so among equal `f` the earliest-discovered cell is expanded
/// first.  Cells are discovered in [`Grid::adjacent`] order, which makes the
/// returned path a pure function of the inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Pathfinder for AStar {
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Option<Path> {
        astar(grid, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Best known cost to a cell and the cell it was reached from.
struct PathNode {
    g:    u32,
    prev: Option<Position>,
}

fn astar(grid: &Grid, start: Position, goal: Position) -> Option<Path> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return None;
    }
    if start == goal {
        return Some(Path::from_cells(vec![start]));
    }

    let mut nodes: FxHashMap<Position, PathNode> = FxHashMap::default();
    nodes.insert(start, PathNode { g: 0, prev: None });

    // Min-heap on (f, seq).  Reverse makes BinaryHeap (max) behave as min-heap.
    // The cell itself rides along but never takes part in ordering because
    // seq is unique.
    let mut heap: BinaryHeap<Reverse<(u32, u64, Position)>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    heap.push(Reverse((start.manhattan(goal), seq, start)));

    let mut expanded = 0usize;
    while let Some(Reverse((f, _, current))) = heap.pop() {
        if current == goal {
            trace!(%start, %goal, expanded, "a* reached goal");
            return Some(reconstruct(&nodes, goal));
        }

        let g = nodes.get(&current).map_or(u32::MAX, |n| n.g);

        // Skip stale heap entries.
        if f > g.saturating_add(current.manhattan(goal)) {
            continue;
        }
        expanded += 1;

        let tentative = g + 1;
        for next in grid.adjacent(current) {
            let improves = nodes.get(&next).is_none_or(|n| tentative < n.g);
            if improves {
                nodes.insert(next, PathNode { g: tentative, prev: Some(current) });
                seq += 1;
                heap.push(Reverse((tentative + next.manhattan(goal), seq, next)));
            }
        }
    }

    trace!(%start, %goal, expanded, "a* frontier exhausted");
    None
}

fn reconstruct(nodes: &FxHashMap<Position, PathNode>, goal: Position) -> Path {
    let mut cells = vec![goal];
    let mut cur = goal;
    while let Some(prev) = nodes.get(&cur).and_then(|n| n.prev) {
        cells.push(prev);
        cur = prev;
    }
    cells.reverse();
    Path::from_cells(cells)
}
