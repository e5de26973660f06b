//! The grid environment: bounds, dirt, the agent's cell, and the step count.
//!
//! # Invariants
//!
//! - Every stored position (dirt or agent) satisfies `0 <= x < width` and
//!   `0 <= y < height`.  [`Grid::new`] rejects anything else, `clean` only
//!   removes, and `move_agent` refuses out-of-bounds targets.
//! - The step counter only ever grows.
//!
//! # Neighbor order
//!
//! [`Grid::neighbors`] yields `{self, +x, -x, +y, -y}` filtered to in-bounds
//! cells.  The order is part of the contract: the utility policy breaks
//! ties by it and A* discovers cells in it.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{CoreError, CoreResult, Position, Tick};

/// Unit offsets for the four directional moves, in enumeration order.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A bounded, 4-connected grid with one agent and a set of dirty cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width:  i32,
    height: i32,
    dirt:   FxHashSet<Position>,
    agent:  Position,
    steps:  Tick,
}

impl Grid {
    /// Build a grid, validating dimensions, the agent start, and every dirt
    /// cell.  Duplicate dirt cells collapse into one.
    pub fn new<I>(width: i32, height: i32, dirt: I, agent: Position) -> CoreResult<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        if width <= 0 || height <= 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }

        let mut grid = Self {
            width,
            height,
            dirt: FxHashSet::default(),
            agent,
            steps: Tick::ZERO,
        };

        if !grid.in_bounds(agent) {
            return Err(CoreError::AgentOutOfBounds(agent));
        }
        for cell in dirt {
            if !grid.in_bounds(cell) {
                return Err(CoreError::DirtOutOfBounds(cell));
            }
            grid.dirt.insert(cell);
        }
        Ok(grid)
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The agent's current cell.
    #[inline]
    pub fn agent(&self) -> Position {
        self.agent
    }

    /// Ticks consumed so far.
    #[inline]
    pub fn steps(&self) -> Tick {
        self.steps
    }

    #[inline]
    pub fn dirt_count(&self) -> usize {
        self.dirt.len()
    }

    /// Dirty cells in unspecified order.
    pub fn dirt_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.dirt.iter().copied()
    }

    #[inline]
    pub fn is_dirty(&self, pos: Position) -> bool {
        self.dirt.contains(&pos)
    }

    #[inline]
    pub fn any_dirt_left(&self) -> bool {
        !self.dirt.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Remove `pos` from the dirty set.  Cleaning a clean cell is a no-op.
    ///
    /// Does not advance the step counter; the tick loop accounts for the
    /// tick separately.
    #[inline]
    pub fn clean(&mut self, pos: Position) {
        self.dirt.remove(&pos);
    }

    /// Relocate the agent to `pos` if it is in bounds.
    ///
    /// The step counter advances either way: a rejected move still costs a
    /// tick.
    pub fn move_agent(&mut self, pos: Position) {
        if self.in_bounds(pos) {
            self.agent = pos;
        }
        self.steps = self.steps.next();
    }

    /// Advance the step counter without relocating the agent.
    #[inline]
    pub fn advance(&mut self) {
        self.steps = self.steps.next();
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// In-bounds cells reachable from `pos` in one directional move
    /// (`+x, -x, +y, -y` order).  Excludes `pos` itself.
    pub fn adjacent(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .iter()
            .map(move |&(dx, dy)| pos.offset(dx, dy))
            .filter(|&p| self.in_bounds(p))
    }

    /// `pos` followed by its in-bounds adjacent cells, in `{self, +x, -x,
    /// +y, -y}` order.
    ///
    /// `pos` is included unconditionally; callers only ask about in-bounds
    /// cells.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(5);
        out.push(pos);
        out.extend(self.adjacent(pos));
        out
    }

    /// Minimum Manhattan distance from `pos` to any dirty cell, or `None`
    /// when the grid is clean.
    pub fn nearest_dirt_distance(&self, pos: Position) -> Option<u32> {
        self.dirt.iter().map(|&d| pos.manhattan(d)).min()
    }

    /// The dirty cell closest to `pos` by Manhattan distance.
    ///
    /// Ties go to the smallest `(x, y)`, i.e. the first hit of a column-major
    /// scan, so the answer never depends on hash-set iteration order.
    pub fn nearest_dirt(&self, pos: Position) -> Option<Position> {
        self.dirt
            .iter()
            .copied()
            .min_by_key(|&d| (pos.manhattan(d), d.x, d.y))
    }
}

impl fmt::Display for Grid {
    /// Row `y = 0` first; `A` agent, `*` dirt, `.` clean.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Position::new(x, y);
                let glyph = if p == self.agent {
                    'A'
                } else if self.is_dirty(p) {
                    '*'
                } else {
                    '.'
                };
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Steps: {}  Dirt remaining: {}", self.steps.0, self.dirt.len())
    }
}
