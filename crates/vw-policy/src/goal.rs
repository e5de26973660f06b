//! Goal-based agent: clean here, otherwise head for the nearest dirt.

use tracing::trace;
use vw_core::{Action, Grid};
use vw_search::{AStar, Pathfinder};

use crate::DecisionPolicy;

/// Walks toward the closest dirty cell one hop per tick.
///
/// Per tick:
///
/// 1. Standing on dirt → `Suck`.
/// 2. Otherwise pick the nearest dirty cell by raw Manhattan distance
///    ([`Grid::nearest_dirt`]), ask the pathfinder for a route, and move to
///    the route's first step.
/// 3. No dirt, or no route → `Stay`.
///
/// The route is recomputed every tick, so the agent holds no plan between
/// decisions.
#[derive(Debug, Clone, Default)]
pub struct GoalAgent<F: Pathfinder = AStar> {
    pathfinder: F,
}

impl GoalAgent<AStar> {
    pub fn new() -> Self {
        Self { pathfinder: AStar }
    }
}

impl<F: Pathfinder> GoalAgent<F> {
    /// Use a custom search instead of the default A*.
    pub fn with_pathfinder(pathfinder: F) -> Self {
        Self { pathfinder }
    }
}

impl<F: Pathfinder> DecisionPolicy for GoalAgent<F> {
    fn decide(&self, grid: &Grid) -> Action {
        let here = grid.agent();
        if grid.is_dirty(here) {
            return Action::Suck;
        }

        let Some(target) = grid.nearest_dirt(here) else {
            return Action::Stay;
        };

        match self
            .pathfinder
            .find_path(grid, here, target)
            .and_then(|path| path.next_step())
        {
            Some(next) => {
                trace!(%here, %target, %next, "goal agent stepping");
                Action::Move(next)
            }
            None => Action::Stay,
        }
    }

    fn name(&self) -> &'static str {
        "goal"
    }
}
