//! Utility-based agent: greedy one-step lookahead over neighboring cells.
//!
//! # Scoring
//!
//! For each candidate cell `p` in [`Grid::neighbors`] order (stay first):
//!
//! ```text
//! immediate = time_penalty                  if p == here
//!           = move_cost + time_penalty      otherwise
//! future    = 0                             if the grid is clean
//!           = reward_clean - d(p) * (move_cost + time_penalty)
//! utility   = future - immediate
//! ```
//!
//! where `d(p)` is the Manhattan distance from `p` to the nearest dirt.
//! `future` is optimistic: it assumes a straight walk to the closest dirt and
//! a single cleaning reward.

use tracing::trace;
use vw_core::{Action, Grid, Position};

use crate::{DecisionPolicy, PolicyError, PolicyResult};

// ── UtilityParams ─────────────────────────────────────────────────────────────

/// Tunable weights for [`UtilityAgent`].  All must be finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UtilityParams {
    /// Reward for cleaning one dirty cell.
    pub reward_clean: f64,
    /// Cost of one directional move.
    pub move_cost: f64,
    /// Cost charged every tick, moving or not.
    pub time_penalty: f64,
    /// Cost of a clean action.  Validated and carried but not part of the
    /// scoring formula.
    pub clean_cost: f64,
}

impl Default for UtilityParams {
    fn default() -> Self {
        Self {
            reward_clean: 10.0,
            move_cost:    1.0,
            time_penalty: 0.1,
            clean_cost:   0.2,
        }
    }
}

impl UtilityParams {
    pub fn validate(&self) -> PolicyResult<()> {
        let fields = [
            ("reward_clean", self.reward_clean),
            ("move_cost", self.move_cost),
            ("time_penalty", self.time_penalty),
            ("clean_cost", self.clean_cost),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(PolicyError::Config(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Cost of one tick spent moving.
    #[inline]
    fn step_cost(&self) -> f64 {
        self.move_cost + self.time_penalty
    }
}

// ── UtilityAgent ──────────────────────────────────────────────────────────────

/// Scores every neighboring cell and moves to the best one.
///
/// Ties: the stay candidate only wins with a strictly higher score, and a
/// moving candidate that ties the current best replaces it.  With the fixed
/// neighbor order this makes the choice deterministic.
#[derive(Debug, Clone)]
pub struct UtilityAgent {
    params: UtilityParams,
}

impl UtilityAgent {
    /// Build an agent, rejecting non-positive or non-finite weights.
    pub fn new(params: UtilityParams) -> PolicyResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &UtilityParams {
        &self.params
    }

    /// Score of stepping from `here` to `candidate` on `grid`.
    pub fn utility(&self, grid: &Grid, here: Position, candidate: Position) -> f64 {
        let p = &self.params;
        let immediate = if candidate == here {
            p.time_penalty
        } else {
            p.step_cost()
        };
        let future = match grid.nearest_dirt_distance(candidate) {
            None => 0.0,
            Some(d) => p.reward_clean - f64::from(d) * p.step_cost(),
        };
        future - immediate
    }
}

impl DecisionPolicy for UtilityAgent {
    fn decide(&self, grid: &Grid) -> Action {
        let here = grid.agent();
        if grid.is_dirty(here) {
            return Action::Suck;
        }

        let mut best: Option<(Position, f64)> = None;
        for candidate in grid.neighbors(here) {
            let score = self.utility(grid, here, candidate);
            let take = match best {
                None => true,
                Some((_, best_score)) => {
                    score > best_score || (score == best_score && candidate != here)
                }
            };
            if take {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((cell, score)) if cell != here => {
                trace!(%here, %cell, score, "utility agent moving");
                Action::Move(cell)
            }
            _ => Action::Stay,
        }
    }

    fn name(&self) -> &'static str {
        "utility"
    }
}
