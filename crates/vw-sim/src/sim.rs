//! The `Sim` struct and its tick loop.

use std::fmt;

use tracing::{debug, info, warn};
use vw_core::{Action, Grid, SimConfig, Tick};
use vw_policy::DecisionPolicy;

use crate::{History, Record, SimObserver};

// ── Outcome ───────────────────────────────────────────────────────────────────

/// How a run ended.  Running out of budget is a normal, incomplete run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every dirty cell was cleaned.
    Cleaned { ticks: u64 },
    /// The tick budget ran out with dirt remaining.
    BudgetExhausted { ticks: u64, dirt_left: usize },
}

impl Outcome {
    #[inline]
    pub fn is_cleaned(&self) -> bool {
        matches!(self, Outcome::Cleaned { .. })
    }

    /// Ticks executed during the run.
    #[inline]
    pub fn ticks(&self) -> u64 {
        match *self {
            Outcome::Cleaned { ticks } | Outcome::BudgetExhausted { ticks, .. } => ticks,
        }
    }

    #[inline]
    pub fn dirt_left(&self) -> usize {
        match *self {
            Outcome::Cleaned { .. } => 0,
            Outcome::BudgetExhausted { dirt_left, .. } => dirt_left,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Cleaned { .. } => "cleaned",
            Outcome::BudgetExhausted { .. } => "budget_exhausted",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Cleaned { ticks } => write!(f, "cleaned in {ticks} ticks"),
            Outcome::BudgetExhausted { ticks, dirt_left } => {
                write!(f, "budget of {ticks} ticks exhausted, {dirt_left} dirty cells left")
            }
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner: one grid, one policy, one history.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DecisionPolicy> {
    /// Run configuration (tick budget, seed, verbosity).
    pub config: SimConfig,

    /// The environment.  Mutated only by the tick loop.
    pub grid: Grid,

    /// The active decision policy.
    pub policy: P,

    history: History,
}

impl<P: DecisionPolicy> Sim<P> {
    pub(crate) fn new(config: SimConfig, grid: Grid, policy: P) -> Self {
        Self { config, grid, policy, history: History::default() }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the grid is clean or `config.max_steps` ticks have been
    /// executed in total (ticks taken through [`step`][Self::step] count).
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Outcome {
        while self.ticks_taken() < self.config.end_tick() {
            observer.on_tick_start(self.grid.steps(), &self.grid);
            let Some(record) = self.step() else {
                break;
            };
            observer.on_record(&record, &self.grid);
        }

        let outcome = self.outcome();
        info!(
            policy = self.policy.name(),
            ticks = outcome.ticks(),
            dirt_left = outcome.dirt_left(),
            "run finished: {outcome}"
        );
        observer.on_sim_end(&outcome, &self.grid);
        outcome
    }

    /// Execute exactly one tick, ignoring the budget.
    ///
    /// Returns `None` without consuming a tick when the grid is already
    /// clean.
    pub fn step(&mut self) -> Option<Record> {
        if !self.grid.any_dirt_left() {
            return None;
        }

        let tick = self.grid.steps();
        let here = self.grid.agent();
        let proposed = self.policy.decide(&self.grid);

        let (action, position) = match proposed {
            Action::Suck => {
                let action = if self.grid.is_dirty(here) {
                    self.grid.clean(here);
                    Action::Suck
                } else {
                    Action::Nothing
                };
                self.grid.advance();
                (action, here)
            }
            Action::Move(target) => {
                if !self.grid.in_bounds(target) {
                    // Policies only propose neighbors, so this is a policy bug.
                    warn!(%tick, %here, %target, "move target out of bounds; agent stays put");
                }
                self.grid.move_agent(target);
                (Action::Move(target), target)
            }
            other @ (Action::Stay | Action::Nothing | Action::Unknown) => {
                self.grid.advance();
                (other, here)
            }
        };

        debug!(%tick, %action, %position, dirt_left = self.grid.dirt_count(), "tick");

        let record = Record { tick, action, position };
        self.history.push(record);
        Some(record)
    }

    /// The outcome as of now.
    pub fn outcome(&self) -> Outcome {
        let ticks = self.ticks_taken().0;
        if self.grid.any_dirt_left() {
            Outcome::BudgetExhausted { ticks, dirt_left: self.grid.dirt_count() }
        } else {
            Outcome::Cleaned { ticks }
        }
    }

    /// Ticks executed so far, by `run` or `step`.
    #[inline]
    pub fn ticks_taken(&self) -> Tick {
        Tick(self.history.len() as u64)
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Consume the runner, keeping the final grid and the history.
    pub fn into_parts(self) -> (Grid, History) {
        (self.grid, self.history)
    }
}
