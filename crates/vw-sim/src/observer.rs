//! Simulation observer trait for progress reporting and data collection.

use std::io::{self, Write};

use vw_core::{Action, Grid, Tick};

use crate::{Outcome, Record};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called before the policy decides, with the grid as the policy sees it.
    /// Also called once more when the loop is about to stop on a clean grid.
    fn on_tick_start(&mut self, _tick: Tick, _grid: &Grid) {}

    /// Called after an action has been applied and recorded.
    fn on_record(&mut self, _record: &Record, _grid: &Grid) {}

    /// Called once after the loop ends.
    fn on_sim_end(&mut self, _outcome: &Outcome, _grid: &Grid) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// `None` observes nothing.  Lets a verbosity flag switch an observer off
/// without changing the observer's type.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_tick_start(&mut self, tick: Tick, grid: &Grid) {
        if let Some(o) = self {
            o.on_tick_start(tick, grid);
        }
    }

    fn on_record(&mut self, record: &Record, grid: &Grid) {
        if let Some(o) = self {
            o.on_record(record, grid);
        }
    }

    fn on_sim_end(&mut self, outcome: &Outcome, grid: &Grid) {
        if let Some(o) = self {
            o.on_sim_end(outcome, grid);
        }
    }
}

// ── RenderObserver ────────────────────────────────────────────────────────────

/// Writes a picture of the grid before every tick and one line of narration
/// after it.
///
/// Write errors are stored because `SimObserver` methods have no return
/// value.  After `sim.run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct RenderObserver<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl<W: Write> RenderObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for RenderObserver<W> {
    fn on_tick_start(&mut self, tick: Tick, grid: &Grid) {
        let result = writeln!(self.out, "=== Step {} ===\n{grid}", tick.0);
        self.store_err(result);
    }

    fn on_record(&mut self, record: &Record, _grid: &Grid) {
        let result = match record.action {
            Action::Suck => writeln!(self.out, "Agent cleans at {}", record.position),
            Action::Move(target) => writeln!(self.out, "Agent moves to {target}"),
            Action::Stay => writeln!(self.out, "Agent stays."),
            Action::Nothing => {
                writeln!(self.out, "Agent tried to clean but tile was already clean.")
            }
            Action::Unknown => writeln!(self.out, "Agent did something unrecognised."),
        };
        self.store_err(result);
    }

    fn on_sim_end(&mut self, outcome: &Outcome, _grid: &Grid) {
        let result = match outcome {
            Outcome::Cleaned { .. } => writeln!(self.out, "All clean! Done."),
            Outcome::BudgetExhausted { dirt_left, .. } => {
                writeln!(self.out, "Step budget exhausted with {dirt_left} dirty cells left.")
            }
        }
        .and_then(|()| self.out.flush());
        self.store_err(result);
    }
}
