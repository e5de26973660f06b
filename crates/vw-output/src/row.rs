//! Plain data row types written by output backends.

use vw_core::{Grid, Position};
use vw_sim::{Outcome, Record};

/// One tick of the action history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRow {
    pub tick:   u64,
    /// Lower-case action label (`suck`, `move`, `stay`, `nothing`, `unknown`).
    pub action: &'static str,
    pub x:      i32,
    pub y:      i32,
}

impl From<&Record> for HistoryRow {
    fn from(record: &Record) -> Self {
        let Position { x, y } = record.position;
        Self {
            tick:   record.tick.0,
            action: record.action.kind().label(),
            x,
            y,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    /// `cleaned` or `budget_exhausted`.
    pub outcome:   &'static str,
    /// Ticks executed during the run.
    pub ticks:     u64,
    pub dirt_left: u64,
    /// The grid's step counter at the end of the run.
    pub steps:     u64,
}

impl SummaryRow {
    pub fn new(outcome: &Outcome, grid: &Grid) -> Self {
        Self {
            outcome:   outcome.label(),
            ticks:     outcome.ticks(),
            dirt_left: outcome.dirt_left() as u64,
            steps:     grid.steps().0,
        }
    }
}
