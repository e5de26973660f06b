//! Simulation time and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one agent
//! decision: a clean, a move, or a wait all cost exactly one tick, and an
//! illegal move still costs one.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick immediately after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration shared by the builder and the tick loop.
///
/// Typically embedded in an application config file and passed to
/// `vw_sim::SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Tick budget.  A run that still has dirt after this many ticks ends as
    /// "budget exhausted"; that is an incomplete run, not an error.
    pub max_steps: u64,

    /// Seed for random dirt placement.  The same seed always produces the
    /// same layout.
    pub seed: u64,

    /// Attach the text renderer.  Has no effect on the simulation outcome.
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { max_steps: 100, seed: 42, verbose: false }
    }
}

impl SimConfig {
    /// The tick at which the budget runs out (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_steps)
    }
}
