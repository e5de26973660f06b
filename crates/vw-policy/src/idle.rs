//! A policy that never acts.

use vw_core::{Action, Grid};

use crate::DecisionPolicy;

/// A [`DecisionPolicy`] that always returns [`Action::Stay`].
///
/// Useful as a baseline in tests: a run with this policy burns its whole
/// budget unless the grid starts clean.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePolicy;

impl DecisionPolicy for IdlePolicy {
    fn decide(&self, _grid: &Grid) -> Action {
        Action::Stay
    }

    fn name(&self) -> &'static str {
        "idle"
    }
}
