//! The `DecisionPolicy` trait: the extension point for agent behavior.

use vw_core::{Action, Grid};

/// Pluggable agent behavior.
///
/// Called once per tick with a read-only view of the grid (the agent's own
/// cell is [`Grid::agent`]).  Implementations must only propose `Move`
/// targets drawn from [`Grid::neighbors`]; the loop does not re-validate
/// them beyond the grid's own bounds check.
///
/// # Example
///
/// ```rust,ignore
/// struct SuckOnly;
///
/// impl DecisionPolicy for SuckOnly {
///     fn decide(&self, _grid: &Grid) -> Action {
///         Action::Suck
///     }
/// }
/// ```
pub trait DecisionPolicy {
    /// Choose this tick's action.
    fn decide(&self, grid: &Grid) -> Action;

    /// Short name used in logs and run summaries.
    fn name(&self) -> &'static str {
        "policy"
    }
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for Box<P> {
    fn decide(&self, grid: &Grid) -> Action {
        (**self).decide(grid)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
