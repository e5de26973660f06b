//! Agent actions: what a decision policy asks the simulation loop to do.

use std::fmt;

use crate::Position;

/// One tick's worth of agent behavior.
///
/// Policies only ever produce `Suck`, `Move` and `Stay`.  `Nothing` is
/// written by the simulation loop when a `Suck` lands on an already-clean
/// cell, and `Unknown` is a fallback that no shipped policy emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Clean the cell the agent stands on.
    Suck,
    /// Relocate to an adjacent cell.
    Move(Position),
    /// Spend the tick in place.
    Stay,
    /// A clean was attempted on a clean cell.
    Nothing,
    /// Unrecognised proposal.  The loop spends the tick in place.
    Unknown,
}

/// Payload-free discriminant of [`Action`], handy for counting and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Suck,
    Move,
    Stay,
    Nothing,
    Unknown,
}

impl Action {
    #[inline]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Suck => ActionKind::Suck,
            Action::Move(_) => ActionKind::Move,
            Action::Stay => ActionKind::Stay,
            Action::Nothing => ActionKind::Nothing,
            Action::Unknown => ActionKind::Unknown,
        }
    }

    /// Target cell of a `Move`, `None` for every other action.
    #[inline]
    pub fn target(&self) -> Option<Position> {
        match self {
            Action::Move(p) => Some(*p),
            _ => None,
        }
    }
}

impl ActionKind {
    /// Lower-case label used in logs and output files.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Suck => "suck",
            ActionKind::Move => "move",
            ActionKind::Stay => "stay",
            ActionKind::Nothing => "nothing",
            ActionKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(p) => write!(f, "move {p}"),
            other => f.write_str(other.kind().label()),
        }
    }
}
