//! Append-only record of what happened on each tick.

use vw_core::{Action, ActionKind, Position, Tick};

/// One tick of a run.
///
/// `position` is the target cell for a `Move` (even if the move was
/// rejected) and the agent's cell for every other action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Grid step count when the action was taken.
    pub tick:     Tick,
    pub action:   Action,
    pub position: Position,
}

/// Ordered sequence of [`Record`]s, one per simulated tick.
///
/// Only the simulation loop appends; callers get read-only access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// How many ticks took an action of the given kind.
    pub fn count(&self, kind: ActionKind) -> usize {
        self.records.iter().filter(|r| r.action.kind() == kind).count()
    }

    /// `(action, position)` pairs in tick order.
    pub fn pairs(&self) -> impl Iterator<Item = (Action, Position)> + '_ {
        self.records.iter().map(|r| (r.action, r.position))
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
