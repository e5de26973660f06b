//! The `OutputWriter` trait implemented by backend writers.

use vw_core::Grid;
use vw_sim::{History, Outcome};

use crate::{HistoryRow, OutputResult, SummaryRow};

/// Trait implemented by output backends.
///
/// When driven by [`OutputObserver`][crate::OutputObserver], errors are
/// stored in the observer and retrieved with
/// [`take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write one history row.
    fn write_record(&mut self, row: &HistoryRow) -> OutputResult<()>;

    /// Write the run summary.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write a completed run in one go: every history row, the summary, then
/// `finish`.
pub fn write_history<W: OutputWriter>(
    writer:  &mut W,
    history: &History,
    outcome: &Outcome,
    grid:    &Grid,
) -> OutputResult<()> {
    for record in history {
        writer.write_record(&HistoryRow::from(record))?;
    }
    writer.write_summary(&SummaryRow::new(outcome, grid))?;
    writer.finish()
}
