//! `OutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use vw_core::Grid;
use vw_sim::{Outcome, Record, SimObserver};

use crate::writer::OutputWriter;
use crate::{HistoryRow, OutputError, OutputResult, SummaryRow};

/// A [`SimObserver`] that streams every record and the final summary to an
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for OutputObserver<W> {
    fn on_record(&mut self, record: &Record, _grid: &Grid) {
        let result = self.writer.write_record(&HistoryRow::from(record));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, outcome: &Outcome, grid: &Grid) {
        let result = self
            .writer
            .write_summary(&SummaryRow::new(outcome, grid))
            .and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
