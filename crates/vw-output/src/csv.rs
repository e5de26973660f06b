//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `history.csv`: `tick,action,x,y`
//! - `summary.csv`: `outcome,ticks,dirt_left,steps`

use std::fs::File;
use std::path::Path;

use ::csv::Writer;

use crate::writer::OutputWriter;
use crate::{HistoryRow, OutputResult, SummaryRow};

/// Writes a run's history and summary to two CSV files.
pub struct CsvWriter {
    history:  Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut history = Writer::from_path(dir.join("history.csv"))?;
        history.write_record(["tick", "action", "x", "y"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["outcome", "ticks", "dirt_left", "steps"])?;

        Ok(Self { history, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_record(&mut self, row: &HistoryRow) -> OutputResult<()> {
        self.history.write_record(&[
            row.tick.to_string(),
            row.action.to_owned(),
            row.x.to_string(),
            row.y.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.outcome.to_owned(),
            row.ticks.to_string(),
            row.dirt_left.to_string(),
            row.steps.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
