//! `vw-output`: run history writers for the vacuum-world simulator.
//!
//! | Type               | Role                                                   |
//! |--------------------|--------------------------------------------------------|
//! | [`OutputWriter`]   | Backend trait: one call per record, one per run end    |
//! | [`CsvWriter`]      | Writes `history.csv` and `summary.csv`                 |
//! | [`OutputObserver`] | `SimObserver` that streams a run into any writer       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use vw_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```
//!
//! A finished [`History`][vw_sim::History] can also be written in one go
//! with [`write_history`].

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{HistoryRow, SummaryRow};
pub use writer::{OutputWriter, write_history};
