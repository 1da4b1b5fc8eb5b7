//! `ac-output`: simulation output writers.
//!
//! | Backend | Files created                                                               |
//! |---------|-----------------------------------------------------------------------------|
//! | CSV     | `agent_snapshots.csv`, `need_values.csv`, `occupancy.csv`, `tick_summaries.csv` |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ac_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ac_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &sim.config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, NeedValueRow, OccupancySampleRow, TickSummaryRow};
pub use writer::OutputWriter;
