//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, NeedValueRow, OccupancySampleRow, OutputResult, TickSummaryRow};

/// Implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of need values.
    fn write_need_values(&mut self, rows: &[NeedValueRow]) -> OutputResult<()>;

    /// Write one occupancy table.
    fn write_occupancy(&mut self, rows: &[OccupancySampleRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
