//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `need_values.csv`
//! - `occupancy.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, NeedValueRow, OccupancySampleRow, OutputResult, TickSummaryRow};

/// Writes simulation output to four CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    needs:     Writer<File>,
    occupancy: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the four CSV files and write headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record([
            "agent_id", "name", "tick", "clock", "x", "y", "moving", "action",
            "most_urgent_need", "color",
        ])?;

        let mut needs = Writer::from_path(dir.join("need_values.csv"))?;
        needs.write_record(["agent_id", "tick", "need", "value"])?;

        let mut occupancy = Writer::from_path(dir.join("occupancy.csv"))?;
        occupancy.write_record(["tick", "kind", "buildings", "occupants", "capacity"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "day", "hour", "time_of_day", "active", "using", "idle", "occupied",
        ])?;

        tracing::debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { snapshots, needs, occupancy, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.name.clone(),
                row.tick.to_string(),
                row.clock.clone(),
                format!("{:.2}", row.x),
                format!("{:.2}", row.y),
                (row.moving as u8).to_string(),
                row.action.clone(),
                row.most_urgent_need.clone(),
                row.color.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_need_values(&mut self, rows: &[NeedValueRow]) -> OutputResult<()> {
        for row in rows {
            self.needs.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.need.clone(),
                format!("{:.3}", row.value),
            ])?;
        }
        Ok(())
    }

    fn write_occupancy(&mut self, rows: &[OccupancySampleRow]) -> OutputResult<()> {
        for row in rows {
            self.occupancy.write_record(&[
                row.tick.to_string(),
                row.kind.clone(),
                row.buildings.to_string(),
                row.occupants.to_string(),
                row.capacity.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.day.to_string(),
            row.hour.to_string(),
            row.time_of_day.to_owned(),
            row.active.to_string(),
            row.using.to_string(),
            row.idle.to_string(),
            row.occupied.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.needs.flush()?;
        self.occupancy.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
