//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use ac_agent::AgentStatus;
use ac_core::{SimClock, SimConfig, Tick};
use ac_sim::{SimObserver, TickSummary};
use ac_world::OccupancyRow;

use crate::row::{AgentSnapshotRow, NeedValueRow, OccupancySampleRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes snapshots, need values, occupancy and tick
/// summaries to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to label ticks
    /// with the simulated time of day.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self { writer, clock: config.make_clock(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn clock_label(&mut self, tick: Tick) -> String {
        self.clock.current_tick = tick;
        format!("{:02}:{:02}", self.clock.hour(), self.clock.minute())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

fn hex(color: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, s: &TickSummary) {
        let row = TickSummaryRow {
            tick:        s.tick.0,
            day:         s.day,
            hour:        s.hour,
            time_of_day: s.time_of_day.as_str(),
            active:      s.active as u64,
            using:       s.using as u64,
            idle:        s.idle as u64,
            occupied:    s.occupied as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[AgentStatus], occupancy: &[OccupancyRow]) {
        let clock = self.clock_label(tick);

        let snapshots: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|a| AgentSnapshotRow {
                agent_id:         a.id.0,
                name:             a.name.clone(),
                tick:             tick.0,
                clock:            clock.clone(),
                x:                a.position.x,
                y:                a.position.y,
                moving:           a.destination.is_some(),
                action:           a.action.clone(),
                most_urgent_need: a.most_urgent_need.clone(),
                color:            hex(a.color),
            })
            .collect();

        let needs: Vec<NeedValueRow> = agents
            .iter()
            .flat_map(|a| {
                a.needs.iter().map(move |(need, value)| NeedValueRow {
                    agent_id: a.id.0,
                    tick:     tick.0,
                    need:     need.clone(),
                    value:    *value,
                })
            })
            .collect();

        let rooms: Vec<OccupancySampleRow> = occupancy
            .iter()
            .map(|o| OccupancySampleRow {
                tick:      tick.0,
                kind:      o.kind.clone(),
                buildings: o.buildings as u64,
                occupants: o.occupants as u64,
                capacity:  o.capacity,
            })
            .collect();

        if !snapshots.is_empty() {
            let result = self.writer.write_snapshots(&snapshots);
            self.store_err(result);
            let result = self.writer.write_need_values(&needs);
            self.store_err(result);
        }
        if !rooms.is_empty() {
            let result = self.writer.write_occupancy(&rooms);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
