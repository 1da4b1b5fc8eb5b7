//! Simulation observer trait for progress reporting and data collection.

use ac_agent::AgentStatus;
use ac_core::{Tick, TimeOfDay};
use ac_world::OccupancyRow;

/// Aggregate counts for one completed tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSummary {
    pub tick:        Tick,
    pub day:         u64,
    pub hour:        u32,
    pub time_of_day: TimeOfDay,
    /// Agents whose active behavior has completed activation.
    pub active:      usize,
    /// Agents standing on a reserved resource and restoring a need.
    pub using:       usize,
    /// Agents with the `idle` action.
    pub idle:        usize,
    /// Occupied resource slots across the world.
    pub occupied:    usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: hourly progress
///
/// ```rust,ignore
/// struct Hourly;
///
/// impl SimObserver for Hourly {
///     fn on_tick_end(&mut self, s: &TickSummary) {
///         if s.tick.0 % 60 == 0 {
///             tracing::info!(day = s.day, hour = s.hour, idle = s.idle, "progress");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with every agent's status and the per-kind occupancy table.
    fn on_snapshot(
        &mut self,
        _tick:      Tick,
        _agents:    &[AgentStatus],
        _occupancy: &[OccupancyRow],
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Fans every callback out to two observers in order.
pub struct Both<A, B>(pub A, pub B);

impl<A: SimObserver, B: SimObserver> SimObserver for Both<A, B> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.0.on_tick_end(summary);
        self.1.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[AgentStatus], occupancy: &[OccupancyRow]) {
        self.0.on_snapshot(tick, agents, occupancy);
        self.1.on_snapshot(tick, agents, occupancy);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
