//! The `Sim` struct and its tick loop.

use ac_agent::AgentStatus;
use ac_core::{AgentId, AgentRng, SimClock, SimConfig, Tick};
use ac_world::{OccupancyRow, World};

use crate::{Agent, SimError, SimObserver, SimResult, TickSummary, apply_resource_use};

/// The main simulation runner.
///
/// Each tick:
///
/// 1. Every agent, in ascending `AgentId` order, decays its needs, runs its
///    arbiter against the world, and moves one step.
/// 2. Every agent standing on the resource its active behavior reserved
///    restores the matching need.
///
/// Agents are updated strictly one after another, so an agent's check for a
/// free slot and its reservation of that slot cannot interleave with another
/// agent's.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,
    pub clock:  SimClock,
    pub world:  World,

    /// Indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// Per-agent deterministic RNGs, parallel to `agents`.
    pub rngs: Vec<AgentRng>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        tracing::info!(
            agents = self.agents.len(),
            buildings = self.world.directories().len(),
            ticks = self.config.total_ticks,
            seed = self.config.seed,
            "simulation start"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.tick_with(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        self.check_invariants()?;
        tracing::info!(final_tick = %self.clock.current_tick, "simulation end");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick_with(observer);
        }
        Ok(())
    }

    /// Advance one tick without an observer.
    pub fn step(&mut self) -> TickSummary {
        let summary = self.process_tick();
        self.clock.advance();
        summary
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    pub fn find_agent(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name() == name)
    }

    /// Abort `id`'s active behavior, releasing its reservation.
    pub fn interrupt(&mut self, id: AgentId) -> SimResult<()> {
        let agent = self
            .agents
            .get_mut(id.index())
            .ok_or(SimError::AgentNotFound(id))?;
        agent.interrupt(&mut self.world);
        Ok(())
    }

    pub fn statuses(&self) -> Vec<AgentStatus> {
        self.agents.iter().map(Agent::status).collect()
    }

    pub fn occupancy(&self) -> Vec<OccupancyRow> {
        self.world.occupancy_report()
    }

    /// Verify the properties the tick loop is meant to preserve.
    ///
    /// * no resource holds more occupants than its summed capacity;
    /// * every occupant is a known agent;
    /// * every need value is within `[0, 100]`;
    /// * no agent has more than one active behavior.
    pub fn check_invariants(&self) -> SimResult<()> {
        if let Some(r) = self.world.over_capacity().first() {
            return Err(SimError::Invariant(format!("resource {r} is over capacity")));
        }
        for (r, resource) in self.world.resources() {
            if let Some(ghost) = resource.occupants().iter().find(|a| a.index() >= self.agents.len()) {
                return Err(SimError::Invariant(format!(
                    "resource {r} held by unknown agent {ghost}"
                )));
            }
        }
        for agent in &self.agents {
            for (name, need) in agent.state.needs.iter() {
                if !(0.0..=100.0).contains(&need.current()) {
                    return Err(SimError::Invariant(format!(
                        "{}: need {name} out of range ({})",
                        agent.name(),
                        need.current()
                    )));
                }
            }
            let active = agent.arbiter.active_count();
            if active > 1 {
                return Err(SimError::Invariant(format!(
                    "{}: {active} behaviors active",
                    agent.name()
                )));
            }
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_with<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick();
        observer.on_tick_end(&summary);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.statuses(), &self.occupancy());
        }
        self.clock.advance();
    }

    fn process_tick(&mut self) -> TickSummary {
        let info = self.clock.tick_info();

        // ── Phase 1: decide and move ──────────────────────────────────────
        for (agent, rng) in self.agents.iter_mut().zip(self.rngs.iter_mut()) {
            agent.update(info, &mut self.world, rng);
        }

        // ── Phase 2: resource use ─────────────────────────────────────────
        let mut using = 0;
        for agent in &mut self.agents {
            if apply_resource_use(agent, &self.world, info.delta_hours).is_some() {
                using += 1;
            }
        }

        TickSummary {
            tick:        info.tick,
            day:         self.clock.day(),
            hour:        self.clock.hour(),
            time_of_day: info.time_of_day,
            active:      self.agents.iter().filter(|a| a.arbiter.active_count() > 0).count(),
            using,
            idle:        self.agents.iter().filter(|a| a.state.current_action.is_idle()).count(),
            occupied:    self.world.resources().map(|(_, r)| r.occupancy()).sum(),
        }
    }

    /// Current tick (the next one to be processed).
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }
}
