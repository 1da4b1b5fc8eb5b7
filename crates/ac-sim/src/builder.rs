//! Fluent builder for constructing a [`Sim`].

use ac_agent::{AgentState, NeedsSystem};
use ac_behavior::Arbiter;
use ac_core::{AgentId, AgentRng, Position, SimConfig};
use ac_world::World;

use crate::{Agent, Sim, SimError, SimResult};

struct PendingAgent {
    name:     String,
    position: Position,
    needs:    NeedsSystem,
    arbiter:  Option<Arbiter>,
}

/// Fluent builder for [`Sim`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, world)
///     .agent("Alice", Position::new(100.0, 100.0))
///     .agent("Bob",   Position::new(200.0, 200.0))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    world:  World,
    agents: Vec<PendingAgent>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, world: World) -> Self {
        Self { config, world, agents: Vec::new() }
    }

    /// Add an agent with the standard needs and behaviors.  Ids are
    /// assigned in insertion order.
    pub fn agent(self, name: impl Into<String>, position: Position) -> Self {
        self.agent_with_needs(name, position, NeedsSystem::standard())
    }

    pub fn agent_with_needs(
        mut self,
        name:     impl Into<String>,
        position: Position,
        needs:    NeedsSystem,
    ) -> Self {
        self.agents.push(PendingAgent { name: name.into(), position, needs, arbiter: None });
        self
    }

    /// Add an agent driven by a caller-supplied arbiter.
    pub fn agent_with_arbiter(
        mut self,
        name:     impl Into<String>,
        position: Position,
        needs:    NeedsSystem,
        arbiter:  Arbiter,
    ) -> Self {
        self.agents.push(PendingAgent {
            name: name.into(),
            position,
            needs,
            arbiter: Some(arbiter),
        });
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Rejects a bad clock configuration, duplicate agent names and agents
    /// starting outside the world.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let bounds = self.world.bounds();
        let mut agents = Vec::with_capacity(self.agents.len());
        let mut rngs = Vec::with_capacity(self.agents.len());

        for (i, p) in self.agents.into_iter().enumerate() {
            if agents.iter().any(|a: &Agent| a.name() == p.name) {
                return Err(SimError::Config(format!("duplicate agent name {:?}", p.name)));
            }
            if !bounds.contains(p.position) {
                return Err(SimError::Config(format!(
                    "agent {:?} starts outside the world at {}",
                    p.name, p.position
                )));
            }
            let id = AgentId(i as u32);
            let state = AgentState::with_needs(id, p.name, p.position, p.needs);
            agents.push(match p.arbiter {
                Some(arbiter) => Agent::with_arbiter(state, arbiter),
                None => Agent::new(state),
            });
            rngs.push(AgentRng::new(self.config.seed, id));
        }

        tracing::debug!(agents = agents.len(), "simulation built");
        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            world: self.world,
            agents,
            rngs,
        })
    }
}
