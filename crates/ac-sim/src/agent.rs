//! An agent: physical state plus the arbiter that drives it.

use ac_agent::{AgentState, AgentStatus};
use ac_behavior::{Arbiter, BehaviorContext};
use ac_core::{AgentId, RandomSource, TickInfo};
use ac_world::WorldQuery;

/// State and decision-making for one simulated person.
///
/// Kept as two fields so the arbiter's behaviors can borrow the state
/// mutably while the arbiter itself is borrowed.
#[derive(Debug)]
pub struct Agent {
    pub state:   AgentState,
    pub arbiter: Arbiter,
}

impl Agent {
    /// An agent with the standard behaviors.
    pub fn new(state: AgentState) -> Self {
        Self::with_arbiter(state, Arbiter::standard())
    }

    pub fn with_arbiter(state: AgentState, arbiter: Arbiter) -> Self {
        Self { state, arbiter }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.state.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.state.name
    }

    /// One tick: decay needs, select or continue a behavior, move.
    pub fn update(
        &mut self,
        tick:  TickInfo,
        world: &mut dyn WorldQuery,
        rng:   &mut dyn RandomSource,
    ) {
        self.state.needs.update(tick.delta_hours);
        let mut ctx = BehaviorContext::new(tick, world, rng);
        self.arbiter.tick(&mut self.state, &mut ctx);
        self.state.advance_movement();
    }

    /// Abort the active behavior and release its reservation.
    pub fn interrupt(&mut self, world: &mut dyn WorldQuery) {
        self.arbiter.interrupt(&mut self.state, world);
    }

    pub fn status(&self) -> AgentStatus {
        self.state.status()
    }
}
