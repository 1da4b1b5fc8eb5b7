//! Aimless wandering for agents with nothing better to do.

use ac_agent::{Action, AgentState};
use ac_core::{AgentId, RandomSource};
use ac_world::WorldQuery;

use crate::{Behavior, BehaviorContext, BehaviorState};

/// Every need must be at least this high for an agent to wander.
const CONTENT_FLOOR: f32 = 50.0;

/// Walk to a random point, giving up after `max_ticks`.
#[derive(Debug)]
pub struct WanderingBehavior {
    /// Probability of starting to wander on an eligible tick.
    pub chance:        f64,
    pub base_priority: f32,
    pub max_ticks:     u32,
    state:             BehaviorState,
}

impl WanderingBehavior {
    pub fn new(chance: f64, base_priority: f32, max_ticks: u32) -> Self {
        Self { chance, base_priority, max_ticks, state: BehaviorState::default() }
    }

    fn eligible(agent: &AgentState) -> bool {
        agent.current_action.is_idle() && agent.needs.all_at_least(CONTENT_FLOOR)
    }
}

impl Default for WanderingBehavior {
    /// 10 % chance, priority 10, at most 120 ticks.
    fn default() -> Self {
        Self::new(0.1, 10.0, 120)
    }
}

impl Behavior for WanderingBehavior {
    fn name(&self) -> &str {
        "wander"
    }

    fn should_activate(&self, agent: &AgentState, rng: &mut dyn RandomSource) -> bool {
        Self::eligible(agent) && rng.gen_bool(self.chance)
    }

    fn priority(&self, agent: &AgentState) -> f32 {
        if Self::eligible(agent) { self.base_priority } else { 0.0 }
    }

    fn update(&mut self, agent: &mut AgentState, ctx: &mut BehaviorContext<'_>) {
        if !self.state.active {
            let target = ctx.world.random_position(&mut *ctx.rng);
            self.state.activate(Some(target));
            agent.set_destination(target);
            agent.current_action = Action::Wandering;
            tracing::trace!(agent = %agent.id, %target, "wandering");
            return;
        }

        self.state.ticks_active += 1;
        if !agent.has_destination() || self.state.ticks_active > self.max_ticks {
            self.state.reset();
            agent.clear_destination();
            agent.current_action = Action::Idle;
        }
    }

    fn deactivate(&mut self, _agent: AgentId, _world: &mut dyn WorldQuery) {
        self.state.reset();
    }

    fn state(&self) -> &BehaviorState {
        &self.state
    }
}
