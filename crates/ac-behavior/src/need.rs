//! Need-driven behaviors: find a building offering a capability, walk to its
//! entrance, then to the reserved resource, and stay until the need recovers.

use ac_agent::{Action, AgentState};
use ac_core::{AgentId, RandomSource};
use ac_world::{ResourceRef, WorldQuery};

use crate::{Behavior, BehaviorContext, BehaviorState, Usage};

/// Need value at which a need behavior considers itself done.
pub const SATISFIED_AT: f32 = 95.0;

/// Bonus added to the priority of a need at or below its critical threshold.
const CRITICAL_BONUS: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Walking to the building entrance.
    Seeking,
    /// Walking to, or standing on, the reserved resource.
    Using,
}

/// Satisfies one need by reserving a resource with a matching capability.
#[derive(Debug)]
pub struct NeedBehavior {
    name:                    String,
    pub need:                String,
    pub capability:          String,
    /// Eligible when the need is at or below this value.
    pub threshold:           f32,
    pub critical_threshold:  f32,
    state:                   BehaviorState,
    phase:                   Phase,
    using:                   Option<ResourceRef>,
}

impl NeedBehavior {
    pub fn new(
        name:               impl Into<String>,
        need:               impl Into<String>,
        capability:         impl Into<String>,
        threshold:          f32,
        critical_threshold: f32,
    ) -> Self {
        Self {
            name: name.into(),
            need: need.into(),
            capability: capability.into(),
            threshold,
            critical_threshold,
            state: BehaviorState::default(),
            phase: Phase::Seeking,
            using: None,
        }
    }

    /// Restores `energy` at a `resting_place` (50 / 20).
    pub fn rest() -> Self {
        Self::new("rest", "energy", "resting_place", 50.0, 20.0)
    }

    /// Restores `hunger` at a `food_source` (60 / 30).
    pub fn eat() -> Self {
        Self::new("eat", "hunger", "food_source", 60.0, 30.0)
    }

    /// Restores `social` at a `social_space` (40 / 20).
    pub fn socialize() -> Self {
        Self::new("socialize", "social", "social_space", 40.0, 20.0)
    }

    /// The resource currently reserved, if any.
    pub fn reservation(&self) -> Option<ResourceRef> {
        self.using
    }

    fn activate(&mut self, agent: &mut AgentState, world: &mut dyn WorldQuery) {
        for dir in world.directory_ids() {
            if !world.available_capabilities(dir).contains(self.capability.as_str()) {
                continue;
            }
            let Some(candidate) = world.find_available(dir, &self.capability, agent.id) else {
                continue;
            };
            let (Some(entrance), Some(spot)) =
                (world.entrance(dir), world.resource_position(candidate))
            else {
                continue;
            };
            if !world.acquire(candidate, agent.id) {
                tracing::trace!(agent = %agent.id, resource = %candidate, "acquire refused");
                continue;
            }

            tracing::debug!(
                agent = %agent.id,
                behavior = %self.name,
                resource = %candidate,
                "reserved resource"
            );
            self.using = Some(candidate);
            self.phase = Phase::Seeking;
            self.state.activate(Some(spot));
            agent.set_destination(entrance);
            agent.current_action = Action::Seeking(self.need.clone());
            return;
        }

        tracing::debug!(
            agent = %agent.id,
            behavior = %self.name,
            capability = %self.capability,
            "no available resource"
        );
        self.state.reset();
    }

    fn finish(&mut self, agent: &mut AgentState, world: &mut dyn WorldQuery) {
        tracing::debug!(agent = %agent.id, behavior = %self.name, "need satisfied");
        self.deactivate(agent.id, world);
        agent.clear_destination();
        agent.current_action = Action::Idle;
    }
}

impl Behavior for NeedBehavior {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_activate(&self, agent: &AgentState, _rng: &mut dyn RandomSource) -> bool {
        agent
            .needs
            .value(&self.need)
            .is_some_and(|v| v <= self.threshold)
    }

    fn priority(&self, agent: &AgentState) -> f32 {
        let Some(current) = agent.needs.value(&self.need) else {
            return 0.0;
        };
        let mut priority = 100.0 - current;
        if current <= self.critical_threshold {
            priority += CRITICAL_BONUS;
        }
        priority
    }

    fn update(&mut self, agent: &mut AgentState, ctx: &mut BehaviorContext<'_>) {
        if !self.state.active {
            self.activate(agent, &mut *ctx.world);
            return;
        }

        self.state.ticks_active += 1;

        if self.phase == Phase::Seeking && !agent.has_destination() {
            if let Some(spot) = self.state.target_position {
                agent.set_destination(spot);
                agent.current_action = Action::Using(self.need.clone());
                self.phase = Phase::Using;
            }
        }

        let satisfied = agent
            .needs
            .value(&self.need)
            .is_none_or(|v| v >= SATISFIED_AT);
        if satisfied {
            self.finish(agent, &mut *ctx.world);
        }
    }

    fn deactivate(&mut self, agent: AgentId, world: &mut dyn WorldQuery) {
        if let Some(r) = self.using.take() {
            world.release(r, agent);
            tracing::debug!(agent = %agent, behavior = %self.name, resource = %r, "released resource");
        }
        self.phase = Phase::Seeking;
        self.state.reset();
    }

    fn state(&self) -> &BehaviorState {
        &self.state
    }

    fn usage(&self) -> Option<Usage<'_>> {
        match (self.phase, self.using) {
            (Phase::Using, Some(resource)) if self.state.active => Some(Usage {
                need: &self.need,
                capability: &self.capability,
                resource,
            }),
            _ => None,
        }
    }
}
