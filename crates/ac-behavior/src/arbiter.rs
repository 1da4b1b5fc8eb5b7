//! Per-agent behavior selection.

use ac_agent::{Action, AgentState};
use ac_world::WorldQuery;

use crate::{
    Behavior, BehaviorContext, BehaviorError, BehaviorResult, NeedBehavior, Usage,
    WanderingBehavior,
};

/// An ordered list of candidate behaviors and at most one active slot.
///
/// Candidate order is significant: it breaks priority ties, so need
/// behaviors go before wandering.
#[derive(Debug, Default)]
pub struct Arbiter {
    behaviors: Vec<Box<dyn Behavior>>,
    active:    Option<usize>,
}

impl Arbiter {
    pub fn new(behaviors: Vec<Box<dyn Behavior>>) -> Self {
        Self { behaviors, active: None }
    }

    /// Rest, eat, socialize, wander.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(NeedBehavior::rest()),
            Box::new(NeedBehavior::eat()),
            Box::new(NeedBehavior::socialize()),
            Box::new(WanderingBehavior::default()),
        ])
    }

    /// Build an arbiter from standard behavior names, in the order given.
    ///
    /// Known names are `rest`, `eat`, `socialize` and `wander`.  An empty list
    /// or a repeated name is a configuration error.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> BehaviorResult<Self> {
        if names.is_empty() {
            return Err(BehaviorError::Config("empty behavior list".into()));
        }
        let mut arbiter = Self::default();
        for name in names {
            let name = name.as_ref();
            if arbiter.behaviors.iter().any(|b| b.name() == name) {
                return Err(BehaviorError::Config(format!("behavior {name:?} listed twice")));
            }
            let behavior: Box<dyn Behavior> = match name {
                "rest"      => Box::new(NeedBehavior::rest()),
                "eat"       => Box::new(NeedBehavior::eat()),
                "socialize" => Box::new(NeedBehavior::socialize()),
                "wander"    => Box::new(WanderingBehavior::default()),
                other       => return Err(BehaviorError::UnknownBehavior(other.to_owned())),
            };
            arbiter.push(behavior);
        }
        Ok(arbiter)
    }

    pub fn push(&mut self, behavior: Box<dyn Behavior>) {
        self.behaviors.push(behavior);
    }

    pub fn behaviors(&self) -> &[Box<dyn Behavior>] {
        &self.behaviors
    }

    /// The behavior in the active slot (installed or running).
    pub fn active(&self) -> Option<&dyn Behavior> {
        self.active.map(|i| self.behaviors[i].as_ref())
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active().map(|b| b.name())
    }

    /// The usage reported by the active behavior.
    pub fn usage(&self) -> Option<Usage<'_>> {
        self.active().and_then(|b| b.usage())
    }

    /// Run one tick of selection or continuation.
    pub fn tick(&mut self, agent: &mut AgentState, ctx: &mut BehaviorContext<'_>) {
        if let Some(i) = self.active {
            let behavior = &mut self.behaviors[i];
            behavior.update(agent, ctx);
            if !behavior.is_active() {
                tracing::trace!(agent = %agent.id, behavior = behavior.name(), "slot cleared");
                self.active = None;
            }
            return;
        }

        let mut best: Option<(usize, f32)> = None;
        for (i, behavior) in self.behaviors.iter().enumerate() {
            if !behavior.should_activate(agent, &mut *ctx.rng) {
                continue;
            }
            let priority = behavior.priority(agent);
            if best.is_none_or(|(_, p)| priority > p) {
                best = Some((i, priority));
            }
        }

        if let Some((i, priority)) = best {
            tracing::trace!(
                agent = %agent.id,
                behavior = self.behaviors[i].name(),
                priority,
                "selected"
            );
            self.active = Some(i);
        }
    }

    /// Stop whatever is active, releasing its reservation.  The agent is
    /// left idle and stationary.
    pub fn interrupt(&mut self, agent: &mut AgentState, world: &mut dyn WorldQuery) {
        if let Some(i) = self.active.take() {
            let behavior = &mut self.behaviors[i];
            tracing::debug!(agent = %agent.id, behavior = behavior.name(), "interrupted");
            behavior.deactivate(agent.id, world);
        }
        agent.clear_destination();
        agent.current_action = Action::Idle;
    }

    /// Number of behaviors whose state is active.  Never more than one.
    pub fn active_count(&self) -> usize {
        self.behaviors.iter().filter(|b| b.is_active()).count()
    }
}
