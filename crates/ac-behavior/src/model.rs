//! The `Behavior` trait: one candidate activity an agent may pursue.

use std::fmt;

use ac_agent::AgentState;
use ac_core::{AgentId, RandomSource};
use ac_world::{ResourceRef, WorldQuery};

use crate::{BehaviorContext, BehaviorState};

/// A resource an active behavior is currently using to restore a need.
///
/// Reported to the driver, which applies
/// `satisfaction_rate(capability) * delta_hours` to `need` once the agent is
/// standing on the resource.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Usage<'a> {
    pub need:       &'a str,
    pub capability: &'a str,
    pub resource:   ResourceRef,
}

/// One selectable activity.
///
/// The arbiter asks every inactive candidate [`should_activate`] and
/// [`priority`], installs the winner, and from then on calls [`update`] once
/// per tick until the behavior clears its own [`BehaviorState::active`] flag.
///
/// # Activation
///
/// The first `update` after installation runs with `state().active == false`;
/// implementations perform their activation work there (choose a target,
/// reserve a resource) and either set `active` or leave it unset to signal
/// that activation failed.
///
/// # Reservations
///
/// A behavior that acquired a resource must release it on every path that
/// clears `active`, including [`deactivate`] called from outside.
///
/// [`should_activate`]: Self::should_activate
/// [`priority`]: Self::priority
/// [`update`]: Self::update
/// [`deactivate`]: Self::deactivate
pub trait Behavior: fmt::Debug {
    /// Short stable name, used in logs.
    fn name(&self) -> &str;

    /// Eligibility test.  May consume randomness.
    fn should_activate(&self, agent: &AgentState, rng: &mut dyn RandomSource) -> bool;

    /// Score used to choose among eligible behaviors; higher wins.
    fn priority(&self, agent: &AgentState) -> f32;

    /// Advance one tick: activation on the first call, continuation after.
    fn update(&mut self, agent: &mut AgentState, ctx: &mut BehaviorContext<'_>);

    /// Reset to inactive, releasing any reservation held for `agent`.
    fn deactivate(&mut self, agent: AgentId, world: &mut dyn WorldQuery);

    fn state(&self) -> &BehaviorState;

    #[inline]
    fn is_active(&self) -> bool {
        self.state().active
    }

    /// The resource currently being used, if the behavior is in its
    /// using phase.
    fn usage(&self) -> Option<Usage<'_>> {
        None
    }
}
