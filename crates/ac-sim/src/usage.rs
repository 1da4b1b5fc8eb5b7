//! Need restoration from resources agents are standing on.

use ac_world::WorldQuery;

use crate::Agent;

/// How close an agent must be to its reserved resource to be using it.
pub const ARRIVAL_EPSILON: f32 = 0.5;

/// Apply one step of resource use to `agent`.
///
/// Restores `satisfaction_rate * delta_hours` to the need the active
/// behavior is serving, provided the agent has stopped on the reserved
/// resource and still holds it.  Returns the amount restored.
pub fn apply_resource_use(
    agent:       &mut Agent,
    world:       &dyn WorldQuery,
    delta_hours: f32,
) -> Option<f32> {
    if delta_hours <= 0.0 || agent.state.has_destination() {
        return None;
    }
    let usage = agent.arbiter.usage()?;
    if !world.is_occupant(usage.resource, agent.state.id) {
        return None;
    }
    let spot = world.resource_position(usage.resource)?;
    if agent.state.position.distance(spot) > ARRIVAL_EPSILON {
        return None;
    }
    let rate = world.satisfaction_rate(usage.resource, usage.capability)?;
    let amount = rate * delta_hours;
    agent.state.needs.satisfy(usage.need, amount);
    Some(amount)
}
