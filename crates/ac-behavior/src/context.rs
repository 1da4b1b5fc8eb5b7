//! Everything outside the agent that a behavior update may touch.

use ac_core::{RandomSource, TickInfo};
use ac_world::WorldQuery;

/// Borrowed view of the outside world for one agent's update.
///
/// Built by the driver per agent per tick.  The world borrow is mutable
/// because behaviors acquire and release reservations; agents are updated
/// one at a time so no other agent observes a half-applied change.
pub struct BehaviorContext<'a> {
    pub tick:  TickInfo,
    pub world: &'a mut dyn WorldQuery,
    pub rng:   &'a mut dyn RandomSource,
}

impl<'a> BehaviorContext<'a> {
    #[inline]
    pub fn new(
        tick:  TickInfo,
        world: &'a mut dyn WorldQuery,
        rng:   &'a mut dyn RandomSource,
    ) -> Self {
        Self { tick, world, rng }
    }
}
