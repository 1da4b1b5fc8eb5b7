//! Capacity-limited world objects and the acquire/release protocol.

use ac_core::{AgentId, Position};

use crate::Capability;

/// An object placed inside a building (bed, kitchen, bench, …).
///
/// # Invariant
///
/// `occupants().len() <= total_capacity()` at all times.  The only method
/// that grows the occupant list is [`acquire`][Self::acquire], which checks
/// [`can_use`][Self::can_use] first.
#[derive(Clone, Debug)]
pub struct Resource {
    /// Object type name from the catalog, e.g. `"table"`.
    pub kind:         String,
    pub position:     Position,
    capabilities:     Vec<Capability>,
    occupants:        Vec<AgentId>,
}

impl Resource {
    pub fn new(kind: impl Into<String>, position: Position, capabilities: Vec<Capability>) -> Self {
        Self {
            kind: kind.into(),
            position,
            capabilities,
            occupants: Vec::new(),
        }
    }

    /// Capabilities fixed at construction.
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Sum of capacities over every capability this object offers.
    ///
    /// Overlapping capabilities are counted separately: a table with four
    /// diner seats and four social seats admits eight occupants.
    pub fn total_capacity(&self) -> u32 {
        self.capabilities.iter().map(|c| c.capacity).sum()
    }

    /// `true` if any capability is named `name`.
    pub fn offers(&self, name: &str) -> bool {
        self.capabilities.iter().any(|c| c.name == name)
    }

    /// The first capability named `name`.
    pub fn capability(&self, name: &str) -> Option<&Capability> {
        self.capabilities.iter().find(|c| c.name == name)
    }

    /// Agents currently using the object, in acquisition order.
    pub fn occupants(&self) -> &[AgentId] {
        &self.occupants
    }

    #[inline]
    pub fn occupancy(&self) -> usize {
        self.occupants.len()
    }

    #[inline]
    pub fn is_occupied_by(&self, agent: AgentId) -> bool {
        self.occupants.contains(&agent)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupants.len() >= self.total_capacity() as usize
    }

    /// `true` if `agent` already occupies the object or a slot is free.
    pub fn can_use(&self, agent: AgentId) -> bool {
        self.is_occupied_by(agent) || !self.is_full()
    }

    /// Reserve a slot for `agent`.
    ///
    /// Returns `true` only if a new slot was taken.  Re-acquiring by an
    /// existing occupant returns `false` and leaves occupancy unchanged.
    pub fn acquire(&mut self, agent: AgentId) -> bool {
        if self.can_use(agent) && !self.is_occupied_by(agent) {
            self.occupants.push(agent);
            true
        } else {
            false
        }
    }

    /// Give up `agent`'s slot.  Releasing a slot that is not held is a no-op.
    pub fn release(&mut self, agent: AgentId) {
        if let Some(i) = self.occupants.iter().position(|&a| a == agent) {
            self.occupants.remove(i);
        }
    }
}
