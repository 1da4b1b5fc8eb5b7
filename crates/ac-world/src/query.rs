//! The world surface behaviors are allowed to see.

use std::collections::BTreeSet;

use ac_core::{AgentId, DirectoryId, Position, RandomSource, ResourceId};

/// Stable address of one resource: the owning building plus the index within
/// it.  Held by behaviors instead of a reference so a reservation never
/// borrows the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceRef {
    pub directory: DirectoryId,
    pub resource:  ResourceId,
}

impl ResourceRef {
    #[inline]
    pub fn new(directory: DirectoryId, resource: ResourceId) -> Self {
        Self { directory, resource }
    }
}

impl std::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.directory.0, self.resource.0)
    }
}

/// Lookup and reservation operations behaviors need from the world.
///
/// Passed explicitly into every behavior update as `&mut dyn WorldQuery` so
/// agents hold no back-pointer to the world and can be exercised against a
/// stub.  Everything is read-only except [`acquire`][Self::acquire] and
/// [`release`][Self::release].
///
/// Lookups on unknown ids return `None` / `false`; they never panic.
pub trait WorldQuery {
    /// Every building, in the fixed order searches walk them.
    fn directory_ids(&self) -> Vec<DirectoryId>;

    /// Capability names offered anywhere in `dir`.
    fn available_capabilities(&self, dir: DirectoryId) -> BTreeSet<&str>;

    /// First-fit resource in `dir` offering `capability` with room for `agent`.
    fn find_available(
        &self,
        dir:        DirectoryId,
        capability: &str,
        agent:      AgentId,
    ) -> Option<ResourceRef>;

    fn entrance(&self, dir: DirectoryId) -> Option<Position>;

    fn resource_position(&self, resource: ResourceRef) -> Option<Position>;

    /// Points per hour restored by `capability` on `resource`.
    fn satisfaction_rate(&self, resource: ResourceRef, capability: &str) -> Option<f32>;

    /// `true` if `agent` is listed as an occupant of `resource`.
    fn is_occupant(&self, resource: ResourceRef, agent: AgentId) -> bool;

    /// Reserve a slot.  See [`Resource::acquire`][crate::Resource::acquire].
    fn acquire(&mut self, resource: ResourceRef, agent: AgentId) -> bool;

    /// Release a slot; a no-op if not held.
    fn release(&mut self, resource: ResourceRef, agent: AgentId);

    /// A uniformly random position for aimless wandering.
    fn random_position(&self, rng: &mut dyn RandomSource) -> Position;
}
