//! Buildings: an entrance plus an ordered list of resources.

use std::collections::BTreeSet;

use ac_core::{AgentId, Bounds, Position, ResourceId};

use crate::Resource;

/// A building that groups resources behind a single entrance.
///
/// Resources keep their declaration order; searches are first-fit over that
/// order.
#[derive(Clone, Debug)]
pub struct ResourceDirectory {
    /// Building type name, e.g. `"house"`.
    pub kind:      String,
    pub footprint: Bounds,
    entrance:      Position,
    resources:     Vec<Resource>,
}

impl ResourceDirectory {
    /// An empty building whose entrance is the bottom-centre of `footprint`.
    pub fn new(kind: impl Into<String>, footprint: Bounds) -> Self {
        Self {
            kind: kind.into(),
            footprint,
            entrance: footprint.bottom_center(),
            resources: Vec::new(),
        }
    }

    /// Builder-style [`push`][Self::push].
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.push(resource);
        self
    }

    /// Append a resource and return its id.
    pub fn push(&mut self, resource: Resource) -> ResourceId {
        let id = ResourceId(self.resources.len() as u32);
        self.resources.push(resource);
        id
    }

    #[inline]
    pub fn entrance(&self) -> Position {
        self.entrance
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.get(id.index())
    }

    pub fn resource_mut(&mut self, id: ResourceId) -> Option<&mut Resource> {
        self.resources.get_mut(id.index())
    }

    /// Union of capability names over all resources.
    pub fn available_capabilities(&self) -> BTreeSet<&str> {
        self.resources
            .iter()
            .flat_map(|r| r.capabilities().iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// Cheaper than building the full set when only one name matters.
    pub fn offers(&self, capability: &str) -> bool {
        self.resources.iter().any(|r| r.offers(capability))
    }

    /// First resource (declaration order) that offers `capability` and has
    /// room for `agent`.
    pub fn find_available(&self, capability: &str, agent: AgentId) -> Option<ResourceId> {
        self.resources
            .iter()
            .position(|r| r.offers(capability) && r.can_use(agent))
            .map(|i| ResourceId(i as u32))
    }

    /// Occupants summed over all resources.
    pub fn occupancy(&self) -> usize {
        self.resources.iter().map(Resource::occupancy).sum()
    }

    /// Capacity summed over all resources.
    pub fn capacity(&self) -> u32 {
        self.resources.iter().map(Resource::total_capacity).sum()
    }
}
