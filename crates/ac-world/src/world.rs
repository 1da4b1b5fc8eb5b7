//! The world: every building, the map bounds, and a spatial index.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over building footprints answers "which building
//! is this agent standing in".  The world is small, but the index keeps the
//! post-movement interaction check independent of building count.

use std::collections::{BTreeMap, BTreeSet};

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use ac_core::{AgentId, Bounds, DirectoryId, Position, RandomSource};

use crate::{
    Catalog, Resource, ResourceDirectory, ResourceRef, WorldError, WorldQuery, WorldResult,
};

// ── R-tree footprint entry ────────────────────────────────────────────────────

#[derive(Clone)]
struct FootprintEntry {
    bounds: Bounds,
    id:     DirectoryId,
}

impl RTreeObject for FootprintEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.x, self.bounds.y],
            [self.bounds.right(), self.bounds.bottom()],
        )
    }
}

impl PointDistance for FootprintEntry {
    /// Squared distance from `point` to the rectangle (zero inside).
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let b = &self.bounds;
        let dx = (b.x - point[0]).max(0.0).max(point[0] - b.right());
        let dy = (b.y - point[1]).max(0.0).max(point[1] - b.bottom());
        dx * dx + dy * dy
    }

    fn contains_point(&self, point: &[f32; 2]) -> bool {
        self.bounds.contains(Position::new(point[0], point[1]))
    }
}

// ── OccupancyRow ─────────────────────────────────────────────────────────────

/// Occupancy aggregated over every building of one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyRow {
    pub kind:      String,
    pub buildings: usize,
    pub occupants: usize,
    pub capacity:  u32,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// All buildings in a run.  Implements [`WorldQuery`] for the behaviors.
///
/// Directory order is fixed at construction and is the order capability
/// searches walk.  Do not construct directly; use [`WorldBuilder`].
pub struct World {
    bounds:      Bounds,
    directories: Vec<ResourceDirectory>,
    footprints:  RTree<FootprintEntry>,
}

impl World {
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn directories(&self) -> &[ResourceDirectory] {
        &self.directories
    }

    pub fn directory(&self, id: DirectoryId) -> Option<&ResourceDirectory> {
        self.directories.get(id.index())
    }

    pub fn directory_mut(&mut self, id: DirectoryId) -> Option<&mut ResourceDirectory> {
        self.directories.get_mut(id.index())
    }

    pub fn resource(&self, r: ResourceRef) -> Option<&Resource> {
        self.directory(r.directory)?.resource(r.resource)
    }

    pub fn resource_mut(&mut self, r: ResourceRef) -> Option<&mut Resource> {
        self.directory_mut(r.directory)?.resource_mut(r.resource)
    }

    /// Every resource with its address, in search order.
    pub fn resources(&self) -> impl Iterator<Item = (ResourceRef, &Resource)> + '_ {
        self.directories.iter().enumerate().flat_map(|(d, dir)| {
            dir.resources().iter().enumerate().map(move |(r, res)| {
                (
                    ResourceRef::new(DirectoryId(d as u32), ac_core::ResourceId(r as u32)),
                    res,
                )
            })
        })
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The building whose footprint contains `pos`.  With overlapping
    /// footprints the lowest id wins.
    pub fn directory_at(&self, pos: Position) -> Option<DirectoryId> {
        self.footprints
            .locate_all_at_point(&pos.as_array())
            .map(|e| e.id)
            .min()
    }

    /// The building of type `kind` whose entrance is closest to `pos`.
    pub fn nearest_of_kind(&self, pos: Position, kind: &str) -> Option<DirectoryId> {
        self.directories
            .iter()
            .enumerate()
            .filter(|(_, d)| d.kind == kind)
            .min_by(|(_, a), (_, b)| {
                pos.distance_2(a.entrance())
                    .total_cmp(&pos.distance_2(b.entrance()))
            })
            .map(|(i, _)| DirectoryId(i as u32))
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Distinct building type names present, sorted.
    pub fn building_kinds(&self) -> Vec<&str> {
        self.directories
            .iter()
            .map(|d| d.kind.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of buildings per type.
    pub fn building_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for d in &self.directories {
            *counts.entry(d.kind.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Occupants and capacity per building type, sorted by type name.
    pub fn occupancy_report(&self) -> Vec<OccupancyRow> {
        let mut rows: BTreeMap<&str, OccupancyRow> = BTreeMap::new();
        for d in &self.directories {
            let row = rows.entry(d.kind.as_str()).or_insert_with(|| OccupancyRow {
                kind:      d.kind.clone(),
                buildings: 0,
                occupants: 0,
                capacity:  0,
            });
            row.buildings += 1;
            row.occupants += d.occupancy();
            row.capacity += d.capacity();
        }
        rows.into_values().collect()
    }

    /// Resources holding more occupants than their capacity.  Always empty
    /// unless the contention protocol was bypassed.
    pub fn over_capacity(&self) -> Vec<ResourceRef> {
        self.resources()
            .filter(|(_, r)| r.occupancy() > r.total_capacity() as usize)
            .map(|(id, _)| id)
            .collect()
    }

    /// Drop `agent` from every occupant list.
    pub fn release_all(&mut self, agent: AgentId) {
        for d in &mut self.directories {
            for i in 0..d.resources().len() {
                if let Some(r) = d.resource_mut(ac_core::ResourceId(i as u32)) {
                    r.release(agent);
                }
            }
        }
    }
}

impl WorldQuery for World {
    fn directory_ids(&self) -> Vec<DirectoryId> {
        (0..self.directories.len() as u32).map(DirectoryId).collect()
    }

    fn available_capabilities(&self, dir: DirectoryId) -> BTreeSet<&str> {
        self.directory(dir)
            .map(ResourceDirectory::available_capabilities)
            .unwrap_or_default()
    }

    fn find_available(
        &self,
        dir:        DirectoryId,
        capability: &str,
        agent:      AgentId,
    ) -> Option<ResourceRef> {
        self.directory(dir)?
            .find_available(capability, agent)
            .map(|r| ResourceRef::new(dir, r))
    }

    fn entrance(&self, dir: DirectoryId) -> Option<Position> {
        self.directory(dir).map(ResourceDirectory::entrance)
    }

    fn resource_position(&self, resource: ResourceRef) -> Option<Position> {
        self.resource(resource).map(|r| r.position)
    }

    fn satisfaction_rate(&self, resource: ResourceRef, capability: &str) -> Option<f32> {
        self.resource(resource)?
            .capability(capability)
            .map(|c| c.satisfaction_rate)
    }

    fn is_occupant(&self, resource: ResourceRef, agent: AgentId) -> bool {
        self.resource(resource)
            .is_some_and(|r| r.is_occupied_by(agent))
    }

    fn acquire(&mut self, resource: ResourceRef, agent: AgentId) -> bool {
        match self.resource_mut(resource) {
            Some(r) => {
                let taken = r.acquire(agent);
                if !taken {
                    tracing::trace!(%agent, %resource, "acquire refused");
                }
                taken
            }
            None => false,
        }
    }

    fn release(&mut self, resource: ResourceRef, agent: AgentId) {
        if let Some(r) = self.resource_mut(resource) {
            r.release(agent);
        }
    }

    /// Uniform over the inner 80 % of the map, keeping wanderers off the edges.
    fn random_position(&self, rng: &mut dyn RandomSource) -> Position {
        let b = self.bounds;
        let x = rng.gen_range_f32(b.x + b.width * 0.1, b.x + b.width * 0.9);
        let y = rng.gen_range_f32(b.y + b.height * 0.1, b.y + b.height * 0.9);
        Position::new(x, y)
    }
}

// ── WorldBuilder ──────────────────────────────────────────────────────────────

/// Incrementally assembles a [`World`].
///
/// Buildings keep the order they were added in; that order is the search
/// order for every capability lookup.
pub struct WorldBuilder {
    bounds:      Bounds,
    directories: Vec<ResourceDirectory>,
}

impl WorldBuilder {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            directories: Vec::new(),
        }
    }

    /// Add a hand-built directory.
    pub fn add_directory(&mut self, directory: ResourceDirectory) -> DirectoryId {
        let id = DirectoryId(self.directories.len() as u32);
        self.directories.push(directory);
        id
    }

    /// Add a building of catalog type `kind`, placing its default objects at
    /// random positions inside `footprint`.
    pub fn add_building(
        &mut self,
        kind:      &str,
        footprint: Bounds,
        catalog:   &Catalog,
        rng:       &mut dyn RandomSource,
    ) -> WorldResult<DirectoryId> {
        let directory = catalog.instantiate(kind, footprint, rng)?;
        Ok(self.add_directory(directory))
    }

    /// Validate and index.
    ///
    /// Rejects buildings outside the map and capabilities with zero capacity.
    pub fn build(self) -> WorldResult<World> {
        for d in &self.directories {
            let f = d.footprint;
            let inside = f.x >= self.bounds.x
                && f.y >= self.bounds.y
                && f.right() <= self.bounds.right()
                && f.bottom() <= self.bounds.bottom();
            if !inside {
                return Err(WorldError::OutOfBounds { kind: d.kind.clone() });
            }
            for r in d.resources() {
                if let Some(c) = r.capabilities().iter().find(|c| c.capacity == 0) {
                    return Err(WorldError::ZeroCapacity {
                        object:     r.kind.clone(),
                        capability: c.name.clone(),
                    });
                }
            }
        }

        let entries = self
            .directories
            .iter()
            .enumerate()
            .map(|(i, d)| FootprintEntry {
                bounds: d.footprint,
                id:     DirectoryId(i as u32),
            })
            .collect();

        tracing::debug!(
            buildings = self.directories.len(),
            resources = self.directories.iter().map(|d| d.resources().len()).sum::<usize>(),
            "world built"
        );

        Ok(World {
            bounds:      self.bounds,
            directories: self.directories,
            footprints:  RTree::bulk_load(entries),
        })
    }
}
