//! Object and building type tables.
//!
//! The standard catalog:
//!
//! | Object    | Capabilities (capacity / points per hour)              |
//! |-----------|--------------------------------------------------------|
//! | `bed`     | resting_place 1 / 20                                   |
//! | `kitchen` | food_source 2 / 40                                     |
//! | `table`   | food_source 4 / 40, social_space 4 / 15                |
//! | `bench`   | social_space 2 / 15, resting_place 2 / 5               |
//! | `trail`   | social_space 10 / 10                                   |
//!
//! | Building     | Default objects              |
//! |--------------|------------------------------|
//! | `house`      | bed, kitchen                 |
//! | `restaurant` | table, table, kitchen        |
//! | `park`       | bench, bench, trail          |

use std::collections::BTreeMap;

use ac_core::{Bounds, Position, RandomSource};

use crate::{Capability, Resource, ResourceDirectory, WorldError, WorldResult};

/// Distance kept between placed objects and the footprint edge.
pub const OBJECT_MARGIN: f32 = 10.0;

/// Object types (capability lists) and building types (object lists).
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Catalog {
    pub objects:   BTreeMap<String, Vec<Capability>>,
    pub buildings: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    /// The reference town's objects and buildings.
    pub fn standard() -> Self {
        let mut objects = BTreeMap::new();
        objects.insert("bed".to_owned(), vec![Capability::new("resting_place", 1, 20.0)]);
        objects.insert("kitchen".to_owned(), vec![Capability::new("food_source", 2, 40.0)]);
        objects.insert(
            "table".to_owned(),
            vec![
                Capability::new("food_source", 4, 40.0),
                Capability::new("social_space", 4, 15.0),
            ],
        );
        objects.insert(
            "bench".to_owned(),
            vec![
                Capability::new("social_space", 2, 15.0),
                Capability::new("resting_place", 2, 5.0),
            ],
        );
        objects.insert("trail".to_owned(), vec![Capability::new("social_space", 10, 10.0)]);

        let mut buildings = BTreeMap::new();
        buildings.insert("house".to_owned(), names(&["bed", "kitchen"]));
        buildings.insert("restaurant".to_owned(), names(&["table", "table", "kitchen"]));
        buildings.insert("park".to_owned(), names(&["bench", "bench", "trail"]));

        Self { objects, buildings }
    }

    /// Layer `other` on top of `self`; entries in `other` replace same-named
    /// entries here.
    pub fn merged(mut self, other: Catalog) -> Self {
        self.objects.extend(other.objects);
        self.buildings.extend(other.buildings);
        self
    }

    pub fn object(&self, name: &str) -> Option<&[Capability]> {
        self.objects.get(name).map(Vec::as_slice)
    }

    pub fn building(&self, name: &str) -> Option<&[String]> {
        self.buildings.get(name).map(Vec::as_slice)
    }

    /// Check every object offers at least one capability with non-zero
    /// capacity and every building references known objects.
    pub fn validate(&self) -> WorldResult<()> {
        for (name, caps) in &self.objects {
            if caps.is_empty() {
                return Err(WorldError::NoCapabilities(name.clone()));
            }
            if let Some(c) = caps.iter().find(|c| c.capacity == 0) {
                return Err(WorldError::ZeroCapacity {
                    object:     name.clone(),
                    capability: c.name.clone(),
                });
            }
        }
        for (building, objects) in &self.buildings {
            if let Some(missing) = objects.iter().find(|o| !self.objects.contains_key(*o)) {
                return Err(WorldError::UnknownObjectType {
                    building: building.clone(),
                    object:   missing.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build a directory of type `kind` covering `footprint`, dropping each
    /// default object at a random whole-unit position at least
    /// [`OBJECT_MARGIN`] inside the edges.
    pub fn instantiate(
        &self,
        kind:      &str,
        footprint: Bounds,
        rng:       &mut dyn RandomSource,
    ) -> WorldResult<ResourceDirectory> {
        let objects = self
            .building(kind)
            .ok_or_else(|| WorldError::UnknownBuildingType(kind.to_owned()))?;
        let area = footprint
            .inset(OBJECT_MARGIN)
            .ok_or_else(|| WorldError::FootprintTooSmall { kind: kind.to_owned() })?;

        let mut directory = ResourceDirectory::new(kind, footprint);
        for object in objects {
            let caps = self.object(object).ok_or_else(|| WorldError::UnknownObjectType {
                building: kind.to_owned(),
                object:   object.clone(),
            })?;
            let x = rng.gen_int_inclusive(area.x as i32, area.right() as i32);
            let y = rng.gen_int_inclusive(area.y as i32, area.bottom() as i32);
            directory.push(Resource::new(
                object.as_str(),
                Position::new(x as f32, y as f32),
                caps.to_vec(),
            ));
        }
        Ok(directory)
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}
