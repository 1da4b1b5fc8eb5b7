//! Scenario files: clock, map, catalog, buildings and agents in one TOML
//! document.
//!
//! Every section is optional; missing sections fall back to the reference
//! town.
//!
//! ```toml
//! [sim]
//! seed = 7
//! total_ticks = 2880
//!
//! [world]
//! width = 800.0
//! height = 600.0
//!
//! [[buildings]]
//! kind = "house"
//! x = 50.0
//! y = 50.0
//! width = 60.0
//! height = 80.0
//!
//! [[agents]]
//! name = "Alice"
//! x = 100.0
//! y = 100.0
//! needs = { hunger = 55.0 }
//! behaviors = ["eat", "rest", "wander"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ac_agent::{NeedConfig, NeedsSystem};
use ac_behavior::Arbiter;
use ac_core::{Bounds, Position, SimConfig, SimRng};
use ac_world::{Catalog, WorldBuilder};
use serde::{Deserialize, Serialize};

use crate::{Sim, SimBuilder, SimError, SimResult};

/// Seed offset for the object-placement RNG, kept apart from agent streams.
const LAYOUT_SEED_OFFSET: u64 = 0x5eed_1a70;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width:  f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingConfig {
    pub kind:   String,
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

impl BuildingConfig {
    pub fn new(kind: &str, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { kind: kind.to_owned(), x, y, width, height }
    }

    pub fn footprint(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub x:    f32,
    pub y:    f32,
    /// Starting values overriding the default of 100.
    #[serde(default)]
    pub needs: BTreeMap<String, f32>,
    /// Candidate behaviors by name, in tie-break order.  Empty means the
    /// standard set.
    #[serde(default)]
    pub behaviors: Vec<String>,
}

impl AgentConfig {
    pub fn new(name: &str, x: f32, y: f32) -> Self {
        Self { name: name.to_owned(), x, y, needs: BTreeMap::new(), behaviors: Vec::new() }
    }
}

/// A complete, serialisable scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub sim:       SimConfig,
    pub world:     WorldConfig,
    /// Layered over the standard catalog.
    pub catalog:   Catalog,
    pub needs:     Vec<NeedConfig>,
    pub buildings: Vec<BuildingConfig>,
    pub agents:    Vec<AgentConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScenarioConfig {
    /// The reference town: an 800 × 600 map with four houses, two
    /// restaurants, two parks, and four residents.
    pub fn standard() -> Self {
        let mut buildings: Vec<BuildingConfig> = (0..4)
            .map(|i| BuildingConfig::new("house", 50.0 + i as f32 * 80.0, 50.0, 60.0, 80.0))
            .collect();
        buildings.push(BuildingConfig::new("restaurant", 200.0, 200.0, 100.0, 80.0));
        buildings.push(BuildingConfig::new("restaurant", 400.0, 200.0, 100.0, 80.0));
        buildings.push(BuildingConfig::new("park", 50.0, 350.0, 150.0, 100.0));
        buildings.push(BuildingConfig::new("park", 300.0, 350.0, 150.0, 100.0));

        Self {
            sim:       SimConfig::default(),
            world:     WorldConfig::default(),
            catalog:   Catalog::default(),
            needs:     NeedConfig::standard(),
            buildings,
            agents: vec![
                AgentConfig::new("Alice", 100.0, 100.0),
                AgentConfig::new("Bob", 200.0, 200.0),
                AgentConfig::new("Charlie", 300.0, 300.0),
                AgentConfig::new("Diana", 400.0, 400.0),
            ],
        }
    }

    pub fn from_toml_str(s: &str) -> SimResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Needs for one agent: the scenario's need table with its overrides.
    fn needs_for(&self, agent: &AgentConfig) -> SimResult<NeedsSystem> {
        if let Some(unknown) = agent.needs.keys().find(|k| !self.needs.iter().any(|n| &n.name == *k)) {
            return Err(SimError::Config(format!(
                "agent {:?} overrides unknown need {unknown:?}",
                agent.name
            )));
        }
        let configs: Vec<NeedConfig> = self
            .needs
            .iter()
            .map(|n| {
                let mut n = n.clone();
                if let Some(&v) = agent.needs.get(&n.name) {
                    n.initial = v;
                }
                n
            })
            .collect();
        Ok(NeedsSystem::from_configs(&configs)?)
    }

    /// Lay out the world and agents and return a ready-to-run [`Sim`].
    ///
    /// Object positions inside buildings are drawn from a generator seeded
    /// from `sim.seed`, so the layout is reproducible.
    pub fn build(&self) -> SimResult<Sim> {
        let catalog = Catalog::standard().merged(self.catalog.clone());
        catalog.validate()?;

        let mut layout_rng = SimRng::new(self.sim.seed.wrapping_add(LAYOUT_SEED_OFFSET));
        let mut world = WorldBuilder::new(Bounds::sized(self.world.width, self.world.height));
        for b in &self.buildings {
            world.add_building(&b.kind, b.footprint(), &catalog, &mut layout_rng)?;
        }

        let mut builder = SimBuilder::new(self.sim.clone(), world.build()?);
        for a in &self.agents {
            let needs = self.needs_for(a)?;
            let position = Position::new(a.x, a.y);
            builder = if a.behaviors.is_empty() {
                builder.agent_with_needs(&a.name, position, needs)
            } else {
                let arbiter = Arbiter::from_names(&a.behaviors)?;
                builder.agent_with_arbiter(&a.name, position, needs, arbiter)
            };
        }
        builder.build()
    }
}
