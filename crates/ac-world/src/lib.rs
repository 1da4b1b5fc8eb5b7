//! `ac-world`: shared resources and the buildings that group them.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`capability`] | `Capability`: a named, capacity-limited service               |
//! | [`resource`]   | `Resource`: an object with occupants and the acquire protocol |
//! | [`directory`]  | `ResourceDirectory`, a building with entrance and resources   |
//! | [`query`]      | `WorldQuery` trait, `ResourceRef`                             |
//! | [`world`]      | `World` (directories + R-tree footprint index), `WorldBuilder` |
//! | [`catalog`]    | `Catalog` of object and building types                        |
//! | [`error`]      | `WorldError`, `WorldResult<T>`                                |
//!
//! # Contention model
//!
//! A resource admits at most `Σ capacity` occupants over all of its
//! capabilities.  A table offering four diner seats and four socialiser seats
//! therefore admits eight agents regardless of why they came.  Occupancy only
//! changes through [`Resource::acquire`] and [`Resource::release`]; the
//! simulation processes agents sequentially, so the check-then-act pair in
//! `acquire` cannot be interleaved by another agent.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on catalog types.          |

pub mod capability;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod query;
pub mod resource;
pub mod world;


pub use capability::Capability;
pub use catalog::Catalog;
pub use directory::ResourceDirectory;
pub use error::{WorldError, WorldResult};
pub use query::{ResourceRef, WorldQuery};
pub use resource::Resource;
pub use world::{OccupancyRow, World, WorldBuilder};
