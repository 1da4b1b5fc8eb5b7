//! `ac-core`: foundational types for the agent-city simulation.
//!
//! This crate is a dependency of every other `ac-*` crate.  It has no
//! `ac-*` dependencies and few external ones (`rand`, `thiserror`,
//! `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ids`]   | `AgentId`, `DirectoryId`, `ResourceId`                    |
//! | [`geo`]   | `Position`, `Bounds`                                      |
//! | [`time`]  | `Tick`, `TimeOfDay`, `TickInfo`, `SimClock`, `SimConfig`  |
//! | [`rng`]   | `RandomSource` trait, `AgentRng`, `SimRng`                |
//! | [`error`] | `AcError`, `AcResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AcError, AcResult};
pub use geo::{Bounds, Position};
pub use ids::{AgentId, DirectoryId, ResourceId};
pub use rng::{AgentRng, RandomSource, SimRng};
pub use time::{SimClock, SimConfig, Tick, TickInfo, TimeOfDay};
