//! `ac-sim`: the tick loop that drives agents through a shared world.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Decide  : for each agent in ascending AgentId order
//!                 needs.update(Δt)
//!                 arbiter.tick(state, world, rng)   (select or continue)
//!                 advance one step toward the destination
//!   ② Use     : agents standing on their reserved resource restore the
//!                 need it serves at satisfaction_rate × Δt
//!   ③ Observe : on_tick_end every tick, on_snapshot every
//!                 output_interval_ticks
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ac_sim::{NoopObserver, ScenarioConfig};
//!
//! let mut sim = ScenarioConfig::standard().build()?;
//! sim.run(&mut NoopObserver)?;
//! for s in sim.statuses() {
//!     println!("{} {} {}", s.name, s.action, s.most_urgent_need);
//! }
//! ```

pub mod agent;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod usage;


pub use agent::Agent;
pub use builder::SimBuilder;
pub use config::{AgentConfig, BuildingConfig, ScenarioConfig, WorldConfig};
pub use error::{SimError, SimResult};
pub use observer::{Both, NoopObserver, SimObserver, TickSummary};
pub use sim::Sim;
pub use usage::{ARRIVAL_EPSILON, apply_resource_use};
