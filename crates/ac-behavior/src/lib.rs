//! `ac-behavior`: how an agent decides what to do next.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`state`]   | `BehaviorState`: active flag, tick counter, target position    |
//! | [`context`] | `BehaviorContext<'a>`: world and RNG handed to `update`        |
//! | [`model`]   | `Behavior` trait, `Usage`                                      |
//! | [`need`]    | `NeedBehavior` (rest, eat, socialize)                          |
//! | [`wander`]  | `WanderingBehavior`                                            |
//! | [`arbiter`] | `Arbiter`: ordered candidates and the single active slot       |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Design notes
//!
//! Each agent owns one `Arbiter`.  Per tick the arbiter either continues the
//! active behavior or, when none is active, picks the eligible candidate with
//! the strictly highest priority (earlier candidates win ties) and installs it.
//! An installed behavior activates on its first `update`, one tick later.
//!
//! Behaviors are non-preemptive: once active, a behavior runs until it
//! deactivates itself or the arbiter is explicitly interrupted.  Any
//! deactivation releases the reservation the behavior holds.
//!
//! Everything the behavior touches outside the agent is passed in: the world
//! as `&mut dyn WorldQuery` and randomness as `&mut dyn RandomSource`.

pub mod arbiter;
pub mod context;
pub mod error;
pub mod model;
pub mod need;
pub mod state;
pub mod wander;

#[cfg(test)]
mod tests;

pub use arbiter::Arbiter;
pub use context::BehaviorContext;
pub use error::{BehaviorError, BehaviorResult};
pub use model::{Behavior, Usage};
pub use need::{NeedBehavior, SATISFIED_AT};
pub use state::BehaviorState;
pub use wander::WanderingBehavior;
