//! `ac-agent`: what an agent *is*, independent of how it decides.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`need`]   | `Need`: one decaying, clamped scalar                        |
//! | [`needs`]  | `NeedsSystem`, `NeedConfig`                                 |
//! | [`action`] | `Action`: the label shown for what the agent is doing       |
//! | [`state`]  | `AgentState`: identity, position, destination, needs        |
//! | [`status`] | `AgentStatus` snapshot, `personality_color`, `need_color`   |
//! | [`error`]  | `AgentError`, `AgentResult<T>`                              |
//!
//! Behaviors mutate `AgentState` through `&mut`; the arbiter that owns the
//! behaviors lives next to it (in `ac-sim::Agent`) rather than inside it, so a
//! behavior can borrow the state while the arbiter borrows the behavior.

pub mod action;
pub mod error;
pub mod need;
pub mod needs;
pub mod state;
pub mod status;


pub use action::Action;
pub use error::{AgentError, AgentResult};
pub use need::Need;
pub use needs::{NeedConfig, NeedsSystem};
pub use state::{AgentState, DEFAULT_SPEED};
pub use status::{AgentStatus, need_color, personality_color};
