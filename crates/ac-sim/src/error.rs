use ac_agent::AgentError;
use ac_behavior::BehaviorError;
use ac_core::{AcError, AgentId};
use ac_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error(transparent)]
    Core(#[from] AcError),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("scenario parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
