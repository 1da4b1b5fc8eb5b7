//! World-subsystem error type.

use thiserror::Error;

/// Errors produced while assembling a world.  Runtime queries never fail;
/// a missing resource is reported as `None`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown building type {0:?}")]
    UnknownBuildingType(String),

    #[error("building type {building:?} references unknown object type {object:?}")]
    UnknownObjectType { building: String, object: String },

    #[error("capability {capability:?} on {object:?} has zero capacity")]
    ZeroCapacity { object: String, capability: String },

    #[error("object type {0:?} offers no capabilities")]
    NoCapabilities(String),

    #[error("footprint of {kind:?} is too small to place objects")]
    FootprintTooSmall { kind: String },

    #[error("building {kind:?} lies outside the world bounds")]
    OutOfBounds { kind: String },
}

pub type WorldResult<T> = Result<T, WorldError>;
