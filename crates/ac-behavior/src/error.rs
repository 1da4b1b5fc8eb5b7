use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("unknown behavior {0:?}")]
    UnknownBehavior(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
