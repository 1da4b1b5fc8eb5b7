use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("need {0:?} declared more than once")]
    DuplicateNeed(String),

    #[error("need {name:?} has non-positive decay rate {rate}")]
    InvalidDecayRate { name: String, rate: f32 },

    #[error("need {name:?} has {what} {value} outside [0, 100]")]
    OutOfRange {
        name:  String,
        what:  &'static str,
        value: f32,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
