//! The label describing what an agent is currently doing.

use std::fmt;

/// Reflects the active behavior's phase.
///
/// Renders as `idle`, `wandering`, `seeking_<need>` or `using_<need>`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Idle,
    Wandering,
    /// Heading for a building entrance to satisfy the named need.
    Seeking(String),
    /// Heading for, or occupying, a reserved resource.
    Using(String),
}

impl Action {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Action::Idle)
    }

    /// The need this action serves, if any.
    pub fn need(&self) -> Option<&str> {
        match self {
            Action::Seeking(n) | Action::Using(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Idle      => f.write_str("idle"),
            Action::Wandering => f.write_str("wandering"),
            Action::Seeking(n) => write!(f, "seeking_{n}"),
            Action::Using(n)   => write!(f, "using_{n}"),
        }
    }
}
