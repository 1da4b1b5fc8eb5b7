//! Per-agent physical state.

use ac_core::{AgentId, Position};

use crate::{Action, AgentStatus, NeedsSystem, personality_color};

/// Movement speed in world units per tick.
pub const DEFAULT_SPEED: f32 = 3.0;

/// Everything about an agent except the behaviors that drive it.
///
/// Behaviors receive `&mut AgentState` and steer it by setting
/// `destination` and `current_action`; the driver moves the agent.
#[derive(Clone, Debug)]
pub struct AgentState {
    pub id:             AgentId,
    pub name:           String,
    pub position:       Position,
    pub destination:    Option<Position>,
    /// Units per tick.
    pub speed:          f32,
    pub current_action: Action,
    pub needs:          NeedsSystem,
}

impl AgentState {
    /// A new idle agent with the standard needs, all full.
    pub fn new(id: AgentId, name: impl Into<String>, position: Position) -> Self {
        Self::with_needs(id, name, position, NeedsSystem::standard())
    }

    pub fn with_needs(
        id: AgentId,
        name: impl Into<String>,
        position: Position,
        needs: NeedsSystem,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            destination: None,
            speed: DEFAULT_SPEED,
            current_action: Action::Idle,
            needs,
        }
    }

    pub fn set_destination(&mut self, target: Position) {
        self.destination = Some(target);
    }

    pub fn clear_destination(&mut self) {
        self.destination = None;
    }

    #[inline]
    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }

    /// Move one tick toward the destination.
    ///
    /// Snaps onto the destination and clears it when it is closer than
    /// `speed`.  Returns `true` on the tick of arrival.
    pub fn advance_movement(&mut self) -> bool {
        let Some(target) = self.destination else {
            return false;
        };
        let (next, arrived) = self.position.step_toward(target, self.speed);
        self.position = next;
        if arrived {
            self.destination = None;
        }
        arrived
    }

    /// Read-only snapshot for output and display.
    pub fn status(&self) -> AgentStatus {
        AgentStatus {
            id:               self.id,
            name:             self.name.clone(),
            position:         self.position,
            destination:      self.destination,
            action:           self.current_action.to_string(),
            most_urgent_need: self.needs.most_urgent().unwrap_or_default().to_owned(),
            needs:            self.needs.values(),
            color:            personality_color(&self.name),
        }
    }
}
