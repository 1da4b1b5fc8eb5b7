use ac_core::Position;

/// Bookkeeping shared by every behavior.  Reset to the default on
/// deactivation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BehaviorState {
    pub active:          bool,
    /// Ticks since activation; 0 on the activation tick.
    pub ticks_active:    u32,
    pub target_position: Option<Position>,
}

impl BehaviorState {
    /// Mark active from this tick.
    pub fn activate(&mut self, target: Option<Position>) {
        self.active = true;
        self.ticks_active = 0;
        self.target_position = target;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
