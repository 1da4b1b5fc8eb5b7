//! A single decaying drive.

/// Upper bound of every need value.
pub const NEED_MAX: f32 = 100.0;

/// Default critical threshold.
pub const DEFAULT_CRITICAL: f32 = 20.0;

/// A drive that decays over time and is restored by using resources.
///
/// `current` is always within `[0, NEED_MAX]`; every mutator clamps.
#[derive(Clone, Debug, PartialEq)]
pub struct Need {
    current:                f32,
    /// Points lost per simulated hour.
    pub decay_rate:         f32,
    pub critical_threshold: f32,
}

impl Need {
    /// A full need (`current = 100`).
    pub fn new(decay_rate: f32) -> Self {
        Self::with_value(NEED_MAX, decay_rate)
    }

    pub fn with_value(current: f32, decay_rate: f32) -> Self {
        Self {
            current: clamp(current),
            decay_rate,
            critical_threshold: DEFAULT_CRITICAL,
        }
    }

    pub fn with_critical(mut self, threshold: f32) -> Self {
        self.critical_threshold = threshold;
        self
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Overwrite the value (clamped).
    pub fn set(&mut self, value: f32) {
        self.current = clamp(value);
    }

    /// Apply `delta_hours` of decay.
    pub fn decay(&mut self, delta_hours: f32) {
        self.current = clamp(self.current - self.decay_rate * delta_hours);
    }

    /// Restore `amount` points.
    pub fn satisfy(&mut self, amount: f32) {
        self.current = clamp(self.current + amount);
    }

    #[inline]
    pub fn is_critical(&self) -> bool {
        self.current <= self.critical_threshold
    }
}

#[inline]
fn clamp(v: f32) -> f32 {
    // NaN would slip through `clamp`; treat it as empty.
    if v.is_nan() { 0.0 } else { v.clamp(0.0, NEED_MAX) }
}
