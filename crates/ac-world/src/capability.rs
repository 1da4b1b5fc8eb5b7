//! A named service offered by a resource.

/// One service a [`Resource`][crate::Resource] provides.
///
/// `name` identifies which drive it serves (`"food_source"`,
/// `"resting_place"`, …).  `satisfaction_rate` is the number of need points
/// restored per simulated hour while an agent occupies the resource.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capability {
    pub name:              String,
    /// Maximum simultaneous users contributed by this capability (`>= 1`).
    pub capacity:          u32,
    pub satisfaction_rate: f32,
}

impl Capability {
    pub fn new(name: impl Into<String>, capacity: u32, satisfaction_rate: f32) -> Self {
        Self {
            name: name.into(),
            capacity,
            satisfaction_rate,
        }
    }
}
