//! Point-in-time agent snapshots.

use std::hash::Hasher;

use ac_core::{AgentId, Position};
use rustc_hash::FxHasher;

/// What an observer sees of one agent at one instant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStatus {
    pub id:               AgentId,
    pub name:             String,
    pub position:         Position,
    pub destination:      Option<Position>,
    pub action:           String,
    pub most_urgent_need: String,
    /// `(name, value)` in declaration order.
    pub needs:            Vec<(String, f32)>,
    pub color:            [u8; 3],
}

impl AgentStatus {
    pub fn need(&self, name: &str) -> Option<f32> {
        self.needs.iter().find(|(n, _)| n == name).map(|&(_, v)| v)
    }
}

/// A stable RGB colour derived from an agent's name.
///
/// Same name, same colour on every run for a given target.  The hash mixes
/// at pointer width, so 32-bit and 64-bit builds disagree.
pub fn personality_color(name: &str) -> [u8; 3] {
    let mut hasher = FxHasher::default();
    hasher.write(name.as_bytes());
    let h = hasher.finish();
    [(h >> 16) as u8, (h >> 8) as u8, h as u8]
}

/// Display colour for the inner marker of an agent whose most urgent need is
/// `need`.  Unknown needs are grey.
pub fn need_color(need: &str) -> [u8; 3] {
    match need {
        "energy" => [255, 255, 0],
        "hunger" => [255, 165, 0],
        "social" => [147, 112, 219],
        _        => [128, 128, 128],
    }
}
