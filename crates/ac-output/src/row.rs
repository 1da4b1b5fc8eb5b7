//! Plain data row types written by output backends.

/// Where one agent is and what it is doing at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:         u32,
    pub name:             String,
    pub tick:             u64,
    /// Simulated wall clock, `HH:MM`.
    pub clock:            String,
    pub x:                f32,
    pub y:                f32,
    pub moving:           bool,
    pub action:           String,
    pub most_urgent_need: String,
    /// Personality colour as `#rrggbb`.
    pub color:            String,
}

/// One need value of one agent at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct NeedValueRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub need:     String,
    pub value:    f32,
}

/// Occupancy of one building type at a snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancySampleRow {
    pub tick:      u64,
    pub kind:      String,
    pub buildings: u64,
    pub occupants: u64,
    pub capacity:  u32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub day:         u64,
    pub hour:        u32,
    pub time_of_day: &'static str,
    pub active:      u64,
    pub using:       u64,
    pub idle:        u64,
    pub occupied:    u64,
}
