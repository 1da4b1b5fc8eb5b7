//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  `SimClock` maps ticks
//! to simulated hours:
//!
//!   elapsed_hours = current_tick / ticks_per_hour
//!   hour_of_day   = (start_hour + elapsed_hours) mod 24
//!
//! Agents only ever consume two derived values per tick, bundled in
//! [`TickInfo`]: the elapsed simulated hours (`delta_hours`) and a coarse
//! [`TimeOfDay`] label.  The default resolution is 60 ticks per simulated hour
//! starting at 06:00 on day 1.

use std::fmt;

use crate::{AcError, AcResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TimeOfDay ────────────────────────────────────────────────────────────────

/// Coarse time-of-day label handed to agents every tick.
///
/// The arbitration core does not branch on it; it exists for higher-level
/// decision policies and for reporting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Classify an hour in `0..24`: 6–11 morning, 12–16 afternoon,
    /// 17–21 evening, everything else night.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            6..=11  => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _       => TimeOfDay::Night,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning   => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening   => "evening",
            TimeOfDay::Night     => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TickInfo ─────────────────────────────────────────────────────────────────

/// Everything the core needs from the time source for one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickInfo {
    pub tick:        Tick,
    /// Simulated hours elapsed since the previous tick.  Must be `>= 0`.
    pub delta_hours: f32,
    pub time_of_day: TimeOfDay,
}

impl TickInfo {
    pub fn new(tick: Tick, delta_hours: f32, time_of_day: TimeOfDay) -> Self {
        Self { tick, delta_hours, time_of_day }
    }
}

// ── SimClock ─────────────────────────────────────────────────────────────────

/// Converts tick counts into day / hour / time-of-day.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Ticks per simulated hour.  Default: 60.
    pub ticks_per_hour: u32,
    /// Hour of day (0–23) at tick 0 of day 1.  Default: 6.
    pub start_hour: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(ticks_per_hour: u32, start_hour: u32) -> Self {
        Self {
            ticks_per_hour: ticks_per_hour.max(1),
            start_hour:     start_hour % 24,
            current_tick:   Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Simulated hours that one tick represents.
    #[inline]
    pub fn delta_hours(&self) -> f32 {
        1.0 / self.ticks_per_hour as f32
    }

    /// Whole hours elapsed since the start of day 1 (including `start_hour`).
    #[inline]
    fn absolute_hours(&self) -> u64 {
        self.start_hour as u64 + self.current_tick.0 / self.ticks_per_hour as u64
    }

    /// Hour of day in `0..24`.
    #[inline]
    pub fn hour(&self) -> u32 {
        (self.absolute_hours() % 24) as u32
    }

    /// Minute within the current hour.
    #[inline]
    pub fn minute(&self) -> u32 {
        let within = self.current_tick.0 % self.ticks_per_hour as u64;
        (within * 60 / self.ticks_per_hour as u64) as u32
    }

    /// 1-based day counter.
    #[inline]
    pub fn day(&self) -> u64 {
        1 + self.absolute_hours() / 24
    }

    #[inline]
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hour())
    }

    /// `true` before 06:00 or from 22:00 onward.
    #[inline]
    pub fn is_night(&self) -> bool {
        let h = self.hour();
        !(6..22).contains(&h)
    }

    /// `true` on the first tick of an hour.
    #[inline]
    pub fn is_hour_boundary(&self) -> bool {
        self.current_tick.0 % self.ticks_per_hour as u64 == 0
    }

    /// The [`TickInfo`] for the current tick.
    pub fn tick_info(&self) -> TickInfo {
        TickInfo::new(self.current_tick, self.delta_hours(), self.time_of_day())
    }

    /// How many ticks span `hours` simulated hours (rounds up).
    #[inline]
    pub fn ticks_for_hours(&self, hours: f32) -> u64 {
        (hours.max(0.0) * self.ticks_per_hour as f32).ceil() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Day {} - {:02}:{:02} ({})",
            self.day(),
            self.hour(),
            self.minute(),
            self.time_of_day()
        )
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a TOML scenario file by `ac-sim` and passed to the
/// simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Ticks per simulated hour.
    pub ticks_per_hour: u32,

    /// Hour of day at tick 0.
    pub start_hour: u32,

    /// Emit a snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            total_ticks:           24 * 60,
            ticks_per_hour:        60,
            start_hour:            6,
            output_interval_ticks: 60,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.ticks_per_hour, self.start_hour)
    }

    /// Reject values the clock cannot represent.
    pub fn validate(&self) -> AcResult<()> {
        if self.ticks_per_hour == 0 {
            return Err(AcError::Config("ticks_per_hour must be at least 1".into()));
        }
        if self.start_hour >= 24 {
            return Err(AcError::Config(format!(
                "start_hour must be in 0..24, got {}",
                self.start_hour
            )));
        }
        Ok(())
    }
}
