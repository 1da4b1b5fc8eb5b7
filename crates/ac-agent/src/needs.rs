//! The fixed set of needs an agent carries.

use crate::need::{DEFAULT_CRITICAL, NEED_MAX};
use crate::{AgentError, AgentResult, Need};

/// Declarative description of one need, as found in scenario files.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeedConfig {
    pub name:       String,
    pub decay_rate: f32,
    #[cfg_attr(feature = "serde", serde(default = "default_critical"))]
    pub critical_threshold: f32,
    #[cfg_attr(feature = "serde", serde(default = "default_initial"))]
    pub initial: f32,
}

#[cfg(feature = "serde")]
fn default_critical() -> f32 {
    DEFAULT_CRITICAL
}

#[cfg(feature = "serde")]
fn default_initial() -> f32 {
    NEED_MAX
}

impl NeedConfig {
    pub fn new(name: impl Into<String>, decay_rate: f32) -> Self {
        Self {
            name: name.into(),
            decay_rate,
            critical_threshold: DEFAULT_CRITICAL,
            initial: NEED_MAX,
        }
    }

    /// Energy 5/h, hunger 10/h, social 3/h, in that order.
    pub fn standard() -> Vec<NeedConfig> {
        vec![
            NeedConfig::new("energy", 5.0),
            NeedConfig::new("hunger", 10.0),
            NeedConfig::new("social", 3.0),
        ]
    }
}

/// An ordered, fixed mapping from need name to [`Need`].
///
/// Names are unique and set at construction; nothing is ever added or
/// removed afterwards.  Declaration order is the iteration order and breaks
/// ties in [`most_urgent`][Self::most_urgent].
#[derive(Clone, Debug, PartialEq)]
pub struct NeedsSystem {
    needs: Vec<(String, Need)>,
}

impl NeedsSystem {
    /// Build from `(name, need)` pairs, rejecting duplicates and
    /// non-positive decay rates.
    pub fn new<I, S>(needs: I) -> AgentResult<Self>
    where
        I: IntoIterator<Item = (S, Need)>,
        S: Into<String>,
    {
        let mut out: Vec<(String, Need)> = Vec::new();
        for (name, need) in needs {
            let name = name.into();
            if out.iter().any(|(n, _)| *n == name) {
                return Err(AgentError::DuplicateNeed(name));
            }
            if !(need.decay_rate > 0.0) {
                return Err(AgentError::InvalidDecayRate { name, rate: need.decay_rate });
            }
            out.push((name, need));
        }
        Ok(Self { needs: out })
    }

    /// Build from scenario-file descriptions.
    pub fn from_configs(configs: &[NeedConfig]) -> AgentResult<Self> {
        for c in configs {
            for (what, value) in [("initial value", c.initial), ("critical threshold", c.critical_threshold)] {
                if !(0.0..=NEED_MAX).contains(&value) {
                    return Err(AgentError::OutOfRange { name: c.name.clone(), what, value });
                }
            }
        }
        Self::new(configs.iter().map(|c| {
            (
                c.name.clone(),
                Need::with_value(c.initial, c.decay_rate).with_critical(c.critical_threshold),
            )
        }))
    }

    /// Energy, hunger and social, all full.
    pub fn standard() -> Self {
        Self {
            needs: NeedConfig::standard()
                .into_iter()
                .map(|c| (c.name, Need::new(c.decay_rate)))
                .collect(),
        }
    }

    /// Decay every need by `delta_hours`.
    ///
    /// Negative or NaN input is a caller error; it is logged and treated as
    /// zero.
    pub fn update(&mut self, delta_hours: f32) {
        if delta_hours.is_nan() || delta_hours < 0.0 {
            tracing::warn!(delta_hours, "invalid elapsed time treated as zero");
            return;
        }
        if delta_hours == 0.0 {
            return;
        }
        for (_, need) in &mut self.needs {
            need.decay(delta_hours);
        }
    }

    /// Add `amount` to `name`.  Returns `false` (and changes nothing) for an
    /// unknown name.
    pub fn satisfy(&mut self, name: &str, amount: f32) -> bool {
        match self.get_mut(name) {
            Some(need) => {
                need.satisfy(amount);
                true
            }
            None => false,
        }
    }

    /// Name of the need with the lowest value; the first declared wins ties.
    ///
    /// `None` only for an empty system.
    pub fn most_urgent(&self) -> Option<&str> {
        let mut best: Option<&(String, Need)> = None;
        for entry in &self.needs {
            match best {
                Some((_, b)) if entry.1.current() >= b.current() => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(n, _)| n.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Need> {
        self.needs.iter().find(|(n, _)| n == name).map(|(_, need)| need)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Need> {
        self.needs.iter_mut().find(|(n, _)| n == name).map(|(_, need)| need)
    }

    /// Current value of `name`.
    pub fn value(&self, name: &str) -> Option<f32> {
        self.get(name).map(Need::current)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Need)> + '_ {
        self.needs.iter().map(|(n, need)| (n.as_str(), need))
    }

    /// `(name, value)` pairs in declaration order.
    pub fn values(&self) -> Vec<(String, f32)> {
        self.needs.iter().map(|(n, need)| (n.clone(), need.current())).collect()
    }

    /// `true` if every need is at or above `floor`.
    pub fn all_at_least(&self, floor: f32) -> bool {
        self.needs.iter().all(|(_, need)| need.current() >= floor)
    }

    pub fn len(&self) -> usize {
        self.needs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needs.is_empty()
    }
}

impl Default for NeedsSystem {
    fn default() -> Self {
        Self::standard()
    }
}
