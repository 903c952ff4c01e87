//! Editor configuration.

use crate::{CoreError, CoreResult};

/// Attribute values written into every newly created agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentDefaults {
    pub is_paused:        bool,
    pub mass:             f64,
    pub max_acceleration: f64,
    pub max_speed:        f64,
    pub radius:           f64,
    pub scale:            f64,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            is_paused:        false,
            mass:             1.0,
            max_acceleration: 100.0,
            max_speed:        100.0,
            radius:           15.0,
            scale:            1.0,
        }
    }
}

/// Top-level configuration for one edited document.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to `Document::new`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorConfig {
    /// Seed for generated node names.  The same seed always produces the same
    /// names in the same order.
    pub name_seed: u64,

    /// Characters per generated name.
    pub name_length: usize,

    /// Edge weight given to a freshly created behavior or goal.
    pub default_weight: f64,

    /// Initial attribute values for new agents.
    pub agent: AgentDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            name_seed:      0x5eed,
            name_length:    8,
            default_weight: 100.0,
            agent:          AgentDefaults::default(),
        }
    }
}

impl EditorConfig {
    /// Reject values that would make generated names collide-prone or agent
    /// defaults physically meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name_length < 4 {
            return Err(CoreError::Config(format!(
                "name_length must be at least 4, got {}",
                self.name_length
            )));
        }
        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            return Err(CoreError::Config(format!(
                "default_weight must be finite and non-negative, got {}",
                self.default_weight
            )));
        }
        let a = &self.agent;
        for (what, v) in [
            ("mass", a.mass),
            ("max_acceleration", a.max_acceleration),
            ("max_speed", a.max_speed),
            ("radius", a.radius),
            ("scale", a.scale),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CoreError::Config(format!("agent.{what} must be positive, got {v}")));
            }
        }
        Ok(())
    }
}
