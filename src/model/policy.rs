use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::effect::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Category {
    Economic,
    Social,
    Environmental,
    Foreign,
}

string_enum!(Category {
    Economic => "economic",
    Social => "social",
    Environmental => "environmental",
    Foreign => "foreign",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

string_enum!(Complexity {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Political preconditions a policy needs before it can be admitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Requirements {
    pub approval: f64,
    pub coalition_support: f64,
}

/// Authored, immutable description of an enactable policy.
///
/// Templates come from the catalog and are shared by every implementation
/// record created from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyTemplate {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub complexity: Complexity,
    /// Currency units.
    pub base_cost: f64,
    /// Planned duration in weeks.
    pub duration: u32,
    #[serde(default)]
    pub effects: BTreeMap<String, Effect>,
    /// `None` means the policy is always allowed.
    #[serde(default)]
    pub requirements: Option<Requirements>,
}

impl PolicyTemplate {
    /// Structural checks the scheduler relies on. Returns a human-readable
    /// reason on the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("policy id cannot be empty".to_string());
        }
        if self.duration == 0 {
            return Err(format!("policy {} has zero duration", self.id));
        }
        if !self.base_cost.is_finite() || self.base_cost < 0.0 {
            return Err(format!(
                "policy {} has invalid base cost {}",
                self.id, self.base_cost
            ));
        }
        for (name, effect) in &self.effects {
            if !effect.is_finite() {
                return Err(format!("policy {} effect {name} is not finite", self.id));
            }
            if let Effect::Range { min, max } = *effect
                && min > max
            {
                return Err(format!(
                    "policy {} effect {name} has min {min} above max {max}",
                    self.id
                ));
            }
        }
        Ok(())
    }
}
