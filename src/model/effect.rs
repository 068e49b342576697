use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Computed effect values keyed by effect name (e.g. `"approval"`).
///
/// `BTreeMap` keeps iteration order stable, so emitted payloads and their
/// JSON serializations are deterministic.
pub type EffectMap = BTreeMap<String, f64>;

/// A declared policy effect: either a fixed value or a `{min, max}` range.
///
/// Serialized untagged, so catalog JSON can write `"budget": -3.5` or
/// `"approval": {"min": 1, "max": 5}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Effect {
    Scalar(f64),
    Range { min: f64, max: f64 },
}

impl Effect {
    pub fn is_finite(&self) -> bool {
        match *self {
            Effect::Scalar(value) => value.is_finite(),
            Effect::Range { min, max } => min.is_finite() && max.is_finite(),
        }
    }

    /// Value realized when the policy completes.
    pub fn full_value(&self) -> f64 {
        match *self {
            Effect::Scalar(value) => value,
            Effect::Range { max, .. } => max,
        }
    }
}
