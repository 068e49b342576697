//! Ordered rollout phases with fractional duration weights.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const FRACTION_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phase {
    pub name: String,
    /// Share of the total timeline, 0.0–1.0.
    pub fraction: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhaseTableError {
    #[error("phase table must contain at least one phase")]
    Empty,

    #[error("phase {name} has invalid fraction {fraction}")]
    InvalidFraction { name: String, fraction: f64 },

    #[error("phase fractions sum to {sum}, expected 1.0")]
    FractionsDoNotSumToOne { sum: f64 },
}

/// Fixed, ordered phase sequence shared by every implementation record.
///
/// Deserialization goes through [`PhaseTable::new`], so a persisted table is
/// validated the same way as a constructed one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawPhaseTable")]
pub struct PhaseTable {
    phases: Vec<Phase>,
}

#[derive(Deserialize)]
struct RawPhaseTable {
    phases: Vec<Phase>,
}

impl TryFrom<RawPhaseTable> for PhaseTable {
    type Error = PhaseTableError;

    fn try_from(raw: RawPhaseTable) -> Result<Self, Self::Error> {
        Self::new(raw.phases)
    }
}

impl PhaseTable {
    pub fn new(phases: Vec<Phase>) -> Result<Self, PhaseTableError> {
        if phases.is_empty() {
            return Err(PhaseTableError::Empty);
        }
        for phase in &phases {
            if !phase.fraction.is_finite() || phase.fraction < 0.0 {
                return Err(PhaseTableError::InvalidFraction {
                    name: phase.name.clone(),
                    fraction: phase.fraction,
                });
            }
        }
        let sum: f64 = phases.iter().map(|p| p.fraction).sum();
        if (sum - 1.0).abs() > FRACTION_TOLERANCE {
            return Err(PhaseTableError::FractionsDoNotSumToOne { sum });
        }
        Ok(Self { phases })
    }

    /// Planning & Preparation (0.2), Initial Implementation (0.3),
    /// Full Deployment (0.4), Stabilization (0.1).
    pub fn standard() -> Self {
        let phase = |name: &str, fraction| Phase {
            name: name.to_string(),
            fraction,
        };
        Self {
            phases: vec![
                phase("Planning & Preparation", 0.2),
                phase("Initial Implementation", 0.3),
                phase("Full Deployment", 0.4),
                phase("Stabilization", 0.1),
            ],
        }
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn name(&self, index: usize) -> &str {
        self.phases
            .get(index)
            .or(self.phases.last())
            .map_or("", |p| p.name.as_str())
    }

    /// First phase whose cumulative threshold (in percent) covers `progress`.
    /// Progress past the final threshold, including float drift at 100, lands
    /// in the last phase.
    pub fn phase_at(&self, progress: f64) -> usize {
        let mut cumulative = 0.0;
        for (index, phase) in self.phases.iter().enumerate() {
            cumulative += phase.fraction * 100.0;
            if cumulative >= progress {
                return index;
            }
        }
        self.phases.len().saturating_sub(1)
    }
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_valid() {
        let standard = PhaseTable::standard();
        assert_eq!(PhaseTable::new(standard.phases().to_vec()), Ok(standard));
    }

    #[test]
    fn phase_boundaries() {
        let table = PhaseTable::standard();
        assert_eq!(table.phase_at(0.0), 0);
        assert_eq!(table.phase_at(20.0), 0);
        assert_eq!(table.phase_at(20.1), 1);
        assert_eq!(table.phase_at(50.0), 1);
        assert_eq!(table.phase_at(75.0), 2);
        assert_eq!(table.phase_at(90.5), 3);
        assert_eq!(table.phase_at(100.0), 3);
    }

    #[test]
    fn names_follow_index() {
        let table = PhaseTable::standard();
        assert_eq!(table.name(0), "Planning & Preparation");
        assert_eq!(table.name(3), "Stabilization");
        assert_eq!(table.name(99), "Stabilization");
    }

    #[test]
    fn rejects_bad_sum() {
        let phases = vec![
            Phase {
                name: "a".to_string(),
                fraction: 0.5,
            },
            Phase {
                name: "b".to_string(),
                fraction: 0.4,
            },
        ];
        assert!(matches!(
            PhaseTable::new(phases),
            Err(PhaseTableError::FractionsDoNotSumToOne { .. })
        ));
    }

    #[test]
    fn rejects_negative_fraction() {
        let phases = vec![
            Phase {
                name: "a".to_string(),
                fraction: 1.5,
            },
            Phase {
                name: "b".to_string(),
                fraction: -0.5,
            },
        ];
        assert!(matches!(
            PhaseTable::new(phases),
            Err(PhaseTableError::InvalidFraction { .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(PhaseTable::new(Vec::new()), Err(PhaseTableError::Empty));
    }

    #[test]
    fn serde_keeps_standard_table() {
        let json = serde_json::to_string(&PhaseTable::standard()).unwrap();
        let back: PhaseTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PhaseTable::standard());
    }

    #[test]
    fn deserialize_validates() {
        let err = serde_json::from_str::<PhaseTable>(r#"{"phases": []}"#).unwrap_err();
        assert!(err.to_string().contains("at least one phase"));
        let lopsided = r#"{"phases": [{"name": "a", "fraction": 0.4}]}"#;
        assert!(serde_json::from_str::<PhaseTable>(lopsided).is_err());
    }
}
