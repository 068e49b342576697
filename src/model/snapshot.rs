use serde::{Deserialize, Serialize};

use super::timestamp::SimWeek;

/// Support a single party lends to the governing coalition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartySupport {
    pub party: String,
    pub support: f64,
}

/// Read-only view of the political state, supplied fresh on every scheduler call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoliticalSnapshot {
    /// Government approval, 0–100.
    pub approval: f64,
    #[serde(default)]
    pub coalition: Vec<PartySupport>,
    /// Opposition strength, 0–100.
    pub opposition_strength: f64,
    pub week: u32,
    pub year: u32,
}

impl PoliticalSnapshot {
    pub fn new(approval: f64, opposition_strength: f64, now: SimWeek) -> Self {
        Self {
            approval,
            coalition: Vec::new(),
            opposition_strength,
            week: now.week,
            year: now.year,
        }
    }

    pub fn with_party(mut self, party: impl Into<String>, support: f64) -> Self {
        self.coalition.push(PartySupport {
            party: party.into(),
            support,
        });
        self
    }

    /// Same political state at a different week.
    pub fn at(&self, now: SimWeek) -> Self {
        Self {
            week: now.week,
            year: now.year,
            ..self.clone()
        }
    }

    /// Aggregate coalition support: the sum over parties, 0 with no coalition.
    pub fn coalition_support(&self) -> f64 {
        self.coalition.iter().map(|p| p.support).sum()
    }

    pub fn now(&self) -> SimWeek {
        SimWeek::new(self.year, self.week)
    }
}
