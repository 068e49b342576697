use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::challenge::Challenge;
use super::effect::EffectMap;
use super::policy::PolicyTemplate;
use super::timestamp::SimWeek;
use crate::sim::phase::PhaseTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ImplementationStatus {
    Implementing,
    Completed,
    Cancelled,
}

string_enum!(ImplementationStatus {
    Implementing => "implementing",
    Completed => "completed",
    Cancelled => "cancelled",
});

impl ImplementationStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ImplementationStatus::Implementing)
    }
}

/// Multipliers that turned the planned duration into the estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimelineFactors {
    pub complexity: f64,
    pub resistance: f64,
    pub approval: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    /// Weeks the template asks for.
    pub planned: u32,
    /// Weeks the rollout is expected to take; always at least 1.
    pub estimated: u32,
    pub factors: TimelineFactors,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EffectLedger {
    /// Realized at admission.
    pub immediate: EffectMap,
    /// Increment emitted by the most recent tick that made progress.
    pub ongoing: EffectMap,
    /// Set once, on completion.
    #[serde(rename = "final")]
    pub final_effects: Option<EffectMap>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Opposition {
    /// 0–100, fixed at admission.
    pub resistance: f64,
    pub challenges: Vec<Challenge>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Costs {
    pub financial: f64,
    pub political: u32,
    /// Financial cost per planned week.
    pub ongoing: f64,
}

/// A policy admitted into implementation, owned and mutated by the scheduler.
///
/// Plain data: everything here serializes, so a persistence layer can store
/// records and hand them back through `ImplementationScheduler::restore`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImplementationRecord {
    pub id: u64,
    pub template: Arc<PolicyTemplate>,
    pub started_at: SimWeek,
    pub timeline: Timeline,
    pub status: ImplementationStatus,
    /// 0.0–100.0, never decreasing.
    pub progress: f64,
    pub phases: Arc<PhaseTable>,
    pub current_phase: usize,
    /// Last week a tick advanced this record.
    #[serde(default)]
    pub last_tick: Option<SimWeek>,
    pub effects: EffectLedger,
    pub opposition: Opposition,
    pub costs: Costs,
    #[serde(default)]
    pub ended_at: Option<SimWeek>,
}

impl ImplementationRecord {
    pub fn policy_id(&self) -> &str {
        &self.template.id
    }

    pub fn is_active(&self) -> bool {
        self.status == ImplementationStatus::Implementing
    }

    pub fn current_phase_name(&self) -> &str {
        self.phases.name(self.current_phase)
    }

    /// Estimated weeks left, floored at zero.
    pub fn time_remaining(&self) -> f64 {
        let estimated = f64::from(self.timeline.estimated);
        (estimated - estimated * self.progress / 100.0).max(0.0)
    }
}
