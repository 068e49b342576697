use serde::{Deserialize, Serialize};

use super::challenge::Challenge;
use super::effect::EffectMap;
use super::timestamp::SimWeek;

/// Observable outcome of a scheduler operation.
///
/// The scheduler returns these as data instead of publishing them; the host
/// applies effects to its own game state and re-publishes them wherever it likes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchedulerEvent {
    PolicyAdmitted {
        implementation_id: u64,
        policy_id: String,
        load: u32,
        immediate_effects: EffectMap,
        at: SimWeek,
    },
    PhaseChanged {
        implementation_id: u64,
        policy_id: String,
        from: usize,
        to: usize,
        phase: String,
        at: SimWeek,
    },
    OngoingEffectsComputed {
        implementation_id: u64,
        policy_id: String,
        effects: EffectMap,
        progress: f64,
        at: SimWeek,
    },
    OppositionChallengeRaised {
        implementation_id: u64,
        policy_id: String,
        challenge: Challenge,
    },
    PolicyCompleted {
        implementation_id: u64,
        policy_id: String,
        final_effects: EffectMap,
        at: SimWeek,
    },
    PolicyCancelled {
        implementation_id: u64,
        policy_id: String,
        freed_load: u32,
        progress: f64,
        at: SimWeek,
    },
}

impl SchedulerEvent {
    pub fn implementation_id(&self) -> u64 {
        match self {
            SchedulerEvent::PolicyAdmitted {
                implementation_id, ..
            }
            | SchedulerEvent::PhaseChanged {
                implementation_id, ..
            }
            | SchedulerEvent::OngoingEffectsComputed {
                implementation_id, ..
            }
            | SchedulerEvent::OppositionChallengeRaised {
                implementation_id, ..
            }
            | SchedulerEvent::PolicyCompleted {
                implementation_id, ..
            }
            | SchedulerEvent::PolicyCancelled {
                implementation_id, ..
            } => *implementation_id,
        }
    }

    /// Return the serde tag string for this variant.
    pub fn event_type_str(&self) -> &'static str {
        match self {
            SchedulerEvent::PolicyAdmitted { .. } => "policy_admitted",
            SchedulerEvent::PhaseChanged { .. } => "phase_changed",
            SchedulerEvent::OngoingEffectsComputed { .. } => "ongoing_effects_computed",
            SchedulerEvent::OppositionChallengeRaised { .. } => "opposition_challenge_raised",
            SchedulerEvent::PolicyCompleted { .. } => "policy_completed",
            SchedulerEvent::PolicyCancelled { .. } => "policy_cancelled",
        }
    }
}
