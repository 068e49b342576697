//! Planned versus resistance- and approval-adjusted rollout duration.

use crate::model::{Complexity, PoliticalSnapshot, PolicyTemplate, Timeline, TimelineFactors};

/// Approval below this no longer stretches the timeline further.
const APPROVAL_FACTOR_FLOOR: f64 = 0.7;

fn complexity_factor(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Low => 0.8,
        Complexity::Medium => 1.0,
        Complexity::High => 1.3,
    }
}

pub fn compute(
    template: &PolicyTemplate,
    resistance: f64,
    snapshot: &PoliticalSnapshot,
) -> Timeline {
    let planned = template.duration;
    let factors = TimelineFactors {
        complexity: complexity_factor(template.complexity),
        resistance: 1.0 + resistance / 100.0,
        approval: (snapshot.approval / 100.0).max(APPROVAL_FACTOR_FLOOR),
    };
    let raw = f64::from(planned) * factors.complexity * factors.resistance / factors.approval;
    Timeline {
        planned,
        estimated: (raw.round() as u32).max(1),
        factors,
    }
}
