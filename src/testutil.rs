use std::collections::BTreeMap;
use std::sync::Arc;

use rand::RngCore;

use crate::model::*;
use crate::sim::phase::PhaseTable;
use crate::sim::{ImplementationScheduler, SchedulerConfig};

// ---------------------------------------------------------------------------
// Scripted randomness
// ---------------------------------------------------------------------------

/// RNG that returns the same word forever.
///
/// `low()` makes every uniform draw 0.0, so any positive challenge
/// probability fires. `high()` makes every draw just under 1.0, so no
/// challenge ever fires.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRng(pub u64);

impl ConstantRng {
    pub fn low() -> Self {
        Self(0)
    }

    pub fn high() -> Self {
        Self(u64::MAX)
    }
}

impl RngCore for ConstantRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (i, byte) in dst.iter_mut().enumerate() {
            *byte = bytes[i % bytes.len()];
        }
    }
}

// ---------------------------------------------------------------------------
// Templates and snapshots
// ---------------------------------------------------------------------------

/// Bare template with no effects, no requirements, zero cost, 10 weeks.
pub fn template(category: Category, complexity: Complexity) -> PolicyTemplate {
    PolicyTemplate {
        id: format!("{category}_{complexity}"),
        name: format!("{category} {complexity} policy"),
        category,
        complexity,
        base_cost: 0.0,
        duration: 10,
        effects: BTreeMap::new(),
        requirements: None,
    }
}

/// Medium economic policy: 12 weeks, cost 1e8, approval 1..5,
/// requires approval 30 and coalition support 40.
pub fn economic_template() -> PolicyTemplate {
    PolicyTemplate {
        id: "fiscal_stimulus".to_string(),
        name: "Fiscal Stimulus".to_string(),
        category: Category::Economic,
        complexity: Complexity::Medium,
        base_cost: 1e8,
        duration: 12,
        effects: BTreeMap::from([(
            "approval".to_string(),
            Effect::Range { min: 1.0, max: 5.0 },
        )]),
        requirements: Some(Requirements {
            approval: 30.0,
            coalition_support: 40.0,
        }),
    }
}

/// Approval 50, one coalition party at 50, opposition 50, year 1 week 1.
pub fn scenario_snapshot() -> PoliticalSnapshot {
    PoliticalSnapshot::new(50.0, 50.0, SimWeek::new(1, 1)).with_party("Governing Party", 50.0)
}

// ---------------------------------------------------------------------------
// Schedulers and records
// ---------------------------------------------------------------------------

/// Scheduler whose challenge roll never fires.
pub fn quiet_scheduler(capacity: u32) -> ImplementationScheduler<ConstantRng> {
    ImplementationScheduler::new(SchedulerConfig::new(capacity), ConstantRng::high())
}

/// A freshly admitted-looking record built by hand, without a scheduler.
pub fn sample_record() -> ImplementationRecord {
    ImplementationRecord {
        id: 1,
        template: Arc::new(economic_template()),
        started_at: SimWeek::new(1, 1),
        timeline: Timeline {
            planned: 12,
            estimated: 21,
            factors: TimelineFactors {
                complexity: 1.0,
                resistance: 1.25,
                approval: 0.75,
            },
        },
        status: ImplementationStatus::Implementing,
        progress: 0.0,
        phases: Arc::new(PhaseTable::standard()),
        current_phase: 0,
        last_tick: None,
        effects: EffectLedger {
            immediate: EffectMap::from([("approval".to_string(), 0.25)]),
            ..EffectLedger::default()
        },
        opposition: Opposition {
            resistance: 21.0,
            challenges: Vec::new(),
        },
        costs: Costs {
            financial: 1e8,
            political: 2,
            ongoing: 1e8 / 8.0,
        },
        ended_at: None,
    }
}

/// Advance `scheduler` one week at a time from the week after `from` through
/// `through`, collecting every event.
pub fn tick_weeks<R: RngCore>(
    scheduler: &mut ImplementationScheduler<R>,
    snapshot: &PoliticalSnapshot,
    from: SimWeek,
    through: SimWeek,
) -> Vec<SchedulerEvent> {
    let mut events = Vec::new();
    let mut week = from;
    while week < through {
        week = week.plus_weeks(1);
        events.extend(scheduler.tick(&snapshot.at(week)));
    }
    events
}
