use std::sync::Arc;

use bevy_ecs::resource::Resource;

use crate::model::{PoliticalSnapshot, PolicyTemplate};
use crate::sim::{ImplementationScheduler, SchedulerConfig, SubmitError};

/// The scheduler instance driven by the `PolicyTick` schedule.
#[derive(Resource)]
pub struct PolicyScheduler(pub ImplementationScheduler);

impl PolicyScheduler {
    pub fn seeded(config: SchedulerConfig) -> Self {
        Self(ImplementationScheduler::seeded(config))
    }
}

/// Political state the host keeps current; read on every tick.
#[derive(Resource, Debug, Clone)]
pub struct CurrentSnapshot(pub PoliticalSnapshot);

/// Templates queued for admission on the next tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct PendingSubmissions(pub Vec<Arc<PolicyTemplate>>);

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub policy_id: String,
    /// Implementation id on admission.
    pub result: Result<u64, SubmitError>,
}

/// Outcomes of processed submissions, in queue order. The host drains it.
#[derive(Resource, Debug, Clone, Default)]
pub struct SubmissionResults(pub Vec<SubmissionOutcome>);
