//! Policy implementation systems.
//!
//! Two systems, one per phase:
//! 1. `process_submissions` (Submit) — drain `PendingSubmissions` through
//!    `ImplementationScheduler::submit`, record outcomes, publish admissions
//! 2. `advance_implementations` (Advance) — tick the scheduler at the current
//!    snapshot week and publish every resulting event

use bevy_app::{App, Plugin};
use bevy_ecs::message::MessageWriter;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Res, ResMut};

use crate::ecs::events::PolicyMessage;
use crate::ecs::resources::{
    CurrentSnapshot, PendingSubmissions, PolicyScheduler, SubmissionOutcome, SubmissionResults,
};
use crate::ecs::schedule::{PolicyPhase, PolicyTick};

pub struct ImplementationPlugin;

impl Plugin for ImplementationPlugin {
    fn build(&self, app: &mut App) {
        add_implementation_systems(app);
    }
}

pub fn add_implementation_systems(app: &mut App) {
    app.add_systems(PolicyTick, process_submissions.in_set(PolicyPhase::Submit));
    app.add_systems(PolicyTick, advance_implementations.in_set(PolicyPhase::Advance));
}

fn process_submissions(
    mut pending: ResMut<PendingSubmissions>,
    mut results: ResMut<SubmissionResults>,
    mut scheduler: ResMut<PolicyScheduler>,
    snapshot: Res<CurrentSnapshot>,
    mut messages: MessageWriter<PolicyMessage>,
) {
    for template in pending.0.drain(..) {
        let policy_id = template.id.clone();
        let result = match scheduler.0.submit(template, &snapshot.0) {
            Ok(admission) => {
                messages.write(PolicyMessage(admission.event));
                Ok(admission.record.id)
            }
            Err(err) => Err(err),
        };
        results.0.push(SubmissionOutcome { policy_id, result });
    }
}

fn advance_implementations(
    mut scheduler: ResMut<PolicyScheduler>,
    snapshot: Res<CurrentSnapshot>,
    mut messages: MessageWriter<PolicyMessage>,
) {
    for event in scheduler.0.tick(&snapshot.0) {
        messages.write(PolicyMessage(event));
    }
}
