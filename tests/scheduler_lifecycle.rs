use std::sync::Arc;

use policy_sim::model::*;
use policy_sim::sim::SubmitError;
use policy_sim::testutil::{self, economic_template, quiet_scheduler, scenario_snapshot};

#[test]
fn fiscal_stimulus_runs_full_course() {
    let mut scheduler = quiet_scheduler(100);
    let snapshot = scenario_snapshot();

    let admission = scheduler
        .submit(Arc::new(economic_template()), &snapshot)
        .unwrap();
    let record = &admission.record;
    assert_eq!(record.id, 1);
    assert_eq!(record.opposition.resistance, 21.0);
    assert_eq!(record.timeline.planned, 12);
    assert_eq!(record.timeline.estimated, 21);
    assert_eq!(record.costs.political, 2);
    assert_eq!(scheduler.capacity_status().used, 30);

    // One week short of the estimate: still running.
    let early = testutil::tick_weeks(
        &mut scheduler,
        &snapshot,
        SimWeek::new(1, 1),
        SimWeek::new(1, 21),
    );
    assert!(
        !early
            .iter()
            .any(|e| matches!(e, SchedulerEvent::PolicyCompleted { .. }))
    );
    let running = scheduler.active(1).unwrap();
    assert!(running.progress < 100.0);
    assert_eq!(running.current_phase_name(), "Stabilization");

    let last = scheduler.tick(&snapshot.at(SimWeek::new(1, 22)));
    let completed = last
        .iter()
        .find_map(|e| match e {
            SchedulerEvent::PolicyCompleted { final_effects, at, .. } => Some((final_effects, at)),
            _ => None,
        })
        .unwrap();
    assert_eq!(completed.0["approval"], 5.0);
    assert_eq!(*completed.1, SimWeek::new(1, 22));

    assert!(scheduler.active(1).is_none());
    assert_eq!(scheduler.capacity_status().used, 0);
    let done = &scheduler.history()[0];
    assert_eq!(done.status, ImplementationStatus::Completed);
    assert_eq!(done.progress, 100.0);
    assert_eq!(done.ended_at, Some(SimWeek::new(1, 22)));
    assert!(done.opposition.challenges.is_empty());
}

#[test]
fn every_phase_announced_in_order() {
    let mut scheduler = quiet_scheduler(100);
    let snapshot = scenario_snapshot();
    scheduler
        .submit(Arc::new(economic_template()), &snapshot)
        .unwrap();
    let events = testutil::tick_weeks(
        &mut scheduler,
        &snapshot,
        SimWeek::new(1, 1),
        SimWeek::new(1, 22),
    );
    let phases: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            SchedulerEvent::PhaseChanged { phase, .. } => Some(phase.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(phases, vec!["Initial Implementation", "Full Deployment", "Stabilization"]);
}

#[test]
fn weak_government_cannot_start_policy() {
    let mut scheduler = quiet_scheduler(100);
    let snapshot = PoliticalSnapshot::new(20.0, 50.0, SimWeek::new(1, 1))
        .with_party("Governing Party", 35.0);
    let err = scheduler
        .submit(Arc::new(economic_template()), &snapshot)
        .unwrap_err();
    let SubmitError::RequirementsNotMet { reasons } = &err else {
        panic!("expected requirements failure, got {err:?}");
    };
    assert_eq!(reasons.len(), 2);
    assert_eq!(scheduler.used_capacity(), 0);
    assert!(!scheduler.is_active("fiscal_stimulus"));
}

#[test]
fn policy_spanning_year_boundary_completes() {
    let mut scheduler = quiet_scheduler(100);
    let snapshot = scenario_snapshot().at(SimWeek::new(1, 45));
    scheduler
        .submit(Arc::new(economic_template()), &snapshot)
        .unwrap();
    // 21 weeks after Y1.W45 is Y2.W14.
    let events = testutil::tick_weeks(
        &mut scheduler,
        &snapshot,
        SimWeek::new(1, 45),
        SimWeek::new(2, 14),
    );
    assert!(matches!(
        events.last(),
        Some(SchedulerEvent::PolicyCompleted { at, .. }) if *at == SimWeek::new(2, 14)
    ));
}

#[test]
fn cancelled_policy_lands_in_history() {
    let mut scheduler = quiet_scheduler(100);
    let snapshot = scenario_snapshot();
    scheduler
        .submit(Arc::new(economic_template()), &snapshot)
        .unwrap();
    testutil::tick_weeks(&mut scheduler, &snapshot, SimWeek::new(1, 1), SimWeek::new(1, 8));
    let event = scheduler
        .cancel(1, &snapshot.at(SimWeek::new(1, 8)))
        .unwrap();
    let SchedulerEvent::PolicyCancelled { progress, .. } = event else {
        panic!("expected cancellation event");
    };
    assert!(progress > 0.0 && progress < 100.0);
    assert!(scheduler.active_summaries().is_empty());
    assert_eq!(scheduler.history()[0].status, ImplementationStatus::Cancelled);

    // Later ticks never touch a cancelled record.
    let later = scheduler.tick(&snapshot.at(SimWeek::new(1, 30)));
    assert!(later.is_empty());
}
