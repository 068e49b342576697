use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

/// Schedule label for one policy-scheduler step.
/// Run manually each game week via `app.world_mut().run_schedule(PolicyTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyTick;

/// Ordered phases within each policy tick.
///
/// Phases run in declaration order: PreUpdate < Submit < Advance.
/// Submissions queued before the tick are admitted before in-flight policies
/// advance, so a policy admitted this week is ticked in the same pass.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PolicyPhase {
    PreUpdate,
    Submit,
    Advance,
}

/// Build a configured `PolicyTick` schedule with phase ordering.
///
/// Always single-threaded: the scheduler's RNG consumption order must be
/// identical across runs.
pub fn configure_policy_schedule() -> Schedule {
    let mut schedule = Schedule::new(PolicyTick);
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.configure_sets(
        (
            PolicyPhase::PreUpdate,
            PolicyPhase::Submit,
            PolicyPhase::Advance,
        )
            .chain(),
    );
    schedule
}
