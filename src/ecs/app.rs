use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::IntoScheduleConfigs;

use super::events::PolicyMessage;
use super::plugin::PolicyPlugin;
use super::resources::{CurrentSnapshot, PendingSubmissions, PolicyScheduler, SubmissionResults};
use super::schedule::{PolicyPhase, configure_policy_schedule};
use crate::model::PoliticalSnapshot;
use crate::sim::SchedulerConfig;

/// Build a headless Bevy app that runs the policy scheduler once per
/// `PolicyTick`.
///
/// The host keeps `CurrentSnapshot` up to date, queues templates in
/// `PendingSubmissions`, and reads `PolicyMessage`s afterwards:
/// ```no_run
/// # use policy_sim::ecs::{build_policy_app, PolicyTick};
/// # use policy_sim::model::{PoliticalSnapshot, SimWeek};
/// # use policy_sim::sim::SchedulerConfig;
/// let snapshot = PoliticalSnapshot::new(50.0, 40.0, SimWeek::new(1, 1));
/// let mut app = build_policy_app(SchedulerConfig::default(), snapshot);
/// for _ in 0..52 {
///     app.world_mut().run_schedule(PolicyTick);
/// }
/// ```
pub fn build_policy_app(config: SchedulerConfig, snapshot: PoliticalSnapshot) -> App {
    let mut app = App::empty();

    app.insert_resource(PolicyScheduler::seeded(config));
    app.insert_resource(CurrentSnapshot(snapshot));
    app.init_resource::<PendingSubmissions>();
    app.init_resource::<SubmissionResults>();

    MessageRegistry::register_message::<PolicyMessage>(app.world_mut());

    let mut schedule = configure_policy_schedule();
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(PolicyPhase::PreUpdate));
    app.add_schedule(schedule);
    app.add_plugins(PolicyPlugin);
    app
}
