use bevy_app::App;
use bevy_ecs::message::Messages;

use crate::ecs::events::PolicyMessage;
use crate::ecs::resources::CurrentSnapshot;
use crate::ecs::schedule::PolicyTick;
use crate::model::SimWeek;

/// Move the current snapshot to `week` and run one `PolicyTick`.
pub fn tick_at(app: &mut App, week: SimWeek) {
    let snapshot = app.world().resource::<CurrentSnapshot>().0.at(week);
    app.world_mut().insert_resource(CurrentSnapshot(snapshot));
    app.world_mut().run_schedule(PolicyTick);
}

/// Take every policy message currently buffered.
pub fn drain_messages(app: &mut App) -> Vec<PolicyMessage> {
    app.world_mut()
        .resource_mut::<Messages<PolicyMessage>>()
        .drain()
        .collect()
}
