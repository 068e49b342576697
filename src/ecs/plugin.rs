use bevy_app::{App, Plugin};

use super::systems::implementation::ImplementationPlugin;

/// Aggregate plugin for the policy systems.
///
/// Expects the resources and schedule set up by `build_policy_app`.
pub struct PolicyPlugin;

impl Plugin for PolicyPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ImplementationPlugin);
    }
}
