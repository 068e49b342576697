pub mod app;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod systems;

#[cfg(test)]
pub mod test_helpers;

pub use app::build_policy_app;
pub use events::PolicyMessage;
pub use plugin::PolicyPlugin;
pub use resources::{
    CurrentSnapshot, PendingSubmissions, PolicyScheduler, SubmissionOutcome, SubmissionResults,
};
pub use schedule::{PolicyPhase, PolicyTick, configure_policy_schedule};
