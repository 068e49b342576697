use bevy_ecs::message::Message;

use crate::model::SchedulerEvent;

/// A scheduler event re-published on the bevy message bus.
///
/// Other plugins (news, scandal, UI) read these with
/// `MessageReader<PolicyMessage>` instead of polling the scheduler.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct PolicyMessage(pub SchedulerEvent);
