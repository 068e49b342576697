#[macro_use]
mod macros;

pub mod challenge;
pub mod effect;
pub mod event;
pub mod policy;
pub mod record;
pub mod snapshot;
pub mod timestamp;

pub use challenge::{Challenge, ChallengeKind};
pub use effect::{Effect, EffectMap};
pub use event::SchedulerEvent;
pub use policy::{Category, Complexity, PolicyTemplate, Requirements};
pub use record::{
    Costs, EffectLedger, ImplementationRecord, ImplementationStatus, Opposition, Timeline,
    TimelineFactors,
};
pub use snapshot::{PartySupport, PoliticalSnapshot};
pub use timestamp::{SimWeek, WEEKS_PER_YEAR};
