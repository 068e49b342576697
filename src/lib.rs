pub mod catalog;
pub mod ecs;
pub mod flush;
pub mod id;
pub mod model;
pub mod sim;
pub mod testutil;

pub use catalog::{CatalogError, PolicyCatalog};
pub use id::IdGenerator;
pub use model::{
    Challenge, ChallengeKind, Effect, EffectMap, ImplementationRecord, ImplementationStatus,
    PoliticalSnapshot, PolicyTemplate, SchedulerEvent, SimWeek,
};
pub use sim::{
    ActiveSummary, Admission, CapacityStatus, ImplementationScheduler, SchedulerConfig,
    SchedulerState, SubmitError,
};
