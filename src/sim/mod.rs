pub mod accumulator;
pub mod config;
pub mod error;
pub mod gate;
pub mod load;
pub mod phase;
pub mod requirements;
pub mod resistance;
pub mod scheduler;
pub mod timeline;

pub use config::SchedulerConfig;
pub use error::{RestoreError, SubmitError};
pub use gate::AdmissionGate;
pub use phase::{Phase, PhaseTable, PhaseTableError};
pub use requirements::RequirementCheck;
pub use scheduler::{
    ActiveSummary, Admission, CapacityStatus, ImplementationScheduler, SchedulerState,
};
