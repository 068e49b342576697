use serde::{Deserialize, Serialize};

/// Scheduler configuration: the capacity pool and the RNG seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Total capacity units shared by all in-flight policies.
    pub capacity: u32,
    /// Seed for `ImplementationScheduler::seeded`.
    pub seed: u64,
}

impl SchedulerConfig {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            seed: 42,
        }
    }
}
