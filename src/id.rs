use serde::{Deserialize, Serialize};

/// Monotonic ID source for implementation records and challenges.
///
/// Each scheduler owns its own generators, so two schedulers can hand out
/// the same numbers without interfering. After a restore the generator is
/// advanced past every reloaded ID so new IDs never collide with old ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn starting_from(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Make sure `seen` will never be handed out again.
    pub fn advance_past(&mut self, seen: u64) {
        self.next = self.next.max(seen.saturating_add(1));
    }

    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
