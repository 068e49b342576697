//! The implementation scheduler: capacity-bounded admission, per-week
//! progress, phase transitions, opposition challenges and retirement.
//!
//! One scheduler instance owns all of its state (active set, history, ID
//! generators, RNG). Calls are synchronous and never overlap; the clock is
//! whatever week the caller's snapshot says it is.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::accumulator;
use super::config::SchedulerConfig;
use super::error::{RestoreError, SubmitError};
use super::gate::AdmissionGate;
use super::load;
use super::phase::PhaseTable;
use super::requirements;
use super::resistance;
use super::timeline;
use crate::IdGenerator;
use crate::model::{
    Category, Complexity, Costs, EffectLedger, ImplementationRecord, ImplementationStatus,
    Opposition, PoliticalSnapshot, PolicyTemplate, SchedulerEvent,
};

const POLITICAL_COST_SCALE: f64 = 1e8;

fn complexity_cost_multiplier(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Low => 1.0,
        Complexity::Medium => 1.5,
        Complexity::High => 2.0,
    }
}

/// Political capital spent on admission.
pub fn political_cost(template: &PolicyTemplate, resistance: f64) -> u32 {
    let raw = template.base_cost / POLITICAL_COST_SCALE
        * complexity_cost_multiplier(template.complexity)
        * (1.0 + resistance / 200.0);
    raw.round().max(0.0) as u32
}

/// A successful submission: the stored record and its admission event.
#[derive(Debug, Clone, PartialEq)]
pub struct Admission {
    pub record: ImplementationRecord,
    pub event: SchedulerEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityStatus {
    pub used: u32,
    pub total: u32,
    pub available: u32,
    pub percentage: f64,
}

/// Read-only view of one in-flight policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSummary {
    pub id: u64,
    pub policy_id: String,
    pub name: String,
    pub category: Category,
    pub progress: f64,
    pub current_phase: String,
    /// Estimated weeks left.
    pub time_remaining: f64,
    pub resistance: f64,
}

/// Everything a persistence layer needs to rebuild a scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerState {
    pub capacity: u32,
    pub active: Vec<ImplementationRecord>,
    pub history: Vec<ImplementationRecord>,
}

impl SchedulerState {
    pub fn into_records(self) -> Vec<ImplementationRecord> {
        let mut records = self.active;
        records.extend(self.history);
        records
    }
}

pub struct ImplementationScheduler<R: RngCore = SmallRng> {
    capacity: u32,
    phases: Arc<PhaseTable>,
    active: BTreeMap<u64, ImplementationRecord>,
    history: Vec<ImplementationRecord>,
    implementation_ids: IdGenerator,
    challenge_ids: IdGenerator,
    rng: R,
    gate: Option<Box<dyn AdmissionGate>>,
}

impl ImplementationScheduler<SmallRng> {
    /// Scheduler with a `SmallRng` seeded from `config.seed`.
    pub fn seeded(config: SchedulerConfig) -> Self {
        let rng = SmallRng::seed_from_u64(config.seed);
        Self::new(config, rng)
    }
}

impl<R: RngCore> ImplementationScheduler<R> {
    pub fn new(config: SchedulerConfig, rng: R) -> Self {
        Self {
            capacity: config.capacity,
            phases: Arc::new(PhaseTable::standard()),
            active: BTreeMap::new(),
            history: Vec::new(),
            implementation_ids: IdGenerator::new(),
            challenge_ids: IdGenerator::new(),
            rng,
            gate: None,
        }
    }

    pub fn with_gate(mut self, gate: impl AdmissionGate + 'static) -> Self {
        self.gate = Some(Box::new(gate));
        self
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn used_capacity(&self) -> u32 {
        self.active
            .values()
            .map(|record| load::load(&record.template))
            .sum()
    }

    /// Admit `template` if it is valid, passes the gate, fits in the remaining
    /// capacity and meets its political requirements. On any rejection the
    /// scheduler is left untouched.
    pub fn submit(
        &mut self,
        template: Arc<PolicyTemplate>,
        snapshot: &PoliticalSnapshot,
    ) -> Result<Admission, SubmitError> {
        if let Err(reason) = template.validate() {
            tracing::warn!(policy_id = %template.id, %reason, "rejected invalid policy template");
            return Err(SubmitError::InvalidTemplate { reason });
        }

        if let Some(gate) = &self.gate
            && let Err(reason) = gate.check(&template, snapshot)
        {
            tracing::warn!(policy_id = %template.id, %reason, "admission gate rejected policy");
            return Err(SubmitError::ExternallyRejected { reason });
        }

        let needed = load::load(&template);
        let current = self.used_capacity();
        if current.saturating_add(needed) > self.capacity {
            tracing::warn!(
                policy_id = %template.id,
                current,
                needed,
                capacity = self.capacity,
                "not enough implementation capacity"
            );
            return Err(SubmitError::CapacityExceeded {
                current,
                available: self.capacity.saturating_sub(current),
                needed,
            });
        }

        let check = requirements::check(&template, snapshot);
        if !check.allowed {
            tracing::warn!(
                policy_id = %template.id,
                reasons = ?check.unmet_reasons,
                "policy requirements not met"
            );
            return Err(SubmitError::RequirementsNotMet {
                reasons: check.unmet_reasons,
            });
        }

        let resistance = resistance::compute_resistance(&template, snapshot);
        let timeline = timeline::compute(&template, resistance, snapshot);
        let costs = Costs {
            financial: template.base_cost,
            political: political_cost(&template, resistance),
            ongoing: template.base_cost / f64::from(timeline.planned),
        };
        let immediate = accumulator::immediate(&template);
        let started_at = snapshot.now();
        let id = self.implementation_ids.next_id();

        tracing::debug!(
            id,
            policy_id = %template.id,
            load = needed,
            resistance,
            estimated_weeks = timeline.estimated,
            "computed implementation parameters"
        );

        let record = ImplementationRecord {
            id,
            template,
            started_at,
            timeline,
            status: ImplementationStatus::Implementing,
            progress: 0.0,
            phases: Arc::clone(&self.phases),
            current_phase: 0,
            last_tick: None,
            effects: EffectLedger {
                immediate: immediate.clone(),
                ..EffectLedger::default()
            },
            opposition: Opposition {
                resistance,
                challenges: Vec::new(),
            },
            costs,
            ended_at: None,
        };

        tracing::info!(
            id,
            policy_id = %record.template.id,
            at = %started_at,
            "policy admitted"
        );

        let event = SchedulerEvent::PolicyAdmitted {
            implementation_id: id,
            policy_id: record.template.id.clone(),
            load: needed,
            immediate_effects: immediate,
            at: started_at,
        };
        self.active.insert(id, record.clone());
        Ok(Admission { record, event })
    }

    /// Advance every active record to the snapshot's week.
    ///
    /// Progress is recomputed from absolute elapsed weeks, so repeating a
    /// week (or going back in time) changes nothing: a record only moves when
    /// the snapshot is later than the last week it processed.
    pub fn tick(&mut self, snapshot: &PoliticalSnapshot) -> Vec<SchedulerEvent> {
        let now = snapshot.now();
        let mut events = Vec::new();
        let mut finished = Vec::new();

        for record in self.active.values_mut() {
            if record.last_tick.is_some_and(|last| now <= last) {
                continue;
            }
            record.last_tick = Some(now);

            let elapsed = now.weeks_since(record.started_at).max(0) as f64;
            let target = (elapsed / f64::from(record.timeline.estimated) * 100.0).min(100.0);
            let before = record.progress;
            let after = target.max(before);
            record.progress = after;

            let phase = record.phases.phase_at(after);
            if phase > record.current_phase {
                let from = record.current_phase;
                record.current_phase = phase;
                tracing::debug!(id = record.id, from, to = phase, "phase changed");
                events.push(SchedulerEvent::PhaseChanged {
                    implementation_id: record.id,
                    policy_id: record.template.id.clone(),
                    from,
                    to: phase,
                    phase: record.phases.name(phase).to_string(),
                    at: now,
                });
            }

            record.effects.ongoing.clear();
            if after > before {
                let ongoing = accumulator::ongoing(&record.template, before, after);
                if !ongoing.is_empty() {
                    record.effects.ongoing = ongoing.clone();
                    events.push(SchedulerEvent::OngoingEffectsComputed {
                        implementation_id: record.id,
                        policy_id: record.template.id.clone(),
                        effects: ongoing,
                        progress: after,
                        at: now,
                    });
                }
            }

            if let Some(challenge) = resistance::maybe_generate_challenge(
                record.opposition.resistance,
                &record.template.name,
                snapshot,
                &mut self.rng,
                &mut self.challenge_ids,
            ) {
                tracing::debug!(
                    id = record.id,
                    kind = %challenge.kind,
                    severity = challenge.severity,
                    "opposition challenge raised"
                );
                record.opposition.challenges.push(challenge.clone());
                events.push(SchedulerEvent::OppositionChallengeRaised {
                    implementation_id: record.id,
                    policy_id: record.template.id.clone(),
                    challenge,
                });
            }

            if after >= 100.0 {
                finished.push(record.id);
            }
        }

        for id in finished {
            let Some(mut record) = self.active.remove(&id) else {
                continue;
            };
            let final_effects = accumulator::final_effects(&record.template);
            record.status = ImplementationStatus::Completed;
            record.effects.final_effects = Some(final_effects.clone());
            record.ended_at = Some(now);
            tracing::info!(id, policy_id = %record.template.id, at = %now, "policy completed");
            events.push(SchedulerEvent::PolicyCompleted {
                implementation_id: id,
                policy_id: record.template.id.clone(),
                final_effects,
                at: now,
            });
            self.history.push(record);
        }

        events
    }

    /// Withdraw an in-flight policy. Its capacity is freed at once; effects
    /// already realized stay realized and no final effects are produced.
    pub fn cancel(
        &mut self,
        implementation_id: u64,
        snapshot: &PoliticalSnapshot,
    ) -> Option<SchedulerEvent> {
        let mut record = self.active.remove(&implementation_id)?;
        let now = snapshot.now();
        record.status = ImplementationStatus::Cancelled;
        record.effects.ongoing.clear();
        record.ended_at = Some(now);
        let freed_load = load::load(&record.template);
        tracing::info!(
            id = implementation_id,
            policy_id = %record.template.id,
            freed_load,
            "policy cancelled"
        );
        let event = SchedulerEvent::PolicyCancelled {
            implementation_id,
            policy_id: record.template.id.clone(),
            freed_load,
            progress: record.progress,
            at: now,
        };
        self.history.push(record);
        Some(event)
    }

    pub fn capacity_status(&self) -> CapacityStatus {
        let used = self.used_capacity();
        let percentage = if self.capacity == 0 {
            0.0
        } else {
            f64::from(used) / f64::from(self.capacity) * 100.0
        };
        CapacityStatus {
            used,
            total: self.capacity,
            available: self.capacity.saturating_sub(used),
            percentage,
        }
    }

    pub fn active_summaries(&self) -> Vec<ActiveSummary> {
        self.active
            .values()
            .map(|record| ActiveSummary {
                id: record.id,
                policy_id: record.template.id.clone(),
                name: record.template.name.clone(),
                category: record.template.category,
                progress: record.progress,
                current_phase: record.current_phase_name().to_string(),
                time_remaining: record.time_remaining(),
                resistance: record.opposition.resistance,
            })
            .collect()
    }

    pub fn active(&self, implementation_id: u64) -> Option<&ImplementationRecord> {
        self.active.get(&implementation_id)
    }

    pub fn active_records(&self) -> impl Iterator<Item = &ImplementationRecord> {
        self.active.values()
    }

    pub fn history(&self) -> &[ImplementationRecord] {
        &self.history
    }

    /// Whether any in-flight record was created from `policy_id`.
    pub fn is_active(&self, policy_id: &str) -> bool {
        self.active.values().any(|r| r.policy_id() == policy_id)
    }

    pub fn state(&self) -> SchedulerState {
        SchedulerState {
            capacity: self.capacity,
            active: self.active.values().cloned().collect(),
            history: self.history.clone(),
        }
    }

    /// Replace the active set and history with previously saved records.
    ///
    /// Trusted reload path: capacity and requirements are not re-checked.
    /// `Implementing` records become active, terminal ones go to history.
    /// Nothing changes if any record is rejected.
    pub fn restore(&mut self, records: Vec<ImplementationRecord>) -> Result<(), RestoreError> {
        let mut active = BTreeMap::new();
        let mut history = Vec::new();
        let mut seen = std::collections::BTreeSet::new();
        let mut max_challenge_id = 0;

        for record in records {
            if !seen.insert(record.id) {
                return Err(RestoreError::DuplicateId { id: record.id });
            }
            if let Err(reason) = record.template.validate() {
                return Err(RestoreError::InvalidTemplate {
                    id: record.id,
                    reason,
                });
            }
            if let Some(max) = record.opposition.challenges.iter().map(|c| c.id).max() {
                max_challenge_id = max_challenge_id.max(max);
            }
            if record.is_active() {
                active.insert(record.id, record);
            } else {
                history.push(record);
            }
        }

        if let Some(&max_id) = seen.last() {
            self.implementation_ids.advance_past(max_id);
        }
        self.challenge_ids.advance_past(max_challenge_id);

        tracing::info!(
            active = active.len(),
            history = history.len(),
            "restored scheduler state"
        );
        if active.values().map(|r| load::load(&r.template)).sum::<u32>() > self.capacity {
            tracing::warn!(capacity = self.capacity, "restored records exceed capacity");
        }

        self.active = active;
        self.history = history;
        Ok(())
    }
}
