//! Opposition resistance and the per-tick challenge roll.
//!
//! This is the only stochastic step in the scheduler. The roll takes the RNG
//! as `&mut dyn RngCore` so callers can inject a seeded or scripted source.

use rand::{Rng, RngCore};

use crate::IdGenerator;
use crate::model::{Category, Challenge, ChallengeKind, PoliticalSnapshot, PolicyTemplate};

const OPPOSITION_NEUTRAL: f64 = 50.0;
const OPPOSITION_WEIGHT: f64 = 0.4;
const COST_SCALE: f64 = 1e9;
const COST_WEIGHT: f64 = 10.0;
const COST_CAP: f64 = 20.0;

fn category_base_resistance(category: Category) -> f64 {
    match category {
        Category::Economic => 20.0,
        Category::Social => 30.0,
        Category::Environmental => 25.0,
        Category::Foreign => 35.0,
    }
}

/// Opposition resistance in [0, 100].
pub fn compute_resistance(template: &PolicyTemplate, snapshot: &PoliticalSnapshot) -> f64 {
    let base = category_base_resistance(template.category);
    let opposition = (snapshot.opposition_strength - OPPOSITION_NEUTRAL) * OPPOSITION_WEIGHT;
    let cost = (template.base_cost / COST_SCALE * COST_WEIGHT).min(COST_CAP);
    (base + opposition + cost).clamp(0.0, 100.0)
}

/// Chance of a challenge each tick, in [0, 0.5].
pub fn challenge_probability_per_tick(resistance: f64) -> f64 {
    resistance.clamp(0.0, 100.0) / 200.0
}

/// Roll for an opposition challenge against `policy_name`.
///
/// Draws one uniform value for the threshold; kind and severity are only
/// drawn when the roll succeeds.
pub fn maybe_generate_challenge(
    resistance: f64,
    policy_name: &str,
    snapshot: &PoliticalSnapshot,
    rng: &mut dyn RngCore,
    ids: &mut IdGenerator,
) -> Option<Challenge> {
    let roll: f64 = rng.random_range(0.0..1.0);
    if roll >= challenge_probability_per_tick(resistance) {
        return None;
    }

    let kind = ChallengeKind::ALL[rng.random_range(0..ChallengeKind::ALL.len())];
    let severity = rng.random_range(1..=3u8);
    Some(Challenge {
        id: ids.next_id(),
        kind,
        severity,
        description: kind.describe(policy_name),
        raised_at: snapshot.now(),
        resolved: false,
    })
}
