//! Immediate, ongoing and final effect payloads.
//!
//! A range effect realizes along a straight line in progress: at admission it
//! delivers the immediate share of `min`, at completion `max`. Its ongoing
//! payloads are the increments of that line between two progress readings, so
//! immediate + every ongoing increment == final no matter how the rollout was
//! sliced into ticks. A scalar effect pays `value` spread evenly over progress
//! on top of its immediate share.
//!
//! All functions are pure; applying the maps to game state is the caller's job.

use crate::model::{Effect, EffectMap, PolicyTemplate};

/// Share of each effect realized the moment a policy is admitted.
pub const IMMEDIATE_SHARE: f64 = 0.2;

fn immediate_value(effect: &Effect) -> f64 {
    match *effect {
        Effect::Scalar(value) => value * IMMEDIATE_SHARE,
        Effect::Range { min, .. } => min * IMMEDIATE_SHARE,
    }
}

/// Cumulative value of a range effect realized at `progress` percent.
fn realized_at(min: f64, max: f64, progress: f64) -> f64 {
    let p = progress.clamp(0.0, 100.0) / 100.0;
    let start = min * IMMEDIATE_SHARE;
    start + (max - start) * p
}

fn ongoing_value(effect: &Effect, progress_before: f64, progress_after: f64) -> f64 {
    match *effect {
        Effect::Scalar(value) => {
            let before = progress_before.clamp(0.0, 100.0);
            let after = progress_after.clamp(0.0, 100.0);
            value * (after - before) / 100.0
        }
        Effect::Range { min, max } => {
            realized_at(min, max, progress_after) - realized_at(min, max, progress_before)
        }
    }
}

pub fn immediate(template: &PolicyTemplate) -> EffectMap {
    template
        .effects
        .iter()
        .map(|(name, effect)| (name.clone(), immediate_value(effect)))
        .collect()
}

/// Increment realized between two progress readings. Zero increments are omitted.
pub fn ongoing(template: &PolicyTemplate, progress_before: f64, progress_after: f64) -> EffectMap {
    template
        .effects
        .iter()
        .filter_map(|(name, effect)| {
            let delta = ongoing_value(effect, progress_before, progress_after);
            (delta != 0.0).then(|| (name.clone(), delta))
        })
        .collect()
}

pub fn final_effects(template: &PolicyTemplate) -> EffectMap {
    template
        .effects
        .iter()
        .map(|(name, effect)| (name.clone(), effect.full_value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Complexity};
    use crate::testutil::{economic_template, template};

    fn mixed_template() -> PolicyTemplate {
        let mut t = template(Category::Social, Complexity::Medium);
        t.effects.insert("approval".to_string(), Effect::Range { min: 1.0, max: 5.0 });
        t.effects.insert("budget".to_string(), Effect::Scalar(-10.0));
        t.effects.insert("inert".to_string(), Effect::Range { min: 0.0, max: 0.0 });
        t
    }

    #[test]
    fn immediate_takes_fifth_of_min_or_scalar() {
        let effects = immediate(&mixed_template());
        assert!((effects["approval"] - 0.2).abs() < 1e-12);
        assert!((effects["budget"] + 2.0).abs() < 1e-12);
        assert_eq!(effects["inert"], 0.0);
    }

    #[test]
    fn final_takes_max_or_scalar() {
        let effects = final_effects(&mixed_template());
        assert_eq!(effects["approval"], 5.0);
        assert_eq!(effects["budget"], -10.0);
    }

    #[test]
    fn ongoing_omits_zero_deltas() {
        let effects = ongoing(&mixed_template(), 10.0, 30.0);
        assert!(!effects.contains_key("inert"));
        assert!(effects.contains_key("approval"));
        assert!(ongoing(&mixed_template(), 30.0, 30.0).is_empty());
    }

    #[test]
    fn ongoing_is_increment_of_interpolated_value() {
        // realized(p) = 0.2 + (5 - 0.2) * p; from 25% to 50% adds 4.8 * 0.25
        let effects = ongoing(&economic_template(), 25.0, 50.0);
        assert!((effects["approval"] - 1.2).abs() < 1e-12);
    }

    #[test]
    fn scalar_ongoing_is_value_times_progress_delta() {
        let t = mixed_template();
        assert!((ongoing(&t, 0.0, 50.0)["budget"] + 5.0).abs() < 1e-12);
        assert!((ongoing(&t, 50.0, 75.0)["budget"] + 2.5).abs() < 1e-12);
    }

    #[test]
    fn scalar_steps_sum_to_full_value() {
        let t = mixed_template();
        let readings = [0.0, 12.5, 40.0, 40.0, 99.0, 100.0];
        let total: f64 = readings
            .windows(2)
            .filter_map(|pair| ongoing(&t, pair[0], pair[1]).get("budget").copied())
            .sum();
        assert!((total + 10.0).abs() < 1e-9);
    }

    #[test]
    fn single_step_conserves_range_total() {
        let t = mixed_template();
        let start = immediate(&t);
        let step = ongoing(&t, 0.0, 100.0);
        let done = final_effects(&t);
        assert!((start["approval"] + step["approval"] - done["approval"]).abs() < 1e-9);
    }

    #[test]
    fn many_uneven_steps_conserve_range_total() {
        let t = mixed_template();
        let readings = [0.0, 3.3, 3.3, 17.0, 49.9, 50.0, 88.8, 99.99, 100.0];
        let mut totals = immediate(&t);
        for pair in readings.windows(2) {
            for (name, delta) in ongoing(&t, pair[0], pair[1]) {
                *totals.entry(name).or_insert(0.0) += delta;
            }
        }
        let done = final_effects(&t);
        assert!((totals["approval"] - done["approval"]).abs() < 1e-9);
    }

    #[test]
    fn negative_range_moves_toward_max() {
        let mut t = template(Category::Environmental, Complexity::High);
        t.effects.insert("emissions".to_string(), Effect::Range { min: -10.0, max: -4.0 });
        let step = ongoing(&t, 0.0, 50.0);
        // from -2.0 toward -4.0
        assert!((step["emissions"] + 1.0).abs() < 1e-12);
    }
}
