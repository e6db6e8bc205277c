//! Challenge Selection
//!
//! Trigger-condition evaluation and the weighted per-round roll. At most one
//! challenge surfaces per round advance: eligible triggered challenges get
//! first claim, background events fill in behind them.

use rand::seq::SliceRandom;
use rand::Rng;

use trust_model::{Challenge, Preset, TriggerCondition};

use crate::config::EventTuning;
use crate::state::GameState;

/// Whether a challenge's trigger condition currently holds. Background
/// events (`random` or no trigger) are not "triggered" in this sense.
pub fn trigger_met(challenge: &Challenge, state: &GameState) -> bool {
    let Some(trigger) = &challenge.trigger else {
        return false;
    };
    match trigger.condition {
        TriggerCondition::LowReliability => state.dimensions.reliability < trigger.threshold,
        TriggerCondition::HighSelfOrientation => {
            state.dimensions.self_orientation > trigger.threshold
        }
        TriggerCondition::LowProfit => (state.profit as f32) < trigger.threshold,
        TriggerCondition::HighTrust => (state.trust() as f32) > trigger.threshold,
        TriggerCondition::Random => false,
    }
}

/// Rolls for the round's challenge against the post-upkeep state.
///
/// Eligible triggered challenges fire with `triggered_chance`; if that roll
/// fails (or none are eligible), background challenges fire with
/// `background_chance`. Empty challenge lists simply never fire.
pub fn roll_challenge<'a, R: Rng>(
    preset: &'a Preset,
    state: &GameState,
    tuning: &EventTuning,
    rng: &mut R,
) -> Option<&'a Challenge> {
    let triggered: Vec<&Challenge> = preset
        .challenges
        .iter()
        .filter(|challenge| trigger_met(challenge, state))
        .collect();
    if !triggered.is_empty() && rng.gen::<f32>() < tuning.triggered_chance {
        return triggered.choose(rng).copied();
    }

    let background: Vec<&Challenge> = preset
        .challenges
        .iter()
        .filter(|challenge| challenge.is_background())
        .collect();
    if !background.is_empty() && rng.gen::<f32>() < tuning.background_chance {
        return background.choose(rng).copied();
    }

    None
}
