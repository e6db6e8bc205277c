//! Effect Application
//!
//! Pure helpers that apply bounded deltas to dimensions and counters.
//!
//! Positive gains on credibility/reliability/intimacy run through a
//! diminishing-returns curve; penalties land at full magnitude, and
//! self-orientation always applies directly — the divisor is meant to be
//! easy to damage and hard to repair.

use trust_model::{Dimension, EffectMap, TrustDimensions};

use crate::config::{ReturnsTuning, Tuning};
use crate::state::GameState;

/// Which gain policy a transition applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainPolicy {
    /// Positive gains on positive dimensions are damped by current value.
    /// Used by initiatives.
    Diminishing,
    /// Everything applies at full magnitude. Used by challenges, decisions,
    /// and round upkeep.
    Direct,
}

/// The damped gain for a positive delta at the given current value:
/// `delta * max(min_gain_factor, 1 - current / saturation_scale)`.
pub fn diminished_gain(current: f32, delta: f32, returns: &ReturnsTuning) -> f32 {
    let factor = (1.0 - current / returns.saturation_scale).max(returns.min_gain_factor);
    delta * factor
}

/// Applies one dimension delta under a policy, clamping into the
/// dimension's legal range.
pub fn apply_dimension_delta(
    dimensions: &mut TrustDimensions,
    dimension: Dimension,
    delta: f32,
    policy: GainPolicy,
    returns: &ReturnsTuning,
) {
    if delta == 0.0 {
        return;
    }
    let current = dimensions.get(dimension);
    let applied = match policy {
        GainPolicy::Diminishing if delta > 0.0 && !dimension.is_inverted() => {
            diminished_gain(current, delta, returns)
        }
        _ => delta,
    };
    dimensions.set(dimension, current + applied);
}

/// Additive profit change, floored at zero.
pub fn apply_profit_delta(profit: i64, delta: i64) -> i64 {
    (profit + delta).max(0)
}

/// Percentage change to the customer count, floored.
pub fn apply_customer_percent(customers: i64, percent: f32, floor: i64) -> i64 {
    let scaled = (customers as f32 * (1.0 + percent / 100.0)).floor() as i64;
    scaled.max(floor)
}

/// Applies a full effects map to the state: dimension deltas under the given
/// policy, profit additively, customers as a percentage.
pub fn apply_effect_map(
    state: &mut GameState,
    effects: &EffectMap,
    policy: GainPolicy,
    tuning: &Tuning,
) {
    for (dimension, delta) in effects.dimension_deltas() {
        apply_dimension_delta(&mut state.dimensions, dimension, delta, policy, &tuning.returns);
    }
    if effects.profit != 0 {
        state.profit = apply_profit_delta(state.profit, effects.profit);
    }
    if effects.customers != 0.0 {
        state.customers =
            apply_customer_percent(state.customers, effects.customers, tuning.growth.customer_floor);
    }
}
