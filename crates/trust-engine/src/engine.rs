//! Game Engine
//!
//! The state machine. Owns the one [`GameState`], the active preset, the
//! tuning, and the session RNG. Every failure mode here is a precondition
//! violation handled by silently rejecting the transition — invalid input
//! never panics and never partially applies.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use trust_model::{Challenge, Dimension, Initiative, Preset};

use crate::challenge::roll_challenge;
use crate::config::Tuning;
use crate::effects::{
    apply_customer_percent, apply_dimension_delta, apply_effect_map, apply_profit_delta, GainPolicy,
};
use crate::feedback;
use crate::state::{trust_rating, GameState};

/// A secondary effect queued by a transition, to run after the primary
/// transition has committed. Feedback captures the post-transition dimension
/// value at enqueue time, so later mutations cannot feed it stale data.
#[derive(Debug, Clone, PartialEq)]
pub enum Deferred {
    Feedback { dimension: Dimension, value: f32 },
    ChallengeRoll,
}

/// The simulation core. The host holds the only reference and serializes
/// all calls; transitions run synchronously to completion.
#[derive(Debug)]
pub struct GameEngine {
    preset: Preset,
    tuning: Tuning,
    state: GameState,
    rng: SmallRng,
    deferred: Vec<Deferred>,
}

impl GameEngine {
    /// A fresh game against the given preset, entropy-seeded.
    pub fn new(preset: Preset) -> Self {
        Self::build(preset, Tuning::default(), SmallRng::from_entropy())
    }

    /// A fresh game with a fixed seed, for reproducible sessions and tests.
    pub fn with_seed(preset: Preset, seed: u64) -> Self {
        Self::build(preset, Tuning::default(), SmallRng::seed_from_u64(seed))
    }

    /// A fresh game with explicit tuning and seed.
    pub fn with_tuning(preset: Preset, tuning: Tuning, seed: u64) -> Self {
        Self::build(preset, tuning, SmallRng::seed_from_u64(seed))
    }

    fn build(preset: Preset, tuning: Tuning, rng: SmallRng) -> Self {
        let state = GameState::new(&preset, &tuning);
        Self {
            preset,
            tuning,
            state,
            rng,
            deferred: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Derived trust score for the current snapshot.
    pub fn current_trust(&self) -> u32 {
        self.state.trust()
    }

    pub fn has_pending_decision(&self) -> bool {
        self.state.pending_decision.is_some()
    }

    /// Initiatives that are affordable and not yet played this game.
    pub fn available_initiatives(&self) -> Vec<&Initiative> {
        self.preset
            .initiatives
            .iter()
            .filter(|initiative| {
                initiative.cost <= self.state.resources
                    && !self.state.played_initiatives.contains(&initiative.id)
            })
            .collect()
    }

    /// Plays an initiative by id. Returns `false` (state unchanged) when any
    /// precondition fails: no actions left, unaffordable, already played,
    /// decision pending, or unknown id.
    pub fn play_initiative(&mut self, id: u32) -> bool {
        let Some(initiative) = self.preset.initiative(id).cloned() else {
            debug!(id, "initiative rejected: unknown id");
            return false;
        };
        if self.state.pending_decision.is_some() {
            debug!(id, "initiative rejected: decision pending");
            return false;
        }
        if self.state.actions_left == 0 {
            debug!(id, "initiative rejected: no actions left");
            return false;
        }
        if self.state.resources < initiative.cost {
            debug!(id, cost = initiative.cost, "initiative rejected: unaffordable");
            return false;
        }
        if self.state.played_initiatives.contains(&id) {
            debug!(id, "initiative rejected: already played");
            return false;
        }

        self.state.resources -= initiative.cost;
        self.state.actions_left -= 1;
        apply_effect_map(
            &mut self.state,
            &initiative.effects,
            GainPolicy::Diminishing,
            &self.tuning,
        );
        self.state.played_initiatives.insert(id);

        let trust = self.state.trust();
        self.state.event_log.push(format!(
            "[Round {}] Implemented \"{}\" [{}] - Trust: {}%",
            self.state.round, initiative.title, initiative.category, trust
        ));
        info!(id, title = %initiative.title, trust, "initiative played");

        if let Some(dimension) = initiative.effects.strongest_dimension() {
            self.deferred.push(Deferred::Feedback {
                dimension,
                value: self.state.dimensions.get(dimension),
            });
        }
        true
    }

    /// Applies a challenge. Called by the round's deferred roll; public
    /// because it is a top-level state mutator. A challenge carrying options
    /// becomes the pending decision and applies nothing yet.
    pub fn apply_challenge(&mut self, challenge: &Challenge) {
        if challenge.is_decision() {
            self.state.event_log.push(format!(
                "[Round {}] Decision required: {} - {}",
                self.state.round, challenge.title, challenge.description
            ));
            self.state.pending_decision = Some(challenge.clone());
            info!(title = %challenge.title, "decision pending");
            return;
        }

        apply_dimension_delta(
            &mut self.state.dimensions,
            challenge.dimension,
            challenge.effect,
            GainPolicy::Direct,
            &self.tuning.returns,
        );
        if let Some(delta) = challenge.profit_effect {
            self.state.profit = apply_profit_delta(self.state.profit, delta);
        }
        if let Some(percent) = challenge.customer_effect {
            self.state.customers = apply_customer_percent(
                self.state.customers,
                percent,
                self.tuning.growth.customer_floor,
            );
        }

        let trust = self.state.trust();
        self.state.event_log.push(format!(
            "[Round {}] Challenge: {} - {}",
            self.state.round, challenge.title, challenge.description
        ));
        self.state.current_challenge = Some(challenge.clone());
        info!(title = %challenge.title, trust, "challenge applied");

        self.deferred.push(Deferred::Feedback {
            dimension: challenge.dimension,
            value: self.state.dimensions.get(challenge.dimension),
        });
    }

    /// Resolves the pending decision by option index. No-op without a
    /// pending decision or with an out-of-range index. This is the only
    /// path that clears a pending decision.
    pub fn resolve_decision(&mut self, option_index: usize) {
        let Some(decision) = self.state.pending_decision.clone() else {
            debug!("decision rejected: none pending");
            return;
        };
        let Some(option) = decision.options.get(option_index) else {
            debug!(option_index, "decision rejected: invalid option index");
            return;
        };

        apply_effect_map(&mut self.state, &option.effects, GainPolicy::Direct, &self.tuning);
        self.state.pending_decision = None;

        let trust = self.state.trust();
        self.state.event_log.push(format!(
            "[Round {}] Chose \"{}\" - Trust: {}%",
            self.state.round, option.label, trust
        ));
        info!(label = %option.label, trust, "decision resolved");
    }

    /// Advances the round: terminal check, then upkeep (drift, decay, income,
    /// customer and profit adjustment), then a deferred challenge roll
    /// against the post-upkeep state. No-op while a decision is pending.
    pub fn next_round(&mut self) {
        if self.state.pending_decision.is_some() {
            debug!("round advance rejected: decision pending");
            return;
        }
        if self.state.game_over {
            return;
        }
        if self.state.round >= self.state.max_rounds {
            self.finish_game();
            return;
        }

        let upkeep = &self.tuning.upkeep;
        let dimensions = &mut self.state.dimensions;
        apply_dimension_delta(
            dimensions,
            Dimension::SelfOrientation,
            upkeep.self_orientation_drift,
            GainPolicy::Direct,
            &self.tuning.returns,
        );
        apply_dimension_delta(
            dimensions,
            Dimension::Credibility,
            -upkeep.credibility_decay,
            GainPolicy::Direct,
            &self.tuning.returns,
        );
        apply_dimension_delta(
            dimensions,
            Dimension::Reliability,
            -upkeep.reliability_decay,
            GainPolicy::Direct,
            &self.tuning.returns,
        );
        apply_dimension_delta(
            dimensions,
            Dimension::Intimacy,
            -upkeep.intimacy_decay,
            GainPolicy::Direct,
            &self.tuning.returns,
        );

        let trust = self.state.trust();

        let gain = (self.state.profit / upkeep.resource_divisor).max(upkeep.min_resource_gain);
        self.state.resources += gain;

        let growth = &self.tuning.growth;
        let pct = if trust >= growth.thriving_trust {
            growth.thriving_pct
        } else if trust >= growth.stable_trust {
            growth.stable_pct
        } else if trust >= growth.eroding_trust {
            growth.eroding_pct
        } else {
            growth.collapse_pct
        };
        let change = (self.state.customers as f32 * pct / 100.0).floor() as i64;
        self.state.customers = (self.state.customers + change).max(growth.customer_floor);

        if trust < growth.eroding_trust {
            self.state.profit =
                (self.state.profit - upkeep.low_trust_profit_penalty).max(0);
        }

        self.state.round += 1;
        self.state.actions_left = self.state.max_actions;
        self.state.current_challenge = None;

        let labels = &self.preset.metrics;
        self.state
            .event_log
            .push(format!("=== Round {} ===", self.state.round));
        self.state.event_log.push(format!(
            "Gained {} {}. Attention drifts: trust now {}%. {}: {}",
            gain, labels.resources_label, trust, labels.customers_label, self.state.customers
        ));
        info!(round = self.state.round, trust, "round advanced");

        self.deferred.push(Deferred::ChallengeRoll);
    }

    fn finish_game(&mut self) {
        self.state.game_over = true;
        let trust = self.state.trust();
        let dimensions = self.state.dimensions;
        let labels = self.preset.metrics.clone();

        self.state
            .event_log
            .push("=== SIMULATION COMPLETE ===".to_string());
        self.state.event_log.push(format!(
            "Final Trust Score: {}% ({})",
            trust,
            trust_rating(trust)
        ));
        self.state.event_log.push(format!(
            "Credibility {:.0} + Reliability {:.0} + Intimacy {:.0} over Self-Orientation {:.0}",
            dimensions.credibility,
            dimensions.reliability,
            dimensions.intimacy,
            dimensions.self_orientation
        ));
        self.state.event_log.push(format!(
            "Final {}: {}",
            labels.customers_label, self.state.customers
        ));
        self.state.event_log.push(format!(
            "Final {}: {}",
            labels.profit_label, self.state.profit
        ));
        info!(trust, "simulation complete");
    }

    /// Discards the whole game and starts over from the initial snapshot.
    /// Always succeeds, including mid-decision.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.preset, &self.tuning);
        self.deferred.clear();
        info!("game reset");
    }

    /// Whether secondary effects are waiting to run.
    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Runs queued secondary effects in order until the queue is empty.
    /// A challenge applied here may queue its own feedback, which also runs
    /// before this returns. Challenge rolls read the state as it stands now;
    /// feedback uses the values captured when it was queued.
    pub fn run_deferred(&mut self) {
        while !self.deferred.is_empty() {
            let batch = std::mem::take(&mut self.deferred);
            for task in batch {
                match task {
                    Deferred::Feedback { dimension, value } => {
                        let entry = feedback::generate(
                            &self.preset,
                            dimension,
                            value,
                            &self.tuning.feedback,
                            &mut self.rng,
                        );
                        if let Some(entry) = entry {
                            feedback::record(
                                &mut self.state.feedback_history,
                                entry,
                                self.tuning.feedback.history_cap,
                            );
                        }
                    }
                    Deferred::ChallengeRoll => {
                        let picked = roll_challenge(
                            &self.preset,
                            &self.state,
                            &self.tuning.events,
                            &mut self.rng,
                        )
                        .cloned();
                        if let Some(challenge) = picked {
                            self.apply_challenge(&challenge);
                        }
                    }
                }
            }
        }
    }
}
