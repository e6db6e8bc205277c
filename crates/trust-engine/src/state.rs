//! Game State
//!
//! The single mutable aggregate. Only the engine writes it; everyone else
//! reads snapshots.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use trust_model::{calculate_trust, Challenge, Dimension, Preset, TrustDimensions};

use crate::config::Tuning;

/// How a persona's reaction reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// One persona reaction, newest first in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub persona_id: String,
    pub message: String,
    pub dimension: Dimension,
    pub sentiment: Sentiment,
}

/// The full game state. Created by [`GameState::new`], mutated exclusively
/// through the engine's five transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub resources: i64,
    /// Floored at 0 after every update.
    pub profit: i64,
    /// Floored at the configured customer floor after every update.
    pub customers: i64,
    pub dimensions: TrustDimensions,
    pub round: u32,
    pub max_rounds: u32,
    pub actions_left: u32,
    pub max_actions: u32,
    /// Initiative ids consumed this game. Never cleared between rounds.
    pub played_initiatives: HashSet<u32>,
    /// Last auto-applied challenge, for display.
    pub current_challenge: Option<Challenge>,
    /// While set, initiatives and round advance are blocked.
    pub pending_decision: Option<Challenge>,
    /// Append-only, chronological.
    pub event_log: Vec<String>,
    pub game_over: bool,
    /// Most-recent-first, capped by tuning.
    pub feedback_history: Vec<FeedbackEntry>,
}

impl GameState {
    /// The initial snapshot for a fresh game, log seeded with welcome lines.
    pub fn new(preset: &Preset, tuning: &Tuning) -> Self {
        let start = &tuning.start;
        Self {
            resources: start.resources,
            profit: start.profit,
            customers: start.customers,
            dimensions: TrustDimensions::uniform(start.dimension_start),
            round: 1,
            max_rounds: start.max_rounds,
            actions_left: start.max_actions,
            max_actions: start.max_actions,
            played_initiatives: HashSet::new(),
            current_challenge: None,
            pending_decision: None,
            event_log: vec![
                format!("Welcome to Trust Builder! {}", preset.welcome_message),
                format!(
                    "The simulation runs for {} rounds. Choose up to {} initiatives per round.",
                    start.max_rounds, start.max_actions
                ),
            ],
            game_over: false,
            feedback_history: Vec::new(),
        }
    }

    /// Derived trust score. Never cached across a dimension mutation.
    pub fn trust(&self) -> u32 {
        calculate_trust(&self.dimensions)
    }
}

/// Rating tier for the end-of-game summary.
pub fn trust_rating(trust: u32) -> &'static str {
    if trust >= 70 {
        "Exceptional"
    } else if trust >= 50 {
        "Strong"
    } else if trust >= 35 {
        "Moderate"
    } else if trust >= 20 {
        "Weak"
    } else {
        "Critical"
    }
}
