//! Tuning Configuration
//!
//! Every empirically-tuned constant in the simulation, grouped by concern and
//! loadable from a TOML file for adjustment without recompiling. The defaults
//! are the canonical game-feel values; change them only with product guidance.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complete simulation tuning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub start: StartTuning,
    pub returns: ReturnsTuning,
    pub upkeep: UpkeepTuning,
    pub growth: GrowthTuning,
    pub events: EventTuning,
    pub feedback: FeedbackTuning,
}

impl Tuning {
    /// Loads tuning from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses tuning from a TOML string. Missing sections keep defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// The initial snapshot a new game starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartTuning {
    pub resources: i64,
    pub profit: i64,
    pub customers: i64,
    /// Starting value for all four dimensions.
    pub dimension_start: f32,
    pub max_rounds: u32,
    pub max_actions: u32,
}

impl Default for StartTuning {
    fn default() -> Self {
        Self {
            resources: 6,
            profit: 80,
            customers: 1000,
            dimension_start: 35.0,
            max_rounds: 10,
            max_actions: 2,
        }
    }
}

/// Diminishing-returns curve for positive gains on the three positive
/// dimensions: `gain = delta * max(min_gain_factor, 1 - current / saturation_scale)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnsTuning {
    pub saturation_scale: f32,
    pub min_gain_factor: f32,
}

impl Default for ReturnsTuning {
    fn default() -> Self {
        Self {
            saturation_scale: 120.0,
            min_gain_factor: 0.25,
        }
    }
}

/// Per-round drift, decay, and income applied before any challenge roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpkeepTuning {
    /// Monetization pressure: self-orientation creeps up every round.
    pub self_orientation_drift: f32,
    pub credibility_decay: f32,
    pub reliability_decay: f32,
    /// Intimacy fades fastest when unreinforced.
    pub intimacy_decay: f32,
    /// Resources gained per round: `max(min_resource_gain, profit / resource_divisor)`.
    pub resource_divisor: i64,
    pub min_resource_gain: i64,
    /// Flat profit loss each round trust sits below the eroding threshold.
    pub low_trust_profit_penalty: i64,
}

impl Default for UpkeepTuning {
    fn default() -> Self {
        Self {
            self_orientation_drift: 2.0,
            credibility_decay: 1.0,
            reliability_decay: 1.0,
            intimacy_decay: 1.5,
            resource_divisor: 30,
            min_resource_gain: 1,
            low_trust_profit_penalty: 5,
        }
    }
}

/// Customer growth bands keyed off the trust score at upkeep time.
/// Rates are whole percentages of the current customer count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthTuning {
    pub thriving_trust: u32,
    pub thriving_pct: f32,
    pub stable_trust: u32,
    pub stable_pct: f32,
    pub eroding_trust: u32,
    pub eroding_pct: f32,
    pub collapse_pct: f32,
    /// Customers never drop below this.
    pub customer_floor: i64,
}

impl Default for GrowthTuning {
    fn default() -> Self {
        Self {
            thriving_trust: 55,
            thriving_pct: 8.0,
            stable_trust: 40,
            stable_pct: 2.0,
            eroding_trust: 30,
            eroding_pct: -3.0,
            collapse_pct: -8.0,
            customer_floor: 100,
        }
    }
}

/// Per-round challenge probabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventTuning {
    /// Chance an eligible triggered challenge fires.
    pub triggered_chance: f32,
    /// Chance a background challenge fires when no triggered one did.
    pub background_chance: f32,
}

impl Default for EventTuning {
    fn default() -> Self {
        Self {
            triggered_chance: 0.4,
            background_chance: 0.3,
        }
    }
}

/// Sentiment tier thresholds and the feedback history cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTuning {
    /// Positive dimensions: at or above this is praise.
    pub positive_threshold: f32,
    /// Positive dimensions: at or above this is neutral.
    pub neutral_threshold: f32,
    /// Self-orientation: at or below this is praise.
    pub inverted_positive_threshold: f32,
    /// Self-orientation: at or below this is neutral.
    pub inverted_neutral_threshold: f32,
    pub history_cap: usize,
}

impl Default for FeedbackTuning {
    fn default() -> Self {
        Self {
            positive_threshold: 55.0,
            neutral_threshold: 35.0,
            inverted_positive_threshold: 25.0,
            inverted_neutral_threshold: 45.0,
            history_cap: 15,
        }
    }
}

/// Errors from loading a tuning file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] toml::de::Error),
}
