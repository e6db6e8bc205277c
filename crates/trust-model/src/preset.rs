//! Preset Catalog
//!
//! An immutable content catalog for one industry scenario: the initiatives a
//! player can buy, the challenges that can hit them, the personas who react,
//! and the feedback line banks those reactions draw from.
//!
//! Presets are authored as TOML. The engine only ever reads them; it makes no
//! assumption beyond type shape and tolerates empty lists.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dimensions::Dimension;

/// Initiative category. Closed set — the game branches on these, so new
/// categories are a code change, not a content change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Good but expensive.
    Investment,
    /// Mixed effects, not obviously good or bad.
    TradeOff,
    /// Things you have to do to survive.
    Necessary,
    /// High short-term gain, significant trust cost.
    Tempting,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Category::Investment => "investment",
            Category::TradeOff => "trade-off",
            Category::Necessary => "necessary",
            Category::Tempting => "tempting",
        };
        f.write_str(tag)
    }
}

/// Signed deltas an initiative, challenge option, or decision applies.
/// Dimension deltas are points; `profit` is additive; `customers` is a
/// percentage of the current count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectMap {
    pub credibility: f32,
    pub reliability: f32,
    pub intimacy: f32,
    pub self_orientation: f32,
    pub profit: i64,
    pub customers: f32,
}

impl EffectMap {
    /// Dimension deltas in declaration order.
    pub fn dimension_deltas(&self) -> [(Dimension, f32); 4] {
        [
            (Dimension::Credibility, self.credibility),
            (Dimension::Reliability, self.reliability),
            (Dimension::Intimacy, self.intimacy),
            (Dimension::SelfOrientation, self.self_orientation),
        ]
    }

    /// The dimension this map hits hardest (largest absolute delta).
    /// Ties go to the earliest dimension in declaration order.
    pub fn strongest_dimension(&self) -> Option<Dimension> {
        let mut strongest: Option<(Dimension, f32)> = None;
        for (dimension, delta) in self.dimension_deltas() {
            if delta == 0.0 {
                continue;
            }
            match strongest {
                Some((_, best)) if delta.abs() <= best.abs() => {}
                _ => strongest = Some((dimension, delta)),
            }
        }
        strongest.map(|(dimension, _)| dimension)
    }
}

/// A one-time purchasable action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Resource units consumed when played.
    pub cost: i64,
    pub category: Category,
    pub effects: EffectMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// State condition under which a triggered challenge becomes eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCondition {
    /// Reliability below threshold.
    LowReliability,
    /// Self-orientation above threshold.
    HighSelfOrientation,
    /// Profit below threshold.
    LowProfit,
    /// Derived trust score above threshold.
    HighTrust,
    /// Background event, always eligible.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub condition: TriggerCondition,
    #[serde(default)]
    pub threshold: f32,
}

/// One branch of a forced decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeOption {
    pub label: String,
    pub effects: EffectMap,
}

/// A random or state-triggered event. A challenge carrying options does not
/// auto-apply — it becomes a pending decision the player must resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    /// Dimension hit by the automatic effect.
    pub dimension: Dimension,
    /// Automatic effect magnitude (ignored while options are pending).
    pub effect: f32,
    /// Additive profit delta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_effect: Option<i64>,
    /// Percentage change to the customer count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_effect: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChallengeOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
}

impl Challenge {
    /// True when the challenge forces a choice instead of auto-applying.
    pub fn is_decision(&self) -> bool {
        !self.options.is_empty()
    }

    /// True for always-eligible background events (no trigger, or `random`).
    pub fn is_background(&self) -> bool {
        match &self.trigger {
            None => true,
            Some(trigger) => trigger.condition == TriggerCondition::Random,
        }
    }
}

/// A stakeholder who reacts to the player's moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// Feedback lines for one dimension, split by band. For self-orientation the
/// `low` bank holds the praise — low self-orientation is the good outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackSet {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

/// One feedback set per dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackCatalog {
    pub credibility: FeedbackSet,
    pub reliability: FeedbackSet,
    pub intimacy: FeedbackSet,
    pub self_orientation: FeedbackSet,
}

impl FeedbackCatalog {
    pub fn for_dimension(&self, dimension: Dimension) -> &FeedbackSet {
        match dimension {
            Dimension::Credibility => &self.credibility,
            Dimension::Reliability => &self.reliability,
            Dimension::Intimacy => &self.intimacy,
            Dimension::SelfOrientation => &self.self_orientation,
        }
    }
}

/// Display labels for the three scenario metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricLabels {
    pub resources_label: String,
    pub profit_label: String,
    pub customers_label: String,
}

impl Default for MetricLabels {
    fn default() -> Self {
        Self {
            resources_label: "Resources".to_string(),
            profit_label: "Profit".to_string(),
            customers_label: "Customers".to_string(),
        }
    }
}

/// A complete industry scenario catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub metrics: MetricLabels,
    #[serde(default)]
    pub initiatives: Vec<Initiative>,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub personas: Vec<Persona>,
    #[serde(default)]
    pub feedback: FeedbackCatalog,
    /// Lessons surfaced at game over.
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub welcome_message: String,
    #[serde(default)]
    pub goal_description: String,
}

impl Preset {
    /// Loads a preset from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PresetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a preset from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, PresetError> {
        Ok(toml::from_str(content)?)
    }

    /// Looks up an initiative by id. Fails closed on unknown ids.
    pub fn initiative(&self, id: u32) -> Option<&Initiative> {
        self.initiatives.iter().find(|initiative| initiative.id == id)
    }
}

/// Errors from loading a preset catalog.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to read preset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse preset: {0}")]
    Parse(#[from] toml::de::Error),
}
