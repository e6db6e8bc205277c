//! Trust Dimensions
//!
//! The four dimensions of the trust equation and the equation itself.
//!
//! Credibility, reliability, and intimacy are "good" dimensions (higher is
//! better). Self-orientation is the divisor: it is easy to raise, hard to
//! lower, and high values erase gains made everywhere else.

use serde::{Deserialize, Serialize};

/// Lower bound for the three positive dimensions.
pub const DIMENSION_MIN: f32 = 0.0;
/// Upper bound for every dimension.
pub const DIMENSION_MAX: f32 = 100.0;
/// Self-orientation never drops below this, no matter how selfless the play.
pub const SELF_ORIENTATION_FLOOR: f32 = 5.0;
/// The equation divides by at least this, so a floored self-orientation
/// cannot blow the score up.
pub const DENOMINATOR_FLOOR: f32 = 10.0;

/// One of the four trust dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Credibility,
    Reliability,
    Intimacy,
    SelfOrientation,
}

impl Dimension {
    /// All dimensions in declaration order. This order breaks ties when an
    /// effect touches several dimensions equally hard.
    pub const ALL: [Dimension; 4] = [
        Dimension::Credibility,
        Dimension::Reliability,
        Dimension::Intimacy,
        Dimension::SelfOrientation,
    ];

    /// True for self-orientation, where lower values are better.
    pub fn is_inverted(self) -> bool {
        matches!(self, Dimension::SelfOrientation)
    }

    /// Clamps a raw value into this dimension's legal range.
    pub fn clamp_value(self, value: f32) -> f32 {
        let floor = if self.is_inverted() {
            SELF_ORIENTATION_FLOOR
        } else {
            DIMENSION_MIN
        };
        value.clamp(floor, DIMENSION_MAX)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Credibility => "Credibility",
            Dimension::Reliability => "Reliability",
            Dimension::Intimacy => "Intimacy",
            Dimension::SelfOrientation => "Self-Orientation",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The four dimension values. Invariant: every accessor that writes through
/// [`TrustDimensions::set`] keeps each value inside its legal range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustDimensions {
    pub credibility: f32,
    pub reliability: f32,
    pub intimacy: f32,
    pub self_orientation: f32,
}

impl TrustDimensions {
    /// All four dimensions set to the same starting value.
    pub fn uniform(value: f32) -> Self {
        Self {
            credibility: value,
            reliability: value,
            intimacy: value,
            self_orientation: value,
        }
    }

    pub fn get(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Credibility => self.credibility,
            Dimension::Reliability => self.reliability,
            Dimension::Intimacy => self.intimacy,
            Dimension::SelfOrientation => self.self_orientation,
        }
    }

    /// Writes a value, clamped into the dimension's legal range.
    pub fn set(&mut self, dimension: Dimension, value: f32) {
        let value = dimension.clamp_value(value);
        match dimension {
            Dimension::Credibility => self.credibility = value,
            Dimension::Reliability => self.reliability = value,
            Dimension::Intimacy => self.intimacy = value,
            Dimension::SelfOrientation => self.self_orientation = value,
        }
    }
}

/// The trust equation:
/// `trust = ((credibility + reliability + intimacy) / max(self_orientation, 10)) * 10`,
/// rounded and clamped to [0, 100].
///
/// Total over all inputs — the denominator floor keeps a minimal
/// self-orientation from dividing by something near zero.
pub fn calculate_trust(dimensions: &TrustDimensions) -> u32 {
    let numerator = dimensions.credibility + dimensions.reliability + dimensions.intimacy;
    let denominator = dimensions.self_orientation.max(DENOMINATOR_FLOOR);
    let score = (numerator / denominator * 10.0).round();
    score.clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_equation_balanced() {
        // Numerator 120 over denominator 40, times 10.
        let dims = TrustDimensions::uniform(40.0);
        assert_eq!(calculate_trust(&dims), 30);
    }

    #[test]
    fn test_trust_equation_denominator_floor() {
        // Self-orientation 5 divides as 10, not 5.
        let dims = TrustDimensions {
            credibility: 30.0,
            reliability: 30.0,
            intimacy: 30.0,
            self_orientation: 5.0,
        };
        assert_eq!(calculate_trust(&dims), 90);
    }

    #[test]
    fn test_trust_equation_clamps_to_100() {
        let dims = TrustDimensions {
            credibility: 100.0,
            reliability: 100.0,
            intimacy: 100.0,
            self_orientation: 5.0,
        };
        assert_eq!(calculate_trust(&dims), 100);
    }

    #[test]
    fn test_trust_equation_high_self_orientation() {
        let dims = TrustDimensions {
            credibility: 50.0,
            reliability: 50.0,
            intimacy: 50.0,
            self_orientation: 100.0,
        };
        assert_eq!(calculate_trust(&dims), 15);
    }

    #[test]
    fn test_clamp_value_floors() {
        assert_eq!(Dimension::Credibility.clamp_value(-10.0), 0.0);
        assert_eq!(Dimension::SelfOrientation.clamp_value(-10.0), 5.0);
        assert_eq!(Dimension::Intimacy.clamp_value(250.0), 100.0);
    }

    #[test]
    fn test_set_keeps_bounds() {
        let mut dims = TrustDimensions::uniform(35.0);
        dims.set(Dimension::SelfOrientation, 1.0);
        assert_eq!(dims.self_orientation, 5.0);
        dims.set(Dimension::Reliability, 180.0);
        assert_eq!(dims.reliability, 100.0);
    }

    #[test]
    fn test_dimension_serialization() {
        let json = serde_json::to_string(&Dimension::SelfOrientation).unwrap();
        assert_eq!(json, r#""self_orientation""#);
        let parsed: Dimension = serde_json::from_str(r#""credibility""#).unwrap();
        assert_eq!(parsed, Dimension::Credibility);
    }
}
