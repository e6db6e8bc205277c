//! Feedback Generation
//!
//! Classifies a dimension's post-effect value into a sentiment tier and picks
//! a persona reaction from the preset's line banks.
//!
//! Polarity inverts for self-orientation: a LOW value is the good outcome, so
//! praise lives in the `low` bank and complaints in the `high` bank. Getting
//! this backwards is the classic bug here; the tests pin it down explicitly.

use rand::seq::SliceRandom;
use rand::Rng;

use trust_model::{Dimension, FeedbackSet, Preset};

use crate::config::FeedbackTuning;
use crate::state::{FeedbackEntry, Sentiment};

/// Sentiment tier for a dimension value, polarity-aware.
pub fn classify(dimension: Dimension, value: f32, tuning: &FeedbackTuning) -> Sentiment {
    if dimension.is_inverted() {
        if value <= tuning.inverted_positive_threshold {
            Sentiment::Positive
        } else if value <= tuning.inverted_neutral_threshold {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    } else if value >= tuning.positive_threshold {
        Sentiment::Positive
    } else if value >= tuning.neutral_threshold {
        Sentiment::Neutral
    } else {
        Sentiment::Negative
    }
}

/// The line bank matching a sentiment, accounting for inverted polarity.
pub fn bank<'a>(set: &'a FeedbackSet, dimension: Dimension, sentiment: Sentiment) -> &'a [String] {
    match (sentiment, dimension.is_inverted()) {
        (Sentiment::Positive, false) | (Sentiment::Negative, true) => &set.high,
        (Sentiment::Neutral, _) => &set.medium,
        (Sentiment::Positive, true) | (Sentiment::Negative, false) => &set.low,
    }
}

/// Builds one persona reaction for a dimension's post-effect value.
/// Returns `None` when the preset has no matching lines or no personas —
/// empty catalogs degrade to silence, never a panic.
pub fn generate<R: Rng>(
    preset: &Preset,
    dimension: Dimension,
    value: f32,
    tuning: &FeedbackTuning,
    rng: &mut R,
) -> Option<FeedbackEntry> {
    let sentiment = classify(dimension, value, tuning);
    let set = preset.feedback.for_dimension(dimension);
    let message = bank(set, dimension, sentiment).choose(rng)?.clone();
    let persona = preset.personas.choose(rng)?;
    Some(FeedbackEntry {
        persona_id: persona.id.clone(),
        message,
        dimension,
        sentiment,
    })
}

/// Prepends an entry and trims the history to the cap.
pub fn record(history: &mut Vec<FeedbackEntry>, entry: FeedbackEntry, cap: usize) {
    history.insert(0, entry);
    history.truncate(cap);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use trust_model::builtin::generic_preset;

    fn tuning() -> FeedbackTuning {
        FeedbackTuning::default()
    }

    #[test]
    fn test_positive_dimension_tiers() {
        assert_eq!(classify(Dimension::Credibility, 70.0, &tuning()), Sentiment::Positive);
        assert_eq!(classify(Dimension::Credibility, 55.0, &tuning()), Sentiment::Positive);
        assert_eq!(classify(Dimension::Credibility, 45.0, &tuning()), Sentiment::Neutral);
        assert_eq!(classify(Dimension::Credibility, 35.0, &tuning()), Sentiment::Neutral);
        assert_eq!(classify(Dimension::Credibility, 20.0, &tuning()), Sentiment::Negative);
    }

    #[test]
    fn test_self_orientation_polarity_inverted() {
        // Low self-orientation is the good outcome.
        assert_eq!(
            classify(Dimension::SelfOrientation, 20.0, &tuning()),
            Sentiment::Positive
        );
        assert_eq!(
            classify(Dimension::SelfOrientation, 40.0, &tuning()),
            Sentiment::Neutral
        );
        assert_eq!(
            classify(Dimension::SelfOrientation, 70.0, &tuning()),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_inverted_sentiment_pulls_from_inverted_banks() {
        let preset = generic_preset();
        let mut rng = SmallRng::seed_from_u64(7);

        // Value 20 → positive sentiment → the "low" bank.
        let entry = generate(&preset, Dimension::SelfOrientation, 20.0, &tuning(), &mut rng).unwrap();
        assert_eq!(entry.sentiment, Sentiment::Positive);
        assert!(preset.feedback.self_orientation.low.contains(&entry.message));

        // Value 70 → negative sentiment → the "high" bank.
        let entry = generate(&preset, Dimension::SelfOrientation, 70.0, &tuning(), &mut rng).unwrap();
        assert_eq!(entry.sentiment, Sentiment::Negative);
        assert!(preset.feedback.self_orientation.high.contains(&entry.message));
    }

    #[test]
    fn test_positive_dimension_pulls_from_high_bank() {
        let preset = generic_preset();
        let mut rng = SmallRng::seed_from_u64(7);
        let entry = generate(&preset, Dimension::Reliability, 80.0, &tuning(), &mut rng).unwrap();
        assert!(preset.feedback.reliability.high.contains(&entry.message));
    }

    #[test]
    fn test_empty_preset_degrades_to_none() {
        let preset = trust_model::Preset::from_toml_str(
            r#"
            id = "empty"
            name = "Empty"
            description = ""
            "#,
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(generate(&preset, Dimension::Intimacy, 50.0, &tuning(), &mut rng).is_none());
    }

    #[test]
    fn test_record_caps_history_newest_first() {
        let mut history = Vec::new();
        for i in 0..20 {
            record(
                &mut history,
                FeedbackEntry {
                    persona_id: format!("p{i}"),
                    message: String::new(),
                    dimension: Dimension::Credibility,
                    sentiment: Sentiment::Neutral,
                },
                15,
            );
        }
        assert_eq!(history.len(), 15);
        assert_eq!(history[0].persona_id, "p19");
        assert_eq!(history[14].persona_id, "p5");
    }
}
