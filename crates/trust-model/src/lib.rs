//! Data model for the trust simulation: dimensions, the trust equation,
//! and the preset catalog (initiatives, challenges, personas, feedback banks).
//!
//! Everything in this crate is pure data — no game state, no randomness.
//! The engine crate consumes these types read-only.

pub mod builtin;
pub mod dimensions;
pub mod preset;

pub use dimensions::{calculate_trust, Dimension, TrustDimensions};
pub use preset::{
    Category, Challenge, ChallengeOption, EffectMap, FeedbackCatalog, FeedbackSet, Initiative,
    MetricLabels, Persona, Preset, PresetError, Trigger, TriggerCondition,
};
