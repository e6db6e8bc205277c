//! Simulation core: the game state machine and its pure helpers.
//!
//! One [`GameEngine`] owns one [`GameState`] and exposes five transitions:
//! play initiative, apply challenge, resolve decision, advance round, reset.
//! Each transition either fully applies or rejects as a no-op. Secondary
//! effects (persona feedback, the per-round challenge roll) are not applied
//! inline — transitions push them onto a deferred queue the host drains with
//! [`GameEngine::run_deferred`], so flavor always reads committed state.
//!
//! # Architecture
//!
//! ```text
//! ┌──────┐  operation   ┌─────────────┐  reads   ┌────────┐
//! │ host │ ───────────▶ │ GameEngine  │ ───────▶ │ Preset │
//! └──────┘              │  GameState  │          └────────┘
//!     ▲                 └─────────────┘
//!     │  snapshot + deferred tasks │
//!     └───────────────────────────┘
//! ```
//!
//! All randomness (challenge rolls, feedback line and persona picks) flows
//! through one seedable RNG owned by the engine, so whole sessions replay
//! deterministically from a seed.

pub mod challenge;
pub mod config;
pub mod effects;
pub mod engine;
pub mod feedback;
pub mod state;

pub use config::{
    ConfigError, EventTuning, FeedbackTuning, GrowthTuning, ReturnsTuning, StartTuning, Tuning,
    UpkeepTuning,
};
pub use effects::GainPolicy;
pub use engine::{Deferred, GameEngine};
pub use state::{trust_rating, FeedbackEntry, GameState, Sentiment};
