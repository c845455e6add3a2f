//! Financial behavior score
//!
//! A pure, synchronous pipeline from purchases, a savings series and goal
//! progress to a [`ScoreResult`](crate::models::ScoreResult) on the `[-3, 3]`
//! band. The engine holds no state between calls.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nestegg_core::score::{ScoreEngine, ScoreInputs};
//!
//! let engine = ScoreEngine::new();
//! let result = engine.compute(&inputs, chrono::Utc::now())?;
//! println!("overall {:.1}", result.overall);
//! ```

pub mod engine;
pub mod impact;
pub mod stats;
pub mod validate;

pub use engine::{
    compute_score, compute_score_now, EngineOptions, ScoreEngine, ScoreInputs, Validation,
    ZeroTargetPolicy,
};
pub use impact::{format_delta, score_impact, snapshot_impact, ScoreImpact};
pub use validate::validate_inputs;
