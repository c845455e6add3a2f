//! Nestegg Core Library
//!
//! Shared functionality for the Nestegg financial behavior score:
//! - Purchase, savings and goal models
//! - Four-category score engine (spending, saving, budgeting, goals)
//! - Goal progress derived from category spending
//! - Per-purchase score impact
//! - Configuration with embedded defaults and file overrides

pub mod config;
pub mod error;
pub mod goals;
pub mod models;
pub mod score;
pub mod snapshot;

pub use config::{Config, EngineConfig};
pub use error::{Error, Result};
pub use goals::derive_goal_progress;
pub use models::{
    score_to_percent, Goal, GoalProgress, GoalStatus, PurchaseRecord, SavingsPoint, ScoreCategory,
    ScoreResult, ScoreTargets, DEFAULT_MONTHLY_SPEND, SCORE_MAX, SCORE_MIN,
};
pub use score::{
    compute_score, compute_score_now, format_delta, score_impact, snapshot_impact, EngineOptions,
    ScoreEngine, ScoreImpact, ScoreInputs, Validation, ZeroTargetPolicy,
};
pub use snapshot::Snapshot;
