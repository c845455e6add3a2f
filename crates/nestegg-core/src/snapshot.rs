//! Snapshot files
//!
//! A snapshot is one JSON document holding everything the score needs, as
//! fetched from the purchase and goal services at a single point in time:
//!
//! ```json
//! {
//!   "purchases": [{ "amount_cents": 1250, "ts": "2025-03-02T18:00:00Z", "category": "food" }],
//!   "savings": [100, 150, 210],
//!   "goals": [{ "progress_pct": 40 }],
//!   "goal_definitions": [{ "id": "1", "name": "Dining", "category": "food", "target_monthly_cents": 20000 }],
//!   "targets": { "monthly_spend": 1200 }
//! }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::goals::derive_goal_progress;
use crate::models::{Goal, GoalProgress, PurchaseRecord, SavingsPoint, ScoreTargets};
use crate::score::ScoreInputs;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub purchases: Vec<PurchaseRecord>,
    #[serde(default)]
    pub savings: Vec<SavingsPoint>,
    /// Precomputed goal progress
    #[serde(default)]
    pub goals: Vec<GoalProgress>,
    /// Goal definitions, used when `goals` is empty
    #[serde(default, alias = "goalDefinitions")]
    pub goal_definitions: Vec<Goal>,
    #[serde(default)]
    pub targets: ScoreTargets,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            purchases = snapshot.purchases.len(),
            savings_points = snapshot.savings.len(),
            goals = snapshot.goals.len(),
            goal_definitions = snapshot.goal_definitions.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Goal progress to score: explicit progress if present, otherwise derived
    /// from the goal definitions.
    pub fn goal_progress(&self, as_of: DateTime<Utc>) -> Vec<GoalProgress> {
        if !self.goals.is_empty() || self.goal_definitions.is_empty() {
            return self.goals.clone();
        }
        derive_goal_progress(&self.goal_definitions, &self.purchases, as_of)
            .into_iter()
            .map(GoalProgress::from)
            .collect()
    }

    pub fn to_inputs(&self, as_of: DateTime<Utc>) -> ScoreInputs {
        ScoreInputs {
            purchases: self.purchases.clone(),
            savings: self.savings.clone(),
            goals: self.goal_progress(as_of),
            targets: self.targets,
        }
    }
}
