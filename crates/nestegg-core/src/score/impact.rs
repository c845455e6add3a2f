//! Per-purchase score impact

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{PurchaseRecord, ScoreResult};
use crate::snapshot::Snapshot;

use super::engine::{ScoreEngine, ScoreInputs};

/// Score before and after a purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreImpact {
    pub before: ScoreResult,
    pub after: ScoreResult,
    /// Change in the overall score
    pub delta: f64,
}

impl ScoreImpact {
    fn between(before: ScoreResult, after: ScoreResult) -> Self {
        Self {
            before,
            after,
            delta: after.overall - before.overall,
        }
    }
}

/// Score `base` with and without `purchase` added.
pub fn score_impact(
    engine: &ScoreEngine,
    base: &ScoreInputs,
    purchase: &PurchaseRecord,
    as_of: DateTime<Utc>,
) -> Result<ScoreImpact> {
    let before = engine.compute(base, as_of)?;

    let mut with_purchase = base.clone();
    with_purchase.purchases.push(purchase.clone());
    let after = engine.compute(&with_purchase, as_of)?;

    Ok(ScoreImpact::between(before, after))
}

/// Score `snapshot` with and without `purchase` added.
///
/// Goal progress derived from goal definitions is recomputed on the
/// augmented purchases, so spending in a goal's category moves the goals
/// score too.
pub fn snapshot_impact(
    engine: &ScoreEngine,
    snapshot: &Snapshot,
    purchase: &PurchaseRecord,
    as_of: DateTime<Utc>,
) -> Result<ScoreImpact> {
    let before = engine.compute(&snapshot.to_inputs(as_of), as_of)?;

    let mut with_purchase = snapshot.clone();
    with_purchase.purchases.push(purchase.clone());
    let after = engine.compute(&with_purchase.to_inputs(as_of), as_of)?;

    Ok(ScoreImpact::between(before, after))
}

/// Signed one-decimal label, e.g. `+0.4`, `-1.2`, `0.0`
///
/// Ties round away from zero (`0.25` is `+0.3`).
pub fn format_delta(delta: f64) -> String {
    let sign = if delta > 0.0 { "+" } else { "" };
    let rounded = (delta * 10.0).round() / 10.0;
    format!("{}{:.1}", sign, rounded)
}
