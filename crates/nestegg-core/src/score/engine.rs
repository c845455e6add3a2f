//! Score engine - four-category behavioral score
//!
//! Scores a month of behavior on a `[-3, 3]` band per category:
//! - **spending**: this month's spend against the monthly target (over target is negative)
//! - **saving**: trend of the savings series (least-squares slope)
//! - **budgeting**: consistency of daily spend (lower spread is higher)
//! - **goals**: average goal progress (50% maps to 0)
//!
//! `overall` is the mean of the four categories.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{
    GoalProgress, PurchaseRecord, SavingsPoint, ScoreResult, ScoreTargets, DEFAULT_MONTHLY_SPEND,
};

use super::stats::{clamp_score, linear_slope, mean, population_std, ratio_score};
use super::validate::validate_inputs;

/// How a monthly target of exactly zero is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTargetPolicy {
    /// Zero means "no target": the default target is substituted
    #[default]
    Legacy,
    /// Zero is kept as a degenerate target and scores spending as neutral
    Literal,
}

impl ZeroTargetPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Literal => "literal",
        }
    }
}

impl std::str::FromStr for ZeroTargetPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "literal" => Ok(Self::Literal),
            _ => Err(format!("Unknown zero target policy: {}", s)),
        }
    }
}

impl std::fmt::Display for ZeroTargetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input validation mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Score whatever is supplied
    #[default]
    Off,
    /// Reject negative amounts, out-of-range progress and non-finite values
    Strict,
}

/// Engine behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub zero_target: ZeroTargetPolicy,
    pub validation: Validation,
}

/// Everything the engine scores, captured at one point in time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreInputs {
    pub purchases: Vec<PurchaseRecord>,
    pub savings: Vec<SavingsPoint>,
    pub goals: Vec<GoalProgress>,
    pub targets: ScoreTargets,
}

/// Compute the score for the calendar month (UTC) containing `as_of`.
///
/// Never fails: empty inputs score neutral and a zero or missing target
/// falls back to the default of 1000.
pub fn compute_score(
    purchases: &[PurchaseRecord],
    savings: &[SavingsPoint],
    goals: &[GoalProgress],
    targets: &ScoreTargets,
    as_of: DateTime<Utc>,
) -> ScoreResult {
    score_with_policy(
        purchases,
        savings,
        goals,
        targets,
        ZeroTargetPolicy::Legacy,
        as_of,
    )
}

/// [`compute_score`] anchored at the current wall-clock time
pub fn compute_score_now(
    purchases: &[PurchaseRecord],
    savings: &[SavingsPoint],
    goals: &[GoalProgress],
    targets: &ScoreTargets,
) -> ScoreResult {
    compute_score(purchases, savings, goals, targets, Utc::now())
}

/// Configurable score engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine {
    options: EngineOptions,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// The monthly target this engine will score against
    pub fn resolve_target(&self, targets: &ScoreTargets) -> f64 {
        resolve_monthly_target(targets, self.options.zero_target)
    }

    /// Score `inputs` for the month containing `as_of`.
    ///
    /// Only fails under [`Validation::Strict`].
    pub fn compute(&self, inputs: &ScoreInputs, as_of: DateTime<Utc>) -> Result<ScoreResult> {
        if self.options.validation == Validation::Strict {
            validate_inputs(inputs)?;
        }

        let result = score_with_policy(
            &inputs.purchases,
            &inputs.savings,
            &inputs.goals,
            &inputs.targets,
            self.options.zero_target,
            as_of,
        );

        tracing::debug!(
            purchases = inputs.purchases.len(),
            savings_points = inputs.savings.len(),
            goals = inputs.goals.len(),
            spending = result.spending,
            saving = result.saving,
            budgeting = result.budgeting,
            goal_score = result.goals,
            overall = result.overall,
            "Score computed"
        );

        Ok(result)
    }

    pub fn compute_now(&self, inputs: &ScoreInputs) -> Result<ScoreResult> {
        self.compute(inputs, Utc::now())
    }
}

fn resolve_monthly_target(targets: &ScoreTargets, policy: ZeroTargetPolicy) -> f64 {
    match (targets.monthly_spend, policy) {
        (Some(t), _) if t.is_nan() => DEFAULT_MONTHLY_SPEND,
        (Some(t), ZeroTargetPolicy::Legacy) if t == 0.0 => DEFAULT_MONTHLY_SPEND,
        (Some(t), _) => t,
        (None, _) => DEFAULT_MONTHLY_SPEND,
    }
}

fn score_with_policy(
    purchases: &[PurchaseRecord],
    savings: &[SavingsPoint],
    goals: &[GoalProgress],
    targets: &ScoreTargets,
    policy: ZeroTargetPolicy,
    as_of: DateTime<Utc>,
) -> ScoreResult {
    let month: Vec<&PurchaseRecord> = purchases
        .iter()
        .filter(|p| same_month(p.ts, as_of))
        .collect();

    let spending = spending_score(&month, resolve_monthly_target(targets, policy));
    let saving = saving_score(savings);
    let budgeting = budgeting_score(&month);
    let goals = goals_score(goals);
    let overall = clamp_score((spending + saving + budgeting + goals) / 4.0);

    ScoreResult {
        spending,
        saving,
        budgeting,
        goals,
        overall,
    }
}

fn same_month(ts: DateTime<Utc>, as_of: DateTime<Utc>) -> bool {
    ts.year() == as_of.year() && ts.month() == as_of.month()
}

fn spending_score(month: &[&PurchaseRecord], target: f64) -> f64 {
    // Summed as f64 so very large cents cannot overflow
    let total_cents: f64 = month.iter().map(|p| p.amount_cents as f64).sum();
    let total_spend = total_cents / 100.0;
    clamp_score(ratio_score(total_spend, target))
}

fn saving_score(savings: &[SavingsPoint]) -> f64 {
    let values: Vec<f64> = savings.iter().map(|p| p.value).collect();
    // Coarse rescale, not a calibrated mapping
    clamp_score(linear_slope(&values) / 100.0)
}

/// Per-day totals for days with at least one purchase, in first-seen order
fn daily_totals(month: &[&PurchaseRecord]) -> Vec<f64> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut totals: Vec<f64> = Vec::new();

    for p in month {
        let day = p.ts.date_naive();
        match index.get(&day) {
            Some(&i) => totals[i] += p.amount(),
            None => {
                index.insert(day, totals.len());
                totals.push(p.amount());
            }
        }
    }

    totals
}

fn budgeting_score(month: &[&PurchaseRecord]) -> f64 {
    let totals = daily_totals(month);
    let m = mean(&totals);
    let std = population_std(&totals, m);
    let denom = if m == 0.0 || m.is_nan() { 1.0 } else { m };
    clamp_score(3.0 - std / denom)
}

fn goals_score(goals: &[GoalProgress]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    let total: f64 = goals
        .iter()
        .map(|g| clamp_score((g.progress_pct / 100.0 - 0.5) * 6.0))
        .sum();
    total / goals.len() as f64
}
