//! Domain models for Nestegg

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lower bound of every score
pub const SCORE_MIN: f64 = -3.0;

/// Upper bound of every score
pub const SCORE_MAX: f64 = 3.0;

/// Monthly spending target used when none is configured
pub const DEFAULT_MONTHLY_SPEND: f64 = 1000.0;

/// A single spending event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Amount in cents. Missing amounts count as zero.
    #[serde(default)]
    pub amount_cents: i64,
    /// When the purchase happened. Month and day buckets use the UTC date.
    pub ts: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
}

impl PurchaseRecord {
    pub fn new(amount_cents: i64, ts: DateTime<Utc>) -> Self {
        Self {
            amount_cents,
            ts,
            category: None,
            merchant: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    /// Amount in whole currency units
    pub fn amount(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }
}

/// One snapshot of the saved amount. Order in the series is the time step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSavingsPoint")]
pub struct SavingsPoint {
    pub value: f64,
}

impl SavingsPoint {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl From<f64> for SavingsPoint {
    fn from(value: f64) -> Self {
        Self { value }
    }
}

/// Snapshots accept either a bare number or `{ "value": n }`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSavingsPoint {
    Bare(f64),
    Point { value: f64 },
}

impl From<RawSavingsPoint> for SavingsPoint {
    fn from(raw: RawSavingsPoint) -> Self {
        match raw {
            RawSavingsPoint::Bare(value) | RawSavingsPoint::Point { value } => Self { value },
        }
    }
}

/// Current completion of one financial goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Completion percentage, 0-100. Missing values count as zero.
    #[serde(default, alias = "progressPct")]
    pub progress_pct: f64,
}

impl GoalProgress {
    pub fn new(progress_pct: f64) -> Self {
        Self {
            goal_id: None,
            name: None,
            progress_pct,
        }
    }
}

/// Tunable score targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTargets {
    /// Monthly spending ceiling in currency units
    #[serde(default, alias = "monthlySpend", skip_serializing_if = "Option::is_none")]
    pub monthly_spend: Option<f64>,
}

impl ScoreTargets {
    pub fn monthly(monthly_spend: f64) -> Self {
        Self {
            monthly_spend: Some(monthly_spend),
        }
    }
}

/// Score categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Spending,
    Saving,
    Budgeting,
    Goals,
    Overall,
}

impl ScoreCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spending => "spending",
            Self::Saving => "saving",
            Self::Budgeting => "budgeting",
            Self::Goals => "goals",
            Self::Overall => "overall",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spending => "Spending",
            Self::Saving => "Saving",
            Self::Budgeting => "Budgeting",
            Self::Goals => "Goals",
            Self::Overall => "Overall",
        }
    }

    /// All categories in display order, overall last
    pub fn all() -> &'static [ScoreCategory] {
        &[
            Self::Spending,
            Self::Saving,
            Self::Budgeting,
            Self::Goals,
            Self::Overall,
        ]
    }
}

impl std::str::FromStr for ScoreCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spending" => Ok(Self::Spending),
            "saving" | "savings" => Ok(Self::Saving),
            "budgeting" | "budget" => Ok(Self::Budgeting),
            "goals" | "goal" => Ok(Self::Goals),
            "overall" => Ok(Self::Overall),
            _ => Err(format!("Unknown score category: {}", s)),
        }
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the score engine. Every value lies in `[-3, 3]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub spending: f64,
    pub saving: f64,
    pub budgeting: f64,
    pub goals: f64,
    pub overall: f64,
}

impl ScoreResult {
    pub fn get(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Spending => self.spending,
            ScoreCategory::Saving => self.saving,
            ScoreCategory::Budgeting => self.budgeting,
            ScoreCategory::Goals => self.goals,
            ScoreCategory::Overall => self.overall,
        }
    }

    /// `(category, value)` pairs in display order
    pub fn categories(&self) -> impl Iterator<Item = (ScoreCategory, f64)> + '_ {
        ScoreCategory::all().iter().map(move |c| (*c, self.get(*c)))
    }

    pub fn percent(&self, category: ScoreCategory) -> f64 {
        score_to_percent(self.get(category))
    }
}

/// Map a `[-3, 3]` score onto 0..100 for progress bars
pub fn score_to_percent(score: f64) -> f64 {
    ((score - SCORE_MIN) / (SCORE_MAX - SCORE_MIN)) * 100.0
}

/// A goal definition as stored by the goals service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Spending category this goal tracks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        alias = "targetMonthlyCents",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_monthly_cents: Option<i64>,
}

/// Progress of a goal derived from this month's spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStatus {
    pub goal_id: String,
    pub name: String,
    /// Rounded to a whole percentage, capped at 100
    pub progress_pct: f64,
    pub spent_cents: i64,
}

impl From<&GoalStatus> for GoalProgress {
    fn from(status: &GoalStatus) -> Self {
        Self {
            goal_id: Some(status.goal_id.clone()),
            name: Some(status.name.clone()),
            progress_pct: status.progress_pct,
        }
    }
}

impl From<GoalStatus> for GoalProgress {
    fn from(status: GoalStatus) -> Self {
        Self {
            goal_id: Some(status.goal_id),
            name: Some(status.name),
            progress_pct: status.progress_pct,
        }
    }
}
