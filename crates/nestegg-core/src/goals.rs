//! Goal progress derived from category spending
//!
//! A goal tracks one spending category with a monthly cents target. Its
//! progress is this month's spend in that category as a percentage of the
//! target, capped at 100.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};

use crate::models::{Goal, GoalStatus, PurchaseRecord};

/// Category assigned to purchases without one
pub const UNCATEGORIZED: &str = "other";

/// Purchase or goal category, with empty names treated as missing
fn category_of(category: Option<&str>) -> Option<&str> {
    category.filter(|c| !c.is_empty())
}

/// Derive progress for each goal from purchases in the month of `as_of` (UTC).
///
/// Output order follows `goals`.
pub fn derive_goal_progress(
    goals: &[Goal],
    purchases: &[PurchaseRecord],
    as_of: DateTime<Utc>,
) -> Vec<GoalStatus> {
    let mut by_category: HashMap<&str, i64> = HashMap::new();
    for p in purchases {
        if p.ts.year() != as_of.year() || p.ts.month() != as_of.month() {
            continue;
        }
        let category = category_of(p.category.as_deref()).unwrap_or(UNCATEGORIZED);
        let spent = by_category.entry(category).or_insert(0);
        *spent = spent.saturating_add(p.amount_cents);
    }

    goals
        .iter()
        .map(|goal| {
            let spent_cents = category_of(goal.category.as_deref())
                .and_then(|c| by_category.get(c).copied())
                .unwrap_or(0);

            let pct = match goal.target_monthly_cents {
                Some(target) if target != 0 => {
                    (spent_cents as f64 / target as f64 * 100.0).min(100.0)
                }
                _ => 0.0,
            };

            GoalStatus {
                goal_id: goal.id.clone(),
                name: goal.name.clone(),
                // Half rounds toward +inf, so -12.5 becomes -12
                progress_pct: (pct + 0.5).floor(),
                spent_cents,
            }
        })
        .collect()
}
