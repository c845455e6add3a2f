//! Goal progress command implementations

use std::path::Path;

use anyhow::Result;
use nestegg_core::{derive_goal_progress, GoalStatus};

use super::{load_snapshot, resolve_as_of, truncate};

pub fn run_goals(input: &Path, as_of: Option<&str>) -> Result<Vec<GoalStatus>> {
    let snapshot = load_snapshot(input)?;
    let as_of = resolve_as_of(as_of)?;
    Ok(derive_goal_progress(
        &snapshot.goal_definitions,
        &snapshot.purchases,
        as_of,
    ))
}

pub fn cmd_goals(input: &Path, as_of: Option<&str>, json: bool) -> Result<()> {
    let statuses = run_goals(input, as_of)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    if statuses.is_empty() {
        println!("No goal definitions in snapshot. Add a \"goal_definitions\" list, e.g.:");
        println!(r#"  {{ "id": "1", "name": "Dining", "category": "dining", "target_monthly_cents": 20000 }}"#);
        return Ok(());
    }

    println!();
    println!("🎯 Goal Progress");
    println!("   ─────────────────────────────────────────────────────────────");

    for status in &statuses {
        let icon = if status.progress_pct >= 100.0 {
            "✅"
        } else {
            "⏳"
        };
        println!(
            "   {} {:25} │ {:>4.0}% │ ${:>9.2}",
            icon,
            truncate(&status.name, 25),
            status.progress_pct,
            status.spent_cents as f64 / 100.0
        );
    }
    println!();

    Ok(())
}
