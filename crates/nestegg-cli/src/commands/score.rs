//! Score command implementations (score, impact)

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use nestegg_core::models::score_to_percent;
use nestegg_core::score::{format_delta, snapshot_impact, ScoreImpact, Validation};
use nestegg_core::{PurchaseRecord, ScoreEngine, ScoreResult, ScoreTargets, Snapshot};

use super::{load_config, load_snapshot, parse_instant, resolve_as_of};

/// Width of the text score bar
const BAR_WIDTH: usize = 20;

/// Options for `nestegg score`
pub struct ScoreArgs<'a> {
    pub config: Option<&'a Path>,
    pub input: &'a Path,
    pub as_of: Option<&'a str>,
    pub monthly_spend: Option<f64>,
    pub strict: bool,
}

/// Load everything a score needs: engine, snapshot with resolved targets and
/// the month anchor
fn prepare(
    config_path: Option<&Path>,
    input: &Path,
    as_of: Option<&str>,
    monthly_spend: Option<f64>,
    strict: bool,
) -> Result<(ScoreEngine, Snapshot, DateTime<Utc>)> {
    let config = load_config(config_path)?;
    let mut snapshot = load_snapshot(input)?;
    let as_of = resolve_as_of(as_of)?;

    snapshot.targets = match monthly_spend {
        Some(m) => ScoreTargets::monthly(m),
        None => config.merge_targets(snapshot.targets),
    };

    let mut options = config.engine_options();
    if strict {
        options.validation = Validation::Strict;
    }

    Ok((ScoreEngine::with_options(options), snapshot, as_of))
}

/// Compute the score for a snapshot
pub fn run_score(args: &ScoreArgs<'_>) -> Result<ScoreResult> {
    let (engine, snapshot, as_of) = prepare(
        args.config,
        args.input,
        args.as_of,
        args.monthly_spend,
        args.strict,
    )?;
    engine
        .compute(&snapshot.to_inputs(as_of), as_of)
        .context("Snapshot failed validation")
}

pub fn cmd_score(args: &ScoreArgs<'_>, json: bool) -> Result<()> {
    let result = run_score(args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!("🥚 Nestegg Score");
    println!("   ─────────────────────────────────────────────────────────────");
    for (category, value) in result.categories() {
        println!(
            "   {:10} │ {:>5.1} │ {}",
            category.label(),
            value,
            score_bar(value)
        );
    }
    println!();

    Ok(())
}

/// `[######------]` bar for a score on the -3..3 band
pub fn score_bar(score: f64) -> String {
    let pct = score_to_percent(score).clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Options for `nestegg impact`
pub struct ImpactArgs<'a> {
    pub config: Option<&'a Path>,
    pub input: &'a Path,
    pub amount: f64,
    pub category: Option<&'a str>,
    pub at: Option<&'a str>,
    pub as_of: Option<&'a str>,
}

pub fn run_impact(args: &ImpactArgs<'_>) -> Result<ScoreImpact> {
    if !args.amount.is_finite() || args.amount < 0.0 {
        anyhow::bail!("Amount must be a non-negative number: {}", args.amount);
    }

    let (engine, snapshot, as_of) = prepare(args.config, args.input, args.as_of, None, false)?;

    let ts = match args.at {
        Some(at) => parse_instant(at)?,
        None => as_of,
    };
    let mut purchase = PurchaseRecord::new((args.amount * 100.0).round() as i64, ts);
    if let Some(category) = args.category {
        purchase = purchase.with_category(category);
    }

    tracing::debug!(
        amount_cents = purchase.amount_cents,
        ts = %purchase.ts,
        "Scoring purchase impact"
    );

    snapshot_impact(&engine, &snapshot, &purchase, as_of).context("Snapshot failed validation")
}

pub fn cmd_impact(args: &ImpactArgs<'_>, json: bool) -> Result<()> {
    let impact = run_impact(args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&impact)?);
        return Ok(());
    }

    let icon = if impact.delta > 0.0 {
        "📈"
    } else if impact.delta < 0.0 {
        "📉"
    } else {
        "➖"
    };

    println!();
    println!(
        "{} Score impact of a ${:.2} purchase: {}",
        icon,
        args.amount,
        format_delta(impact.delta)
    );
    println!("   ─────────────────────────────────────────────────────────────");
    for ((category, before), (_, after)) in
        impact.before.categories().zip(impact.after.categories())
    {
        println!(
            "   {:10} │ {:>5.1} → {:>5.1}  ({})",
            category.label(),
            before,
            after,
            format_delta(after - before)
        );
    }
    println!();

    Ok(())
}
