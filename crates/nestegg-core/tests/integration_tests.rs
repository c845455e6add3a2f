//! Integration tests for nestegg-core
//!
//! These tests exercise the snapshot → goal progress → score workflow and
//! the range invariants of the score.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use nestegg_core::{
    compute_score, score_impact, Config, GoalProgress, PurchaseRecord, SavingsPoint, ScoreEngine,
    ScoreTargets, Snapshot, SCORE_MAX, SCORE_MIN,
};

/// A month of purchases with a dining goal and a rising savings series
fn household_snapshot() -> &'static str {
    r#"{
        "purchases": [
            { "amount_cents": 4200, "ts": "2025-05-01T12:10:00Z", "category": "dining", "merchant": "Pho Place" },
            { "amount_cents": 8900, "ts": "2025-05-01T19:45:00Z", "category": "groceries" },
            { "amount_cents": 13100, "ts": "2025-05-04T09:00:00Z", "category": "groceries" },
            { "amount_cents": 2600, "ts": "2025-05-09T20:30:00Z", "category": "dining" },
            { "amount_cents": 55000, "ts": "2025-04-28T15:00:00Z", "category": "travel" }
        ],
        "savings": [1200, 1250, 1330, 1390],
        "goal_definitions": [
            { "id": "dining", "name": "Dining budget", "category": "dining", "target_monthly_cents": 10000 },
            { "id": "groceries", "name": "Groceries", "category": "groceries", "target_monthly_cents": 40000 }
        ],
        "targets": { "monthly_spend": 600 }
    }"#
}

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 12, 7, 0, 0).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Workflow Tests
// =============================================================================

#[test]
fn test_snapshot_to_score() {
    let snapshot = Snapshot::from_json(household_snapshot()).expect("Failed to parse snapshot");
    let inputs = snapshot.to_inputs(as_of());

    // Dining: $68 of $100, groceries: $220 of $400
    let pcts: Vec<f64> = inputs.goals.iter().map(|g| g.progress_pct).collect();
    assert_eq!(pcts, vec![68.0, 55.0]);

    let result = ScoreEngine::new()
        .compute(&inputs, as_of())
        .expect("Score failed");

    // May spend is $288 against $600 (the April trip is excluded)
    assert_close(result.spending, 3.0 * (1.0 - 288.0 / 600.0));

    // Savings slope is 65 per step
    assert_close(result.saving, 0.65);

    // Days: $131, $131, $26 -> mean 96, population std ~49.5
    let days = [131.0_f64, 131.0, 26.0];
    let mean = days.iter().sum::<f64>() / 3.0;
    let std = (days.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / 3.0).sqrt();
    assert_close(result.budgeting, 3.0 - std / mean);

    // (0.68 - 0.5) * 6 = 1.08 and (0.55 - 0.5) * 6 = 0.3
    assert_close(result.goals, (1.08 + 0.3) / 2.0);

    assert_close(
        result.overall,
        (result.spending + result.saving + result.budgeting + result.goals) / 4.0,
    );
}

#[test]
fn test_config_targets_fill_snapshot_gaps() {
    let mut snapshot = Snapshot::from_json(household_snapshot()).unwrap();
    snapshot.targets = ScoreTargets::default();

    let config = Config {
        targets: ScoreTargets::monthly(288.0),
        ..Default::default()
    };
    let mut inputs = snapshot.to_inputs(as_of());
    inputs.targets = config.merge_targets(snapshot.targets);

    let result = ScoreEngine::with_options(config.engine_options())
        .compute(&inputs, as_of())
        .unwrap();
    assert_eq!(result.spending, 0.0);
}

#[test]
fn test_impact_of_next_purchase() {
    let snapshot = Snapshot::from_json(household_snapshot()).unwrap();
    let inputs = snapshot.to_inputs(as_of());

    let splurge = PurchaseRecord::new(
        45_000,
        Utc.with_ymd_and_hms(2025, 5, 11, 14, 0, 0).unwrap(),
    )
    .with_category("electronics");

    let impact = score_impact(&ScoreEngine::new(), &inputs, &splurge, as_of()).unwrap();
    assert!(impact.delta < 0.0);
    assert!(impact.after.spending < impact.before.spending);
    assert!(impact.after.budgeting < impact.before.budgeting);
}

// =============================================================================
// Range Invariants
// =============================================================================

fn purchase_strategy() -> impl Strategy<Value = PurchaseRecord> {
    (0_i64..5_000_000, 1_u32..=12, 1_u32..=28, 0_u32..24).prop_map(
        |(cents, month, day, hour)| {
            PurchaseRecord::new(
                cents,
                Utc.with_ymd_and_hms(2025, month, day, hour, 0, 0).unwrap(),
            )
        },
    )
}

proptest! {
    #[test]
    fn prop_scores_stay_in_band(
        purchases in prop::collection::vec(purchase_strategy(), 0..40),
        savings in prop::collection::vec(-1.0e7_f64..1.0e7, 0..24),
        goals in prop::collection::vec(-50.0_f64..250.0, 0..8),
        target in prop::option::of(0.0_f64..10_000.0),
        month in 1_u32..=12,
    ) {
        let savings: Vec<SavingsPoint> = savings.into_iter().map(SavingsPoint::new).collect();
        let goals: Vec<GoalProgress> = goals.into_iter().map(GoalProgress::new).collect();
        let targets = ScoreTargets { monthly_spend: target };
        let as_of = Utc.with_ymd_and_hms(2025, month, 15, 12, 0, 0).unwrap();

        let result = compute_score(&purchases, &savings, &goals, &targets, as_of);
        for (category, value) in result.categories() {
            prop_assert!(
                (SCORE_MIN..=SCORE_MAX).contains(&value),
                "{} = {} out of band",
                category,
                value
            );
        }

        let again = compute_score(&purchases, &savings, &goals, &targets, as_of);
        prop_assert_eq!(result, again);
    }

    #[test]
    fn prop_empty_goals_and_short_savings_are_neutral(
        purchases in prop::collection::vec(purchase_strategy(), 0..20),
        single in prop::option::of(-1.0e6_f64..1.0e6),
    ) {
        let savings: Vec<SavingsPoint> = single.into_iter().map(SavingsPoint::new).collect();
        let as_of = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        let result = compute_score(&purchases, &savings, &[], &ScoreTargets::default(), as_of);
        prop_assert_eq!(result.goals, 0.0);
        prop_assert_eq!(result.saving, 0.0);
    }
}
