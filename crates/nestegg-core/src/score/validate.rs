//! Strict input validation
//!
//! Inputs that pass validation score exactly as they would without it.

use crate::error::{Error, Result};

use super::engine::ScoreInputs;

/// Reject inputs the score model has no meaning for
pub fn validate_inputs(inputs: &ScoreInputs) -> Result<()> {
    for (i, p) in inputs.purchases.iter().enumerate() {
        if p.amount_cents < 0 {
            return Err(Error::InvalidInput(format!(
                "purchase {} has negative amount_cents ({})",
                i, p.amount_cents
            )));
        }
    }

    for (i, point) in inputs.savings.iter().enumerate() {
        if !point.value.is_finite() {
            return Err(Error::InvalidInput(format!(
                "savings point {} is not a finite number",
                i
            )));
        }
    }

    for (i, goal) in inputs.goals.iter().enumerate() {
        let pct = goal.progress_pct;
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(Error::InvalidInput(format!(
                "goal {} progress_pct {} is outside 0-100",
                i, pct
            )));
        }
    }

    if let Some(target) = inputs.targets.monthly_spend {
        if !target.is_finite() || target < 0.0 {
            return Err(Error::InvalidInput(format!(
                "monthly_spend target {} must be a non-negative number",
                target
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalProgress, PurchaseRecord, SavingsPoint, ScoreTargets};
    use crate::score::{EngineOptions, ScoreEngine, Validation};
    use chrono::{TimeZone, Utc};

    fn valid_inputs() -> ScoreInputs {
        let ts = Utc.with_ymd_and_hms(2025, 6, 3, 10, 0, 0).unwrap();
        ScoreInputs {
            purchases: vec![PurchaseRecord::new(2_599, ts).with_category("food")],
            savings: vec![SavingsPoint::new(10.0), SavingsPoint::new(20.0)],
            goals: vec![GoalProgress::new(0.0), GoalProgress::new(100.0)],
            targets: ScoreTargets::monthly(0.0),
        }
    }

    fn strict() -> ScoreEngine {
        ScoreEngine::with_options(EngineOptions {
            validation: Validation::Strict,
            ..Default::default()
        })
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(validate_inputs(&valid_inputs()).is_ok());
        assert!(validate_inputs(&ScoreInputs::default()).is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut inputs = valid_inputs();
        inputs.purchases[0].amount_cents = -1;
        let err = validate_inputs(&inputs).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("purchase 0"));
    }

    #[test]
    fn test_non_finite_savings_rejected() {
        let mut inputs = valid_inputs();
        inputs.savings.push(SavingsPoint::new(f64::INFINITY));
        let err = validate_inputs(&inputs).unwrap_err();
        assert!(err.to_string().contains("savings point 2"));
    }

    #[test]
    fn test_progress_range_rejected() {
        for pct in [-0.5, 100.1, f64::NAN] {
            let mut inputs = valid_inputs();
            inputs.goals[1].progress_pct = pct;
            assert!(validate_inputs(&inputs).is_err(), "accepted {}", pct);
        }
    }

    #[test]
    fn test_negative_target_rejected() {
        let mut inputs = valid_inputs();
        inputs.targets = ScoreTargets::monthly(-100.0);
        assert!(validate_inputs(&inputs).is_err());
    }

    #[test]
    fn test_strict_engine_matches_baseline_on_valid_input() {
        let as_of = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();
        let inputs = valid_inputs();

        let lenient = ScoreEngine::new().compute(&inputs, as_of).unwrap();
        let checked = strict().compute(&inputs, as_of).unwrap();
        assert_eq!(lenient, checked);
    }

    #[test]
    fn test_strict_engine_rejects_and_lenient_scores() {
        let as_of = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();
        let mut inputs = valid_inputs();
        inputs.goals.push(GoalProgress::new(140.0));

        assert!(strict().compute(&inputs, as_of).is_err());
        let result = ScoreEngine::new().compute(&inputs, as_of).unwrap();
        assert_eq!(result.goals, 1.0);
    }
}
