use crate::analytics;
use crate::domain::assessment::{HealthAssessment, Profile};
use crate::domain::bmi::checked_bmi;
use crate::domain::plan::RecommendationPlan;
use crate::domain::risk::RiskScore;
use crate::error::EngineError;
use crate::services::recommendation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseOutcome {
    pub risk: RiskScore,
    pub plan: RecommendationPlan,
}

/// Everything derived from one assessment: one outcome per disease.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub bmi: f64,
    pub outcomes: Vec<DiseaseOutcome>,
}

/// BMI, then the four scorers, then one plan per score. Fails only when the
/// profile cannot produce a finite BMI.
pub fn evaluate(assessment: &HealthAssessment, profile: &Profile) -> Result<Evaluation, EngineError> {
    let bmi = checked_bmi(profile)?;

    let outcomes = analytics::score_all(assessment, profile, bmi)
        .into_iter()
        .map(|risk| {
            let plan = recommendation::assemble(risk.disease_type, risk.risk_level);
            DiseaseOutcome { risk, plan }
        })
        .collect();

    Ok(Evaluation { bmi, outcomes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Gender;
    use crate::domain::risk::{DiseaseType, RiskLevel};

    fn profile() -> Profile {
        Profile {
            age: 30,
            gender: Gender::Male,
            height: 175.0,
            weight: 70.0,
        }
    }

    #[test]
    fn sample_submission_yields_four_outcomes() {
        let evaluation = evaluate(&HealthAssessment::sample(), &profile()).unwrap();
        assert!((evaluation.bmi - 22.86).abs() < 0.01);
        assert_eq!(evaluation.outcomes.len(), 4);

        let diabetes = &evaluation.outcomes[0];
        assert_eq!(diabetes.risk.disease_type, DiseaseType::Diabetes);
        assert_eq!(diabetes.risk.risk_level, RiskLevel::Low);
        assert!((diabetes.risk.confidence_score - 70.0).abs() < 1e-9);
        assert_eq!(diabetes.plan.fitness_plan.duration_weeks, 8);
    }

    #[test]
    fn plans_follow_their_scores() {
        let assessment = HealthAssessment {
            glucose_level: Some(150.0),
            blood_pressure_systolic: Some(145),
            ..HealthAssessment::sample()
        };
        let evaluation = evaluate(&assessment, &profile()).unwrap();
        for outcome in &evaluation.outcomes {
            assert_eq!(
                outcome.plan,
                recommendation::assemble(outcome.risk.disease_type, outcome.risk.risk_level)
            );
        }
        assert_eq!(evaluation.outcomes[0].risk.risk_level, RiskLevel::High);
        assert_eq!(evaluation.outcomes[0].plan.diet_plan.calories_target, 1600);
    }

    #[test]
    fn invalid_profile_produces_no_result() {
        let bad = Profile {
            weight: 0.0,
            ..profile()
        };
        assert!(matches!(
            evaluate(&HealthAssessment::sample(), &bad),
            Err(EngineError::InvalidProfile { .. })
        ));
    }
}
