//! Rule-table disease risk scoring.
//!
//! Each disease owns a static [`ScoringPolicy`]: an ordered list of checks,
//! each check a list of bands of which at most one fires. Scores are summed,
//! mapped to a [`RiskLevel`](crate::domain::risk::RiskLevel) through two
//! cutoffs and turned into a capped confidence value.

pub mod diabetes;
pub mod heart_disease;
pub mod hypertension;
pub mod obesity;
pub mod rules;

use crate::domain::assessment::{HealthAssessment, Profile};
use crate::domain::risk::{DiseaseType, RiskScore};
use rules::{RiskInputs, ScoringPolicy};

pub fn policy_for(disease: DiseaseType) -> &'static ScoringPolicy {
    match disease {
        DiseaseType::Diabetes => &diabetes::POLICY,
        DiseaseType::HeartDisease => &heart_disease::POLICY,
        DiseaseType::Hypertension => &hypertension::POLICY,
        DiseaseType::Obesity => &obesity::POLICY,
    }
}

/// Runs every scorer in [`DiseaseType::ALL`] order.
pub fn score_all(assessment: &HealthAssessment, profile: &Profile, bmi: f64) -> Vec<RiskScore> {
    let inputs = RiskInputs::new(assessment, profile, bmi);
    DiseaseType::ALL
        .iter()
        .map(|disease| policy_for(*disease).evaluate(&inputs))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::assessment::{AlcoholConsumption, Gender, HealthAssessment, Profile};

    /// An assessment on which no rule fires.
    pub fn baseline() -> HealthAssessment {
        HealthAssessment {
            glucose_level: None,
            blood_pressure_systolic: None,
            blood_pressure_diastolic: None,
            cholesterol: None,
            heart_rate: None,
            sleep_hours: None,
            exercise_hours: 5.0,
            smoking: false,
            alcohol_consumption: AlcoholConsumption::None,
            family_history: false,
            stress_level: 5,
        }
    }

    pub fn male_30() -> Profile {
        Profile {
            age: 30,
            gender: Gender::Male,
            height: 175.0,
            weight: 70.0,
        }
    }
}
