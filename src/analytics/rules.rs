use crate::domain::assessment::{AlcoholConsumption, Gender, HealthAssessment, Profile};
use crate::domain::risk::{DiseaseType, RiskLevel, RiskScore};

/// Flattened view of everything a rule may look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInputs {
    pub glucose: Option<f64>,
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub cholesterol: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub exercise_hours: f64,
    pub smoking: bool,
    pub alcohol: AlcoholConsumption,
    pub family_history: bool,
    pub stress_level: i32,
    pub age: u32,
    pub gender: Gender,
    pub bmi: f64,
}

impl RiskInputs {
    pub fn new(assessment: &HealthAssessment, profile: &Profile, bmi: f64) -> Self {
        Self {
            glucose: assessment.glucose_level,
            systolic: assessment.blood_pressure_systolic,
            diastolic: assessment.blood_pressure_diastolic,
            cholesterol: assessment.cholesterol,
            sleep_hours: assessment.sleep_hours,
            exercise_hours: assessment.exercise_hours,
            smoking: assessment.smoking,
            alcohol: assessment.alcohol_consumption,
            family_history: assessment.family_history,
            stress_level: assessment.stress_level,
            age: profile.age,
            gender: profile.gender,
            bmi,
        }
    }

    /// True when both readings are present and either reaches its limit.
    pub fn blood_pressure_at_least(&self, systolic: i32, diastolic: i32) -> bool {
        match (self.systolic, self.diastolic) {
            (Some(s), Some(d)) => s >= systolic || d >= diastolic,
            _ => false,
        }
    }

    pub fn high_stress(&self) -> bool {
        self.stress_level >= 7
    }
}

/// One scoring band: if `applies` holds, add `points` and report `factor`.
#[derive(Clone, Copy)]
pub struct Band {
    pub points: u32,
    pub factor: &'static str,
    pub applies: fn(&RiskInputs) -> bool,
}

/// Bands for a single metric, most severe first. At most one fires.
pub type Check = &'static [Band];

pub struct ScoringPolicy {
    pub disease: DiseaseType,
    pub checks: &'static [Check],
    pub medium_cutoff: u32,
    pub high_cutoff: u32,
    pub confidence_base: f64,
    pub confidence_divisor: f64,
}

pub const MAX_CONFIDENCE: f64 = 95.0;

impl ScoringPolicy {
    pub fn evaluate(&self, inputs: &RiskInputs) -> RiskScore {
        let mut score = 0u32;
        let mut factors = Vec::new();

        for check in self.checks {
            if let Some(band) = check.iter().find(|band| (band.applies)(inputs)) {
                score += band.points;
                factors.push(band.factor.to_string());
            }
        }

        let risk_level = RiskLevel::from_score(score, self.medium_cutoff, self.high_cutoff);
        tracing::debug!(
            disease = self.disease.as_str(),
            score,
            level = risk_level.as_str(),
            factors = factors.len(),
            "risk scored"
        );

        RiskScore {
            disease_type: self.disease,
            risk_level,
            confidence_score: self.confidence(score),
            risk_factors: factors,
        }
    }

    pub fn confidence(&self, score: u32) -> f64 {
        (self.confidence_base + score as f64 / self.confidence_divisor).min(MAX_CONFIDENCE)
    }
}

#[cfg(test)]
impl ScoringPolicy {
    /// Highest reachable score: the top band of every check.
    pub fn max_score(&self) -> u32 {
        self.checks
            .iter()
            .map(|check| check.iter().map(|band| band.points).max().unwrap_or(0))
            .sum()
    }

    pub fn factor_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks
            .iter()
            .flat_map(|check| check.iter().map(|band| band.factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TOY: ScoringPolicy = ScoringPolicy {
        disease: DiseaseType::Diabetes,
        checks: &[
            &[
                Band {
                    points: 40,
                    factor: "very high",
                    applies: |i| i.bmi >= 40.0,
                },
                Band {
                    points: 20,
                    factor: "high",
                    applies: |i| i.bmi >= 30.0,
                },
            ],
            &[Band {
                points: 10,
                factor: "smoker",
                applies: |i| i.smoking,
            }],
        ],
        medium_cutoff: 20,
        high_cutoff: 45,
        confidence_base: 90.0,
        confidence_divisor: 2.0,
    };

    fn inputs(bmi: f64, smoking: bool) -> RiskInputs {
        RiskInputs {
            glucose: None,
            systolic: None,
            diastolic: None,
            cholesterol: None,
            sleep_hours: None,
            exercise_hours: 5.0,
            smoking,
            alcohol: AlcoholConsumption::None,
            family_history: false,
            stress_level: 5,
            age: 30,
            gender: Gender::Other,
            bmi,
        }
    }

    #[test]
    fn only_first_matching_band_fires() {
        let score = TOY.evaluate(&inputs(42.0, false));
        assert_eq!(score.risk_factors, vec!["very high".to_string()]);
        assert_eq!(score.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn checks_are_additive_and_ordered() {
        let score = TOY.evaluate(&inputs(42.0, true));
        assert_eq!(score.risk_factors, vec!["very high", "smoker"]);
        assert_eq!(score.risk_level, RiskLevel::High);
    }

    #[test]
    fn confidence_is_capped() {
        assert_eq!(TOY.confidence(0), 90.0);
        assert_eq!(TOY.confidence(4), 92.0);
        assert_eq!(TOY.confidence(50), MAX_CONFIDENCE);
        assert_eq!(TOY.max_score(), 50);
    }

    #[test]
    fn blood_pressure_needs_both_readings() {
        let mut i = inputs(22.0, false);
        i.systolic = Some(150);
        assert!(!i.blood_pressure_at_least(140, 90));
        i.diastolic = Some(70);
        assert!(i.blood_pressure_at_least(140, 90));
        i.systolic = Some(110);
        i.diastolic = Some(92);
        assert!(i.blood_pressure_at_least(140, 90));
    }
}
