use crate::error::EngineError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholConsumption {
    #[default]
    None,
    Light,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Biometric profile owned by the account layer. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub age: u32,
    pub gender: Gender,
    /// Centimetres.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
}

impl Profile {
    pub fn validate(&self) -> Result<(), EngineError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.weight) || !valid(self.height) {
            return Err(EngineError::InvalidProfile {
                weight: self.weight,
                height: self.height,
            });
        }
        Ok(())
    }
}

fn default_stress_level() -> i32 {
    5
}

/// One submitted health assessment. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthAssessment {
    #[serde(default)]
    pub glucose_level: Option<f64>,
    #[serde(default)]
    pub blood_pressure_systolic: Option<i32>,
    #[serde(default)]
    pub blood_pressure_diastolic: Option<i32>,
    #[serde(default)]
    pub cholesterol: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<i32>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    /// Hours per week.
    pub exercise_hours: f64,
    #[serde(default)]
    pub smoking: bool,
    #[serde(default)]
    pub alcohol_consumption: AlcoholConsumption,
    #[serde(default)]
    pub family_history: bool,
    #[serde(default = "default_stress_level")]
    pub stress_level: i32,
}

impl HealthAssessment {
    /// Values used by the "fill sample data" helper of the assessment form.
    pub fn sample() -> Self {
        Self {
            glucose_level: Some(95.0),
            blood_pressure_systolic: Some(120),
            blood_pressure_diastolic: Some(80),
            cholesterol: Some(180.0),
            heart_rate: Some(72),
            sleep_hours: Some(7.0),
            exercise_hours: 3.0,
            smoking: false,
            alcohol_consumption: AlcoholConsumption::Moderate,
            family_history: true,
            stress_level: 6,
        }
    }

    /// Range checks on raw entry. Every violated rule is reported at once.
    pub fn validate(&self) -> Result<(), EngineError> {
        let mut errors: Vec<&'static str> = Vec::new();

        if !self.exercise_hours.is_finite() || !(0.0..=24.0).contains(&self.exercise_hours) {
            errors.push("Please enter valid weekly exercise hours");
        }
        if let Some(v) = self.glucose_level {
            if !(0.0..=1000.0).contains(&v) {
                errors.push("Please enter a valid glucose level (0-1000 mg/dL)");
            }
        }
        if let Some(v) = self.blood_pressure_systolic {
            if !(60..=300).contains(&v) {
                errors.push("Please enter a valid systolic blood pressure (60-300 mmHg)");
            }
        }
        if let Some(v) = self.blood_pressure_diastolic {
            if !(40..=200).contains(&v) {
                errors.push("Please enter a valid diastolic blood pressure (40-200 mmHg)");
            }
        }
        if let Some(v) = self.cholesterol {
            if !(0.0..=1000.0).contains(&v) {
                errors.push("Please enter a valid cholesterol level (0-1000 mg/dL)");
            }
        }
        if let Some(v) = self.heart_rate {
            if !(40..=200).contains(&v) {
                errors.push("Please enter a valid heart rate (40-200 bpm)");
            }
        }
        if let Some(v) = self.sleep_hours {
            if !(0.0..=24.0).contains(&v) {
                errors.push("Please enter valid sleep hours (0-24 hours)");
            }
        }
        if !(1..=10).contains(&self.stress_level) {
            errors.push("Please enter a stress level between 1 and 10");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(EngineError::Validation(errors.join(". ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_passes_validation() {
        assert!(HealthAssessment::sample().validate().is_ok());
    }

    #[test]
    fn collects_all_range_violations() {
        let assessment = HealthAssessment {
            glucose_level: Some(1200.0),
            blood_pressure_systolic: Some(20),
            heart_rate: Some(250),
            ..HealthAssessment::sample()
        };

        let Err(EngineError::Validation(message)) = assessment.validate() else {
            panic!("expected validation error");
        };
        assert!(message.contains("glucose"));
        assert!(message.contains("systolic"));
        assert!(message.contains("heart rate"));
        assert_eq!(message.matches(". ").count(), 2);
    }

    #[test]
    fn rejects_negative_exercise_and_bad_stress() {
        let assessment = HealthAssessment {
            exercise_hours: -1.0,
            stress_level: 11,
            ..HealthAssessment::sample()
        };
        let err = assessment.validate().unwrap_err();
        assert!(err.to_string().contains("exercise"));
        assert!(err.to_string().contains("stress"));
    }

    #[test]
    fn missing_optionals_are_fine() {
        let json = r#"{"exercise_hours": 1.5}"#;
        let assessment: HealthAssessment = serde_json::from_str(json).unwrap();
        assert_eq!(assessment.stress_level, 5);
        assert_eq!(assessment.alcohol_consumption, AlcoholConsumption::None);
        assert!(assessment.glucose_level.is_none());
        assert!(assessment.validate().is_ok());
    }

    #[test]
    fn profile_requires_positive_dimensions() {
        let profile = Profile {
            age: 40,
            gender: Gender::Female,
            height: 0.0,
            weight: 60.0,
        };
        assert!(matches!(
            profile.validate(),
            Err(EngineError::InvalidProfile { .. })
        ));
    }
}
