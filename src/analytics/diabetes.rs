use super::rules::{Band, ScoringPolicy};
use crate::domain::risk::DiseaseType;

pub static POLICY: ScoringPolicy = ScoringPolicy {
    disease: DiseaseType::Diabetes,
    checks: &[
        // fasting glucose, mg/dL
        &[
            Band {
                points: 40,
                factor: "High fasting glucose level",
                applies: |i| i.glucose.is_some_and(|g| g >= 126.0),
            },
            Band {
                points: 25,
                factor: "Elevated fasting glucose (prediabetic range)",
                applies: |i| i.glucose.is_some_and(|g| g >= 100.0),
            },
        ],
        &[
            Band {
                points: 20,
                factor: "Obesity (BMI ≥ 30)",
                applies: |i| i.bmi >= 30.0,
            },
            Band {
                points: 10,
                factor: "Overweight (BMI 25-29.9)",
                applies: |i| i.bmi >= 25.0,
            },
        ],
        &[Band {
            points: 15,
            factor: "Age over 45 years",
            applies: |i| i.age >= 45,
        }],
        &[Band {
            points: 15,
            factor: "Family history of diabetes",
            applies: |i| i.family_history,
        }],
        &[Band {
            points: 10,
            factor: "Insufficient physical activity",
            applies: |i| i.exercise_hours < 2.0,
        }],
        &[Band {
            points: 10,
            factor: "High blood pressure",
            applies: |i| i.systolic.is_some_and(|s| s >= 140),
        }],
    ],
    medium_cutoff: 30,
    high_cutoff: 60,
    confidence_base: 65.0,
    confidence_divisor: 3.0,
};
