use super::rules::{Band, ScoringPolicy};
use crate::domain::risk::DiseaseType;

pub static POLICY: ScoringPolicy = ScoringPolicy {
    disease: DiseaseType::Obesity,
    checks: &[
        &[
            Band {
                points: 60,
                factor: "Class III Obesity (BMI ≥ 40)",
                applies: |i| i.bmi >= 40.0,
            },
            Band {
                points: 50,
                factor: "Class II Obesity (BMI 35-39.9)",
                applies: |i| i.bmi >= 35.0,
            },
            Band {
                points: 40,
                factor: "Class I Obesity (BMI 30-34.9)",
                applies: |i| i.bmi >= 30.0,
            },
            Band {
                points: 25,
                factor: "Overweight (BMI 25-29.9)",
                applies: |i| i.bmi >= 25.0,
            },
        ],
        &[
            Band {
                points: 20,
                factor: "Very low physical activity",
                applies: |i| i.exercise_hours < 1.0,
            },
            Band {
                points: 10,
                factor: "Insufficient physical activity",
                applies: |i| i.exercise_hours < 2.5,
            },
        ],
        &[Band {
            points: 15,
            factor: "Family history of obesity",
            applies: |i| i.family_history,
        }],
        &[
            Band {
                points: 10,
                factor: "Insufficient sleep (< 6 hours)",
                applies: |i| i.sleep_hours.is_some_and(|h| h < 6.0),
            },
            Band {
                points: 5,
                factor: "Excessive sleep (> 9 hours)",
                applies: |i| i.sleep_hours.is_some_and(|h| h > 9.0),
            },
        ],
        &[Band {
            points: 10,
            factor: "High stress levels",
            applies: |i| i.high_stress(),
        }],
        &[Band {
            points: 5,
            factor: "Age-related metabolism changes",
            applies: |i| i.age >= 40,
        }],
    ],
    medium_cutoff: 30,
    high_cutoff: 60,
    confidence_base: 80.0,
    confidence_divisor: 6.0,
};
