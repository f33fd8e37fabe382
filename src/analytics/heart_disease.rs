use super::rules::{Band, ScoringPolicy};
use crate::domain::assessment::Gender;
use crate::domain::risk::DiseaseType;

pub static POLICY: ScoringPolicy = ScoringPolicy {
    disease: DiseaseType::HeartDisease,
    checks: &[
        &[
            Band {
                points: 25,
                factor: "Hypertension (Stage 2)",
                applies: |i| i.blood_pressure_at_least(140, 90),
            },
            Band {
                points: 15,
                factor: "Elevated blood pressure (Stage 1)",
                applies: |i| i.blood_pressure_at_least(130, 80),
            },
        ],
        &[
            Band {
                points: 30,
                factor: "High cholesterol (≥ 240 mg/dL)",
                applies: |i| i.cholesterol.is_some_and(|c| c >= 240.0),
            },
            Band {
                points: 15,
                factor: "Borderline high cholesterol",
                applies: |i| i.cholesterol.is_some_and(|c| c >= 200.0),
            },
        ],
        // age and sex share one chain
        &[
            Band {
                points: 20,
                factor: "Age 65 or older",
                applies: |i| i.age >= 65,
            },
            Band {
                points: 15,
                factor: "Male over 45 years",
                applies: |i| i.age >= 45 && i.gender == Gender::Male,
            },
            Band {
                points: 15,
                factor: "Female over 55 years",
                applies: |i| i.age >= 55 && i.gender == Gender::Female,
            },
        ],
        &[Band {
            points: 25,
            factor: "Current smoker",
            applies: |i| i.smoking,
        }],
        &[Band {
            points: 15,
            factor: "Family history of heart disease",
            applies: |i| i.family_history,
        }],
        &[Band {
            points: 15,
            factor: "Obesity",
            applies: |i| i.bmi >= 30.0,
        }],
        &[Band {
            points: 10,
            factor: "Sedentary lifestyle",
            applies: |i| i.exercise_hours < 2.5,
        }],
        &[Band {
            points: 10,
            factor: "High stress levels",
            applies: |i| i.high_stress(),
        }],
    ],
    medium_cutoff: 35,
    high_cutoff: 70,
    confidence_base: 70.0,
    confidence_divisor: 4.0,
};
