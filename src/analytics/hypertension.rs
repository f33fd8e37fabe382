use super::rules::{Band, ScoringPolicy};
use crate::domain::assessment::AlcoholConsumption;
use crate::domain::risk::DiseaseType;

pub static POLICY: ScoringPolicy = ScoringPolicy {
    disease: DiseaseType::Hypertension,
    checks: &[
        &[
            Band {
                points: 50,
                factor: "Current hypertension (Stage 2)",
                applies: |i| i.blood_pressure_at_least(140, 90),
            },
            Band {
                points: 35,
                factor: "Stage 1 hypertension",
                applies: |i| i.blood_pressure_at_least(130, 80),
            },
            Band {
                points: 20,
                factor: "Elevated blood pressure",
                applies: |i| i.diastolic.is_some() && i.systolic.is_some_and(|s| s >= 120),
            },
        ],
        &[
            Band {
                points: 20,
                factor: "Age 65 or older",
                applies: |i| i.age >= 65,
            },
            Band {
                points: 10,
                factor: "Age over 45",
                applies: |i| i.age >= 45,
            },
        ],
        &[
            Band {
                points: 20,
                factor: "Obesity",
                applies: |i| i.bmi >= 30.0,
            },
            Band {
                points: 10,
                factor: "Overweight",
                applies: |i| i.bmi >= 25.0,
            },
        ],
        &[Band {
            points: 15,
            factor: "Family history of hypertension",
            applies: |i| i.family_history,
        }],
        &[Band {
            points: 15,
            factor: "Smoking",
            applies: |i| i.smoking,
        }],
        &[
            Band {
                points: 15,
                factor: "Heavy alcohol consumption",
                applies: |i| i.alcohol == AlcoholConsumption::Heavy,
            },
            Band {
                points: 5,
                factor: "Moderate alcohol consumption",
                applies: |i| i.alcohol == AlcoholConsumption::Moderate,
            },
        ],
        &[Band {
            points: 10,
            factor: "Insufficient physical activity",
            applies: |i| i.exercise_hours < 2.0,
        }],
        &[Band {
            points: 10,
            factor: "Chronic stress",
            applies: |i| i.high_stress(),
        }],
    ],
    medium_cutoff: 35,
    high_cutoff: 65,
    confidence_base: 75.0,
    confidence_divisor: 5.0,
};
