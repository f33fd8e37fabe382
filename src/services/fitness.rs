use crate::domain::plan::{Exercise, FitnessPlan};
use crate::domain::risk::{DiseaseType, RiskLevel};

/// (name, duration, frequency, description)
type ExerciseRow = (&'static str, &'static str, &'static str, &'static str);

const LOW_TIER: &[ExerciseRow] = &[
    ("Walking", "30 minutes", "5 days/week", "Brisk walking in the morning or evening"),
    ("Stretching", "15 minutes", "Daily", "Full body stretching routine"),
    ("Yoga", "20 minutes", "3 days/week", "Basic yoga poses for flexibility"),
];

const MEDIUM_TIER: &[ExerciseRow] = &[
    ("Brisk Walking", "45 minutes", "5 days/week", "Maintain heart rate at 60-70% max"),
    ("Cycling", "30 minutes", "3 days/week", "Moderate intensity cycling"),
    ("Swimming", "30 minutes", "2 days/week", "Low-impact cardio exercise"),
    ("Strength Training", "20 minutes", "2 days/week", "Light weights or resistance bands"),
];

const HIGH_TIER: &[ExerciseRow] = &[
    ("Walking Program", "60 minutes", "6 days/week", "Start with 20 min, gradually increase"),
    ("Aqua Aerobics", "45 minutes", "3 days/week", "Low-impact water exercises"),
    ("Stationary Bike", "30 minutes", "4 days/week", "Start at low resistance"),
    ("Chair Exercises", "15 minutes", "Daily", "Seated strength exercises"),
    ("Balance Training", "10 minutes", "Daily", "Prevent falls and improve stability"),
];

fn tier(level: RiskLevel) -> &'static [ExerciseRow] {
    match level {
        RiskLevel::Low => LOW_TIER,
        RiskLevel::Medium => MEDIUM_TIER,
        RiskLevel::High => HIGH_TIER,
    }
}

pub fn duration_weeks(level: RiskLevel) -> u32 {
    match level {
        RiskLevel::Low => 8,
        RiskLevel::Medium => 12,
        RiskLevel::High => 16,
    }
}

pub fn intensity(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Moderate to vigorous",
        RiskLevel::Medium => "Moderate intensity",
        RiskLevel::High => "Gentle progression - Start slow",
    }
}

/// Exercise tiers depend on the risk level only; every disease shares them.
pub fn generate_fitness_plan(_disease: DiseaseType, level: RiskLevel) -> FitnessPlan {
    let exercises = tier(level)
        .iter()
        .map(|(name, duration, frequency, description)| Exercise {
            name: (*name).into(),
            duration: (*duration).into(),
            frequency: (*frequency).into(),
            description: (*description).into(),
        })
        .collect();

    FitnessPlan {
        exercises,
        duration_weeks: duration_weeks(level),
        intensity: intensity(level).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_tier_has_five_exercises_over_sixteen_weeks() {
        let plan = generate_fitness_plan(DiseaseType::HeartDisease, RiskLevel::High);
        assert_eq!(plan.exercises.len(), 5);
        assert_eq!(plan.duration_weeks, 16);
        assert_eq!(plan.exercises[0].name, "Walking Program");
        assert_eq!(plan.intensity, "Gentle progression - Start slow");
    }

    #[test]
    fn tiers_grow_with_risk() {
        let sizes: Vec<_> = RiskLevel::ALL
            .iter()
            .map(|level| generate_fitness_plan(DiseaseType::Obesity, *level).exercises.len())
            .collect();
        assert_eq!(sizes, vec![3, 4, 5]);
        assert_eq!(duration_weeks(RiskLevel::Low), 8);
        assert_eq!(duration_weeks(RiskLevel::Medium), 12);
    }

    #[test]
    fn disease_does_not_change_exercises() {
        for level in RiskLevel::ALL {
            let reference = generate_fitness_plan(DiseaseType::Diabetes, level);
            for disease in DiseaseType::ALL {
                assert_eq!(generate_fitness_plan(disease, level), reference);
            }
        }
    }
}
