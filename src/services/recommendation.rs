use super::{diet, fitness, schedule, wellbeing};
use crate::domain::plan::RecommendationPlan;
use crate::domain::risk::{DiseaseType, RiskLevel};

const LIFESTYLE_MODIFICATIONS: &[&str] = &[
    "Quit smoking if applicable",
    "Limit alcohol consumption",
    "Maintain healthy weight",
    "Regular health check-ups",
    "Monitor blood pressure regularly",
    "Track your progress daily",
    "Stay consistent with lifestyle changes",
    "Seek support from family and friends",
];

/// Composes all five generators for one (disease, level) pair.
pub fn assemble(disease: DiseaseType, level: RiskLevel) -> RecommendationPlan {
    RecommendationPlan {
        fitness_plan: fitness::generate_fitness_plan(disease, level),
        diet_plan: diet::generate_diet_plan(disease, level),
        lifestyle_modifications: LIFESTYLE_MODIFICATIONS
            .iter()
            .map(|m| (*m).to_string())
            .collect(),
        sleep_recommendations: wellbeing::generate_sleep_recommendations(level),
        stress_management: wellbeing::generate_stress_management(level),
        weekly_schedule: schedule::generate_weekly_schedule(disease, level),
    }
}

/// Like [`assemble`] but keyed by a free-form disease label. Labels that do
/// not name a known disease get the fallback diet menu instead of an error.
pub fn assemble_for_label(label: &str, level: RiskLevel) -> RecommendationPlan {
    let disease = DiseaseType::try_from(label).unwrap_or_else(|_| {
        tracing::warn!(
            label,
            fallback = diet::FALLBACK_MENU.as_str(),
            "Unrecognized disease type, using fallback menu"
        );
        diet::FALLBACK_MENU
    });
    assemble(disease, level)
}
