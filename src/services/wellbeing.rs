use crate::domain::plan::{SleepRecommendations, StressManagement};
use crate::domain::risk::RiskLevel;

pub const TARGET_SLEEP_HOURS: f64 = 7.5;

const SLEEP_TIPS: &[&str] = &[
    "Maintain consistent sleep schedule",
    "Create a dark, quiet sleeping environment",
    "Avoid screens 1 hour before bedtime",
    "Keep bedroom temperature cool (65-68°F)",
    "Avoid caffeine after 2 PM",
    "Practice relaxation techniques before bed",
    "Exercise regularly, but not close to bedtime",
    "Limit daytime naps to 20-30 minutes",
];

const STRESS_TECHNIQUES: &[&str] = &[
    "Deep breathing exercises (4-7-8 technique)",
    "Progressive muscle relaxation",
    "Mindfulness meditation",
    "Yoga or tai chi",
    "Journaling",
    "Nature walks",
    "Listening to calming music",
    "Talking to friends or counselor",
];

const DAILY_PRACTICES: &[&str] = &[
    "Start day with 5 minutes of meditation",
    "Take short breaks every 2 hours",
    "Practice gratitude - write 3 things daily",
    "Limit social media and news consumption",
    "Engage in a hobby you enjoy",
    "Spend time with loved ones",
    "Practice saying no to reduce overwhelm",
    "End day with relaxation routine",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// The level is accepted so sleep guidance can be tiered later; today every
// tier gets the same target and tips.
pub fn generate_sleep_recommendations(_level: RiskLevel) -> SleepRecommendations {
    SleepRecommendations {
        target_hours: TARGET_SLEEP_HOURS,
        tips: owned(SLEEP_TIPS),
    }
}

pub fn generate_stress_management(_level: RiskLevel) -> StressManagement {
    StressManagement {
        techniques: owned(STRESS_TECHNIQUES),
        daily_practices: owned(DAILY_PRACTICES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_guidance_is_untiered() {
        let low = generate_sleep_recommendations(RiskLevel::Low);
        let high = generate_sleep_recommendations(RiskLevel::High);
        assert_eq!(low, high);
        assert_eq!(low.target_hours, 7.5);
        assert_eq!(low.tips.len(), 8);
    }

    #[test]
    fn stress_lists_are_fixed() {
        let plan = generate_stress_management(RiskLevel::Medium);
        assert_eq!(plan.techniques.len(), 8);
        assert_eq!(plan.daily_practices.len(), 8);
        assert_eq!(plan.techniques[0], "Deep breathing exercises (4-7-8 technique)");
        assert_eq!(plan, generate_stress_management(RiskLevel::High));
    }
}
