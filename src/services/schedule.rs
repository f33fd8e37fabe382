use crate::domain::plan::{DaySchedule, WeeklySchedule};
use crate::domain::risk::{DiseaseType, RiskLevel};

/// (morning, afternoon, evening)
type DayRow = ([&'static str; 3], [&'static str; 3], [&'static str; 3]);

const MONDAY: DayRow = (
    ["30 min walk", "Healthy breakfast", "Hydrate"],
    ["Balanced lunch", "Light stretching", "10 min meditation"],
    ["Light dinner", "Evening walk", "Relaxation"],
);
const TUESDAY: DayRow = (
    ["Yoga session", "Nutritious breakfast", "Plan meals"],
    ["Healthy lunch", "Active break", "Stress relief exercise"],
    ["Home-cooked dinner", "Family time", "Early bedtime prep"],
);
const WEDNESDAY: DayRow = (
    ["Cardio exercise", "Protein-rich breakfast", "Mindful breathing"],
    ["Veggie-packed lunch", "Short walk", "Hydration check"],
    ["Light dinner", "Hobby time", "Screen-free hour"],
);
const THURSDAY: DayRow = (
    ["Strength training", "Energizing breakfast", "Goal review"],
    ["Balanced lunch", "Meditation break", "Healthy snack"],
    ["Nutritious dinner", "Journaling", "Prepare for sleep"],
);
const FRIDAY: DayRow = (
    ["Active walk", "Healthy breakfast", "Positive affirmations"],
    ["Light lunch", "Stretching", "Social connection"],
    ["Healthy dinner", "Relaxing activity", "Wind down"],
);
const SATURDAY: DayRow = (
    ["Longer workout", "Hearty breakfast", "Meal prep"],
    ["Nutritious lunch", "Outdoor activity", "Hobby time"],
    ["Balanced dinner", "Social time", "Self-care routine"],
);
const SUNDAY: DayRow = (
    ["Gentle yoga", "Leisurely breakfast", "Week planning"],
    ["Healthy lunch", "Nature walk", "Reflection time"],
    ["Light dinner", "Prepare for week", "Early rest"],
);

fn day((morning, afternoon, evening): DayRow) -> DaySchedule {
    let owned = |slot: [&str; 3]| -> Vec<String> { slot.iter().map(|s| (*s).to_string()).collect() };
    DaySchedule {
        morning: owned(morning),
        afternoon: owned(afternoon),
        evening: owned(evening),
    }
}

/// Generic healthy routine shared by every disease and tier.
pub fn generate_weekly_schedule(_disease: DiseaseType, _level: RiskLevel) -> WeeklySchedule {
    WeeklySchedule {
        monday: day(MONDAY),
        tuesday: day(TUESDAY),
        wednesday: day(WEDNESDAY),
        thursday: day(THURSDAY),
        friday: day(FRIDAY),
        saturday: day(SATURDAY),
        sunday: day(SUNDAY),
    }
}
