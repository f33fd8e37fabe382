use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub duration: String,
    pub frequency: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FitnessPlan {
    pub exercises: Vec<Exercise>,
    pub duration_weeks: u32,
    pub intensity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: String,
    pub suggestions: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DietPlan {
    pub meals: Vec<Meal>,
    pub calories_target: u32,
    pub guidelines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SleepRecommendations {
    pub target_hours: f64,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StressManagement {
    pub techniques: Vec<String>,
    pub daily_practices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySchedule {
    pub morning: Vec<String>,
    pub afternoon: Vec<String>,
    pub evening: Vec<String>,
}

/// Seven-day routine. Serialized as a map keyed by weekday name, Monday first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WeeklySchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

#[cfg(test)]
impl WeeklySchedule {
    pub fn day(&self, weekday: chrono::Weekday) -> &DaySchedule {
        use chrono::Weekday;
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

/// Bundle of template-driven guidance for one (disease, risk level) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationPlan {
    pub fitness_plan: FitnessPlan,
    pub diet_plan: DietPlan,
    pub lifestyle_modifications: Vec<String>,
    pub sleep_recommendations: SleepRecommendations,
    pub stress_management: StressManagement,
    pub weekly_schedule: WeeklySchedule,
}
