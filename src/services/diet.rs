use crate::domain::plan::{DietPlan, Meal};
use crate::domain::risk::{DiseaseType, RiskLevel};

/// (meal type, suggestions, notes)
type MealRow = (&'static str, [&'static str; 3], &'static str);

/// Menu used when a stored disease label no longer parses.
pub const FALLBACK_MENU: DiseaseType = DiseaseType::Diabetes;

const DIABETES_MENU: &[MealRow] = &[
    (
        "Breakfast",
        ["Oatmeal with berries and nuts", "Greek yogurt with seeds", "Whole grain toast with avocado"],
        "Focus on low glycemic index foods",
    ),
    (
        "Lunch",
        ["Grilled chicken salad", "Quinoa bowl with vegetables", "Lentil soup with whole grain bread"],
        "Include lean protein and fiber",
    ),
    (
        "Dinner",
        [
            "Baked fish with steamed vegetables",
            "Turkey stir-fry with brown rice",
            "Chickpea curry with cauliflower rice",
        ],
        "Keep carbs moderate and include protein",
    ),
    (
        "Snacks",
        ["Handful of almonds", "Carrot sticks with hummus", "Apple with peanut butter"],
        "Choose snacks with protein or healthy fats",
    ),
];

const HEART_DISEASE_MENU: &[MealRow] = &[
    (
        "Breakfast",
        [
            "Overnight oats with flaxseeds",
            "Smoothie with spinach and berries",
            "Whole grain cereal with almond milk",
        ],
        "Rich in omega-3 and fiber",
    ),
    (
        "Lunch",
        [
            "Salmon salad with olive oil dressing",
            "Mediterranean vegetable wrap",
            "Bean and vegetable soup",
        ],
        "Heart-healthy fats and lean proteins",
    ),
    (
        "Dinner",
        [
            "Grilled fish with roasted vegetables",
            "Chicken breast with sweet potato",
            "Plant-based pasta with tomato sauce",
        ],
        "Low sodium, rich in potassium",
    ),
    (
        "Snacks",
        ["Walnuts", "Dark berries", "Celery with almond butter"],
        "Anti-inflammatory foods",
    ),
];

const HYPERTENSION_MENU: &[MealRow] = &[
    (
        "Breakfast",
        ["Banana smoothie with spinach", "Oatmeal with berries", "Whole grain toast with tomato"],
        "High in potassium, low in sodium",
    ),
    (
        "Lunch",
        [
            "Leafy green salad with grilled chicken",
            "Vegetable soup (low sodium)",
            "Brown rice with steamed broccoli",
        ],
        "DASH diet principles",
    ),
    (
        "Dinner",
        [
            "Baked salmon with asparagus",
            "Turkey with roasted Brussels sprouts",
            "Tofu stir-fry with vegetables",
        ],
        "Minimal salt, herbs for flavor",
    ),
    (
        "Snacks",
        ["Fresh fruit", "Unsalted nuts", "Cucumber slices"],
        "Natural, unprocessed foods",
    ),
];

const OBESITY_MENU: &[MealRow] = &[
    (
        "Breakfast",
        [
            "Egg white omelet with vegetables",
            "Protein smoothie with berries",
            "Greek yogurt with chia seeds",
        ],
        "High protein, low calorie",
    ),
    (
        "Lunch",
        [
            "Large salad with lean protein",
            "Vegetable soup with legumes",
            "Grilled chicken with vegetables",
        ],
        "High volume, low calorie density",
    ),
    (
        "Dinner",
        [
            "Grilled fish with large vegetable portion",
            "Zucchini noodles with turkey sauce",
            "Cauliflower rice with stir-fry",
        ],
        "Portion control, vegetable-focused",
    ),
    (
        "Snacks",
        ["Raw vegetables", "Air-popped popcorn", "Berries"],
        "Low calorie, filling options",
    ),
];

const GUIDELINES: &[&str] = &[
    "Drink 8-10 glasses of water daily",
    "Avoid processed and packaged foods",
    "Limit sugar intake",
    "Eat plenty of vegetables and fruits",
    "Choose whole grains over refined grains",
    "Include lean proteins in every meal",
    "Practice portion control",
    "Avoid late-night eating",
];

fn menu(disease: DiseaseType) -> &'static [MealRow] {
    match disease {
        DiseaseType::Diabetes => DIABETES_MENU,
        DiseaseType::HeartDisease => HEART_DISEASE_MENU,
        DiseaseType::Hypertension => HYPERTENSION_MENU,
        DiseaseType::Obesity => OBESITY_MENU,
    }
}

pub fn calories_target(level: RiskLevel) -> u32 {
    match level {
        RiskLevel::Low => 2000,
        RiskLevel::Medium => 1800,
        RiskLevel::High => 1600,
    }
}

pub fn generate_diet_plan(disease: DiseaseType, level: RiskLevel) -> DietPlan {
    let meals = menu(disease)
        .iter()
        .map(|(meal_type, suggestions, notes)| Meal {
            meal_type: (*meal_type).into(),
            suggestions: suggestions.iter().map(|s| (*s).into()).collect(),
            notes: (*notes).into(),
        })
        .collect();

    DietPlan {
        meals,
        calories_target: calories_target(level),
        guidelines: GUIDELINES.iter().map(|g| (*g).into()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_disease_high_uses_heart_menu_at_1600() {
        let plan = generate_diet_plan(DiseaseType::HeartDisease, RiskLevel::High);
        assert_eq!(plan.calories_target, 1600);
        assert_eq!(plan.meals.len(), 4);
        assert_eq!(plan.meals[0].meal_type, "Breakfast");
        assert_eq!(plan.meals[0].notes, "Rich in omega-3 and fiber");
        assert_eq!(plan.guidelines.len(), 8);
    }

    #[test]
    fn every_disease_has_its_own_menu() {
        let notes: std::collections::HashSet<_> = DiseaseType::ALL
            .iter()
            .map(|d| generate_diet_plan(*d, RiskLevel::Low).meals[1].notes.clone())
            .collect();
        assert_eq!(notes.len(), 4);
    }

    #[test]
    fn calories_drop_with_risk() {
        assert_eq!(calories_target(RiskLevel::Low), 2000);
        assert_eq!(calories_target(RiskLevel::Medium), 1800);
        assert_eq!(calories_target(RiskLevel::High), 1600);
    }

    #[test]
    fn meals_serialize_with_type_key() {
        let plan = generate_diet_plan(DiseaseType::Obesity, RiskLevel::Medium);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["meals"][3]["type"], "Snacks");
    }
}
