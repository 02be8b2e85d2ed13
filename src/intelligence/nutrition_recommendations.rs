// ABOUTME: Advisory nutrition guidance derived from the caloric plan
// ABOUTME: Goal-specific tips with embedded deficit/surplus and a 30/50/20 macro split
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition Recommendation Generator
//!
//! Produces the ordered guidance shown next to a projection. The text is
//! advisory; only the embedded numbers (energy gap and macro grams) are
//! computed facts.

use balance_core::constants::macronutrients::{
    CARBS_KCAL_PER_G, CARBS_SHARE, FAT_KCAL_PER_G, FAT_SHARE, PROTEIN_KCAL_PER_G, PROTEIN_SHARE,
};
use serde::{Deserialize, Serialize};

use crate::models::Goal;

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g), 30% of calories at 4 kcal/g
    pub protein_g: i64,
    /// Carbohydrate (g), 50% of calories at 4 kcal/g
    pub carbs_g: i64,
    /// Fat (g), 20% of calories at 9 kcal/g
    pub fat_g: i64,
}

impl MacroTargets {
    /// Split a daily calorie target 30/50/20 into rounded grams
    #[must_use]
    pub fn from_calories(calories: f64) -> Self {
        Self {
            protein_g: round_to_int(calories * PROTEIN_SHARE / PROTEIN_KCAL_PER_G),
            carbs_g: round_to_int(calories * CARBS_SHARE / CARBS_KCAL_PER_G),
            fat_g: round_to_int(calories * FAT_SHARE / FAT_KCAL_PER_G),
        }
    }
}

/// Round half away from zero to a whole number
fn round_to_int(value: f64) -> i64 {
    value.round() as i64
}

/// Generate nutrition recommendations for a goal and calorie target
///
/// Order: two universal tips, then the goal-specific tips (the first of which
/// states the daily deficit or surplus for lose/gain), then the macro split.
#[must_use]
pub fn generate_nutrition_recommendations(goal: Goal, calories: f64, tdee: f64) -> Vec<String> {
    let mut recommendations = vec![
        "Stay well hydrated: drink 2-3 liters of water per day.".to_owned(),
        "Eat quality protein: lean meats, fish, eggs and legumes.".to_owned(),
    ];

    let energy_gap = round_to_int((tdee - calories).abs());

    match goal {
        Goal::Lose => recommendations.extend([
            format!("Caloric deficit of {energy_gap} kcal/day for gradual weight loss."),
            "Prioritize fiber- and protein-rich foods for greater satiety.".to_owned(),
            "Avoid ultra-processed foods and sugary drinks.".to_owned(),
            "Have 4-5 smaller meals a day to keep your metabolism active.".to_owned(),
        ]),
        Goal::Gain => recommendations.extend([
            format!("Caloric surplus of {energy_gap} kcal/day for healthy weight gain."),
            "Increase complex carbohydrates: oats, brown rice, pasta.".to_owned(),
            "Include healthy fats: avocado, nuts, olive oil.".to_owned(),
            "Consider calorie-dense shakes between main meals.".to_owned(),
        ]),
        Goal::Maintain => recommendations.extend([
            "Keep a balanced caloric intake to preserve your current weight.".to_owned(),
            "Distribute your macronutrients: 50% carbohydrates, 30% protein, 20% fat.".to_owned(),
            "Vary your diet to get all the micronutrients you need.".to_owned(),
        ]),
    }

    let macros = MacroTargets::from_calories(calories);
    recommendations.push(format!(
        "Suggested distribution: {}g protein, {}g carbohydrates, {}g fat.",
        macros.protein_g, macros.carbs_g, macros.fat_g
    ));

    recommendations
}
