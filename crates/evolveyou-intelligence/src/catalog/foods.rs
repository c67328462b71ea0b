// ABOUTME: Built-in food table with per-100 nutrient profiles
// ABOUTME: Ordered candidate lists per meal category drive the greedy meal fill
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use evolveyou_core::models::MealCategory;

use super::{FoodCatalog, FoodCatalogEntry};

const fn food(
    id: &'static str,
    name: &'static str,
    kcal: f64,
    macros: [f64; 4],
    unit: &'static str,
) -> FoodCatalogEntry {
    FoodCatalogEntry {
        id,
        name,
        kcal_per_100: kcal,
        protein_per_100: macros[0],
        carbs_per_100: macros[1],
        fat_per_100: macros[2],
        fiber_per_100: macros[3],
        unit,
    }
}

// Nutrient values per 100 g/ml: [protein, carbs, fat, fiber]
const FOODS: &[FoodCatalogEntry] = &[
    food("oats_with_banana", "Oats with banana", 68.0, [2.4, 12.0, 1.4, 1.7], "g"),
    food("scrambled_eggs", "Scrambled eggs", 155.0, [13.0, 1.6, 10.6, 0.0], "g"),
    food("orange_juice", "Orange juice", 45.0, [0.7, 10.4, 0.2, 0.2], "ml"),
    food("wholegrain_bread", "Wholegrain bread", 247.0, [9.4, 41.3, 3.4, 6.8], "g"),
    food("greek_yogurt", "Greek yogurt", 59.0, [10.2, 3.6, 0.4, 0.0], "g"),
    food("mixed_nuts", "Mixed nuts", 607.0, [20.0, 21.0, 54.0, 7.0], "g"),
    food("banana", "Banana", 89.0, [1.1, 22.8, 0.3, 2.6], "g"),
    food("whey_protein", "Whey protein", 400.0, [80.0, 8.0, 6.0, 0.0], "g"),
    food("apple", "Apple", 52.0, [0.3, 13.8, 0.2, 2.4], "g"),
    food("grilled_chicken_breast", "Grilled chicken breast", 165.0, [31.0, 0.0, 3.6, 0.0], "g"),
    food("brown_rice", "Brown rice", 111.0, [2.6, 23.0, 0.9, 1.8], "g"),
    food("sauteed_broccoli", "Sautéed broccoli", 34.0, [2.8, 6.6, 0.4, 2.6], "g"),
    food("mixed_green_salad", "Mixed green salad", 20.0, [1.4, 3.6, 0.2, 1.8], "g"),
    food("extra_virgin_olive_oil", "Extra virgin olive oil", 884.0, [0.0, 0.0, 100.0, 0.0], "ml"),
    food("grilled_salmon", "Grilled salmon", 208.0, [20.4, 0.0, 13.4, 0.0], "g"),
    food("roasted_sweet_potato", "Roasted sweet potato", 86.0, [1.6, 20.1, 0.1, 3.0], "g"),
    food("grilled_asparagus", "Grilled asparagus", 20.0, [2.2, 3.9, 0.1, 2.1], "g"),
    food("cooked_quinoa", "Cooked quinoa", 120.0, [4.4, 21.3, 1.9, 2.8], "g"),
    food("avocado", "Avocado", 160.0, [2.0, 8.5, 14.7, 6.7], "g"),
];

const BREAKFAST: &[&str] = &[
    "oats_with_banana",
    "scrambled_eggs",
    "orange_juice",
    "wholegrain_bread",
    "greek_yogurt",
];
const SNACK: &[&str] = &["greek_yogurt", "mixed_nuts", "banana", "whey_protein", "apple"];
const LUNCH: &[&str] = &[
    "grilled_chicken_breast",
    "brown_rice",
    "sauteed_broccoli",
    "mixed_green_salad",
    "extra_virgin_olive_oil",
];
const DINNER: &[&str] = &[
    "grilled_salmon",
    "roasted_sweet_potato",
    "grilled_asparagus",
    "cooked_quinoa",
    "avocado",
];

/// Food catalog backed by the static table above
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFoodCatalog;

impl BuiltinFoodCatalog {
    const fn candidate_ids(category: MealCategory) -> &'static [&'static str] {
        match category {
            MealCategory::Breakfast => BREAKFAST,
            MealCategory::Snack => SNACK,
            MealCategory::Lunch => LUNCH,
            MealCategory::Dinner => DINNER,
        }
    }
}

impl FoodCatalog for BuiltinFoodCatalog {
    fn food(&self, id: &str) -> Option<&FoodCatalogEntry> {
        FOODS.iter().find(|entry| entry.id == id)
    }

    fn candidates(&self, category: MealCategory) -> Vec<&FoodCatalogEntry> {
        Self::candidate_ids(category)
            .iter()
            .filter_map(|id| self.food(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_candidate_resolves() {
        for category in [
            MealCategory::Breakfast,
            MealCategory::Snack,
            MealCategory::Lunch,
            MealCategory::Dinner,
        ] {
            assert_eq!(
                BuiltinFoodCatalog.candidates(category).len(),
                BuiltinFoodCatalog::candidate_ids(category).len()
            );
        }
    }

    #[test]
    fn test_candidate_order_follows_table() {
        let lunch = BuiltinFoodCatalog.candidates(MealCategory::Lunch);
        assert_eq!(lunch[0].id, "grilled_chicken_breast");
        assert_eq!(lunch[4].id, "extra_virgin_olive_oil");
    }

    #[test]
    fn test_energy_is_positive() {
        assert!(FOODS.iter().all(|entry| entry.kcal_per_100 > 0.0));
    }

    #[test]
    fn test_unknown_food() {
        assert!(BuiltinFoodCatalog.food("pizza").is_none());
    }
}
