// ABOUTME: Shared fixtures for larder-intelligence integration tests
// ABOUTME: A small pantry catalog and recipe corpus with known overlap structure
#![allow(dead_code)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use larder_core::{Ingredient, Recipe};
use larder_intelligence::IngredientCatalog;

/// Ingredient ids used across the fixture corpus
pub const SPAGHETTI: i64 = 1;
pub const BACON: i64 = 2;
pub const EGGS: i64 = 3;
pub const PARMESAN: i64 = 4;
pub const CHEDDAR: i64 = 5;
pub const PENNE: i64 = 6;
pub const TOMATOES: i64 = 7;
pub const BASIL: i64 = 8;
pub const GARLIC: i64 = 9;
pub const OLIVE_OIL: i64 = 10;

/// Catalog with two dairy ingredients (Parmesan, Cheddar) and two pastas
pub fn pantry_catalog() -> IngredientCatalog {
    IngredientCatalog::from_ingredients(vec![
        Ingredient::with_category(SPAGHETTI, "Spaghetti", "pasta"),
        Ingredient::with_category(BACON, "Bacon", "meat"),
        Ingredient::new(EGGS, "Eggs"),
        Ingredient::with_category(PARMESAN, "Parmesan", "dairy"),
        Ingredient::with_category(CHEDDAR, "Cheddar", "dairy"),
        Ingredient::with_category(PENNE, "Penne", "pasta"),
        Ingredient::with_category(TOMATOES, "Tomatoes", "produce"),
        Ingredient::with_category(BASIL, "Basil", "herbs"),
        Ingredient::with_category(GARLIC, "Garlic", "produce"),
        Ingredient::new(OLIVE_OIL, "Olive Oil"),
    ])
}

fn ingredient(id: i64) -> Ingredient {
    pantry_catalog()
        .get(id)
        .cloned()
        .unwrap_or_else(|| Ingredient::new(id, format!("Ingredient {id}")))
}

/// Build a recipe over catalog ingredient ids
pub fn recipe(id: i64, title: &str, ingredient_ids: &[i64]) -> Recipe {
    Recipe {
        id,
        title: title.to_owned(),
        instructions: format!("Prepare {title}."),
        prep_time_minutes: 20,
        all_ingredients: ingredient_ids.iter().map(|&i| ingredient(i)).collect(),
    }
}

/// Spaghetti Carbonara: {Spaghetti, Bacon, Eggs, Parmesan}
pub fn carbonara() -> Recipe {
    recipe(1, "Spaghetti Carbonara", &[SPAGHETTI, BACON, EGGS, PARMESAN])
}

/// Tomato Basil Penne: {Penne, Tomatoes, Basil, Garlic} - disjoint from carbonara
pub fn tomato_penne() -> Recipe {
    recipe(2, "Tomato Basil Penne", &[PENNE, TOMATOES, BASIL, GARLIC])
}

/// Cacio e Pepe: shares Spaghetti with carbonara
pub fn cacio_e_pepe() -> Recipe {
    recipe(3, "Cacio e Pepe", &[SPAGHETTI, PARMESAN])
}
