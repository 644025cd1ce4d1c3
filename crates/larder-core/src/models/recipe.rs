// ABOUTME: Recipe record and requirement-set derivation
// ABOUTME: A recipe's ingredient list defines its requirement set (duplicates collapse)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use serde::{Deserialize, Serialize};

use super::ingredient::{Ingredient, IngredientId};

/// A recipe as supplied by the storage collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Preparation instructions
    pub instructions: String,
    /// Preparation time in minutes
    pub prep_time_minutes: u32,
    /// Full ingredient list; defines the recipe's requirement set
    pub all_ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Requirement set of the recipe as ingredient ids
    ///
    /// Duplicate ingredient entries collapse; the first occurrence keeps
    /// its position so callers iterate in a deterministic, recipe-defined
    /// order.
    #[must_use]
    pub fn requirement_ids(&self) -> Vec<IngredientId> {
        let mut seen = Vec::with_capacity(self.all_ingredients.len());
        for ingredient in &self.all_ingredients {
            if !seen.contains(&ingredient.id) {
                seen.push(ingredient.id);
            }
        }
        seen
    }
}
