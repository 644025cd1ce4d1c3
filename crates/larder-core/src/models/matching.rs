// ABOUTME: Match, substitution, and suggester output types
// ABOUTME: JSON-serializable result records the service boundary returns to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use serde::{Deserialize, Serialize};

use super::ingredient::{Ingredient, IngredientId};
use super::recipe::Recipe;

/// A scored recipe match produced by one of the matching strategies
///
/// `match_score` is the fraction of the recipe's requirement set covered
/// by the available set, always recomputed from the current available set
/// and never cached across calls. `missing_ingredients` equals
/// required-set minus available-set at call time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeMatch {
    /// The matched recipe
    pub recipe: Recipe,
    /// Coverage score in `[0, 1]`
    pub match_score: f64,
    /// Required ingredients the caller does not have, in recipe order
    pub missing_ingredients: Vec<Ingredient>,
    /// Substitution proposals for missing ingredients (greedy strategy)
    pub substitutions: Vec<Substitution>,
}

/// A substitution proposal for one missing ingredient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Substitution {
    /// Id of the missing ingredient being substituted
    pub missing_ingredient_id: IngredientId,
    /// Name of the available ingredient proposed as a stand-in
    pub substitute_ingredient_name: String,
    /// Human-readable justification ("Similar dairy")
    pub reason: String,
}

/// One ranked candidate returned by the substitution suggester
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestedSubstitute {
    /// The candidate ingredient
    pub substitute: Ingredient,
    /// Confidence in `[0, 1]`, decreasing with dissimilarity
    pub confidence: f64,
    /// Human-readable justification
    pub reason: String,
}

/// Optional recipe context supplied with a substitution request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeContext {
    /// Cuisine the caller is cooking ("italian", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Dish type ("pasta", "soup", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_type: Option<String>,
}
