// ABOUTME: Boundary service contracts and input validation for the matching engine
// ABOUTME: Validates caller input before the engine runs; engine never sees bad requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Service boundary of the matching engine.
//!
//! The surrounding HTTP layer deserializes requests into these types and
//! calls the service functions; all caller-input validation happens here,
//! before the engine is invoked. The engine itself signals no
//! request-shaped errors, only computational results (possibly empty).

use serde::{Deserialize, Serialize};

use larder_core::{
    IngredientId, RecipeContext, RecipeMatch, RequestError, ServiceError, SuggestedSubstitute,
};

use crate::config::matching::DEFAULT_K;
use crate::matchers::{MatchingAlgorithm, MatchingEngine};

fn default_algorithm() -> String {
    "graph".to_owned()
}

const fn default_k() -> usize {
    DEFAULT_K
}

/// Recipe suggestion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsRequest {
    /// Ingredient ids the caller has on hand
    pub ingredients: Vec<IngredientId>,
    /// Strategy name; unrecognized values fall back to `"graph"`
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Maximum number of results
    #[serde(default = "default_k")]
    pub k: usize,
}

/// Recipe suggestion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    /// Ranked matches, best first
    pub suggestions: Vec<RecipeMatch>,
    /// The strategy that actually ran
    pub algorithm_used: MatchingAlgorithm,
}

/// Ingredient substitution request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionsRequest {
    /// Name of the ingredient to find substitutes for
    pub ingredient: String,
    /// Optional recipe context (cuisine, dish type)
    #[serde(default)]
    pub recipe_context: RecipeContext,
}

/// Ingredient substitution response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionsResponse {
    /// The ingredient the caller asked about
    pub ingredient: String,
    /// Ranked substitution candidates (possibly empty)
    pub substitutions: Vec<SuggestedSubstitute>,
}

/// Suggest recipes for the caller's available ingredients
///
/// # Errors
///
/// Returns [`RequestError::NoIngredientsProvided`] for an empty
/// ingredient list (the engine is never invoked), or an engine error for
/// corpus data-integrity faults.
pub fn suggest_recipes(
    engine: &MatchingEngine,
    request: &SuggestionsRequest,
) -> Result<SuggestionsResponse, ServiceError> {
    if request.ingredients.is_empty() {
        return Err(RequestError::NoIngredientsProvided.into());
    }

    let algorithm = MatchingAlgorithm::from_str_lossy(&request.algorithm);
    tracing::debug!(?algorithm, k = request.k, "dispatching recipe suggestion");
    let suggestions = engine.find_matches(algorithm, &request.ingredients, request.k)?;
    Ok(SuggestionsResponse {
        suggestions,
        algorithm_used: algorithm,
    })
}

/// Suggest substitutions for a single missing ingredient
///
/// # Errors
///
/// Returns [`RequestError::NoIngredientProvided`] for an empty or blank
/// ingredient name. An ingredient unknown to the catalog is not an error;
/// the response carries an empty candidate list.
pub fn suggest_substitutions(
    engine: &MatchingEngine,
    request: &SubstitutionsRequest,
) -> Result<SubstitutionsResponse, ServiceError> {
    if request.ingredient.trim().is_empty() {
        return Err(RequestError::NoIngredientProvided.into());
    }

    let substitutions = engine.suggest_substitutions(&request.ingredient, &request.recipe_context);
    Ok(SubstitutionsResponse {
        ingredient: request.ingredient.clone(),
        substitutions,
    })
}
