// ABOUTME: Core data models for the Larder matching engine
// ABOUTME: Re-exports ingredient, recipe, and match/substitution types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

/// Ingredient record and identifier types
pub mod ingredient;

/// Match, substitution, and suggester output types
pub mod matching;

/// Recipe record and requirement-set derivation
pub mod recipe;

pub use ingredient::{Ingredient, IngredientId};
pub use matching::{RecipeContext, RecipeMatch, SuggestedSubstitute, Substitution};
pub use recipe::Recipe;
