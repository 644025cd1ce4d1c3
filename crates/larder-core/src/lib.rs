// ABOUTME: Core types for the Larder recipe matching platform
// ABOUTME: Foundation crate with ingredient/recipe models and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

#![deny(unsafe_code)]

//! # Larder Core
//!
//! Foundation crate providing shared types for the Larder recipe matching
//! engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: engine and boundary error types (`EngineError`,
//!   `RequestError`, `ServiceError`)
//! - **models**: core data models (`Ingredient`, `Recipe`, `RecipeMatch`,
//!   `Substitution`)

/// Engine and boundary error types
pub mod errors;

/// Core data models (ingredients, recipes, matches, substitutions)
pub mod models;

pub use errors::{EngineError, EngineResult, RequestError, ServiceError};
pub use models::{
    Ingredient, IngredientId, Recipe, RecipeContext, RecipeMatch, SuggestedSubstitute,
    Substitution,
};
