// ABOUTME: Error types for the Larder matching engine and its service boundary
// ABOUTME: Defines EngineError (data integrity), RequestError (validation), ServiceError (union)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Error handling for the matching engine.
//!
//! Three layers, matching the error taxonomy of the engine:
//!
//! - [`RequestError`]: caller-input validation failures, raised by the
//!   boundary layer before the engine is invoked
//! - [`EngineError`]: data-integrity faults the engine itself detects
//!   (a recipe referencing an ingredient the catalog does not know)
//! - [`ServiceError`]: boundary-facing union of the two, with an HTTP
//!   status mapping for the surrounding routing layer
//!
//! Degenerate inputs (a recipe with an empty requirement list) and empty
//! result sets are not errors; the engine excludes or returns empty.

use crate::models::IngredientId;

/// Data-integrity faults detected inside the matching engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A recipe references an ingredient id absent from the catalog
    #[error("Unknown ingredient id {id} referenced by recipe {recipe_id}")]
    UnknownIngredient {
        /// Ingredient id missing from the catalog
        id: IngredientId,
        /// Recipe that referenced the unknown id
        recipe_id: i64,
    },
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Caller-input validation errors, rejected before the engine runs
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    /// The suggestion request carried an empty ingredient list
    #[error("No ingredients provided")]
    NoIngredientsProvided,

    /// The substitution request carried an empty ingredient name
    #[error("No ingredient provided")]
    NoIngredientProvided,
}

/// Boundary-facing error union for service operations
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Input validation failure (HTTP 400 equivalent)
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Engine data-integrity fault (HTTP 500 equivalent)
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ServiceError {
    /// HTTP status code equivalent for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::Request(_) => 400,
            Self::Engine(_) => 500,
        }
    }
}
