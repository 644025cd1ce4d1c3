// ABOUTME: Ingredient record and identifier types for the Larder catalog
// ABOUTME: Ingredients are owned by the catalog and referenced elsewhere by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use serde::{Deserialize, Serialize};

/// Identifier for an ingredient record
pub type IngredientId = i64;

/// A single ingredient known to the catalog
///
/// Immutable once loaded. Recipes and matches carry copies for
/// serialization convenience, but the catalog owns the canonical record
/// and all cross-references go through the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    /// Unique ingredient identifier
    pub id: IngredientId,
    /// Display name
    pub name: String,
    /// Category used for substitution grouping ("dairy", "herbs", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Ingredient {
    /// Create an ingredient without a category
    #[must_use]
    pub fn new(id: IngredientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
        }
    }

    /// Create an ingredient with a substitution category
    #[must_use]
    pub fn with_category(id: IngredientId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: Some(category.into()),
        }
    }
}
