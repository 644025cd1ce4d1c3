// ABOUTME: Ingredient catalog mapping ids to ingredient records
// ABOUTME: Preserves load order so substitution candidates rank deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use std::collections::HashMap;

use larder_core::{EngineError, EngineResult, Ingredient, IngredientId};

/// Lookup table mapping ingredient id to its canonical record
///
/// Leaf dependency of every matching strategy. Load (catalog iteration)
/// order is preserved because the substitution index ranks same-category
/// alternatives by it.
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    order: Vec<IngredientId>,
    by_id: HashMap<IngredientId, Ingredient>,
}

impl IngredientCatalog {
    /// Build a catalog from loaded ingredient records
    ///
    /// Duplicate ids keep the order slot of their first occurrence; the
    /// last record for an id wins.
    #[must_use]
    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> Self {
        let mut catalog = Self::default();
        for ingredient in ingredients {
            if !catalog.by_id.contains_key(&ingredient.id) {
                catalog.order.push(ingredient.id);
            }
            catalog.by_id.insert(ingredient.id, ingredient);
        }
        catalog
    }

    /// Look up an ingredient by id
    #[must_use]
    pub fn get(&self, id: IngredientId) -> Option<&Ingredient> {
        self.by_id.get(&id)
    }

    /// Look up an ingredient a recipe requires, failing fast when absent
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownIngredient`] when `id` is not in the
    /// catalog. A recipe referencing an unknown id is a data-integrity
    /// fault; the engine refuses to produce a partial match record.
    pub fn require(&self, id: IngredientId, recipe_id: i64) -> EngineResult<&Ingredient> {
        self.by_id
            .get(&id)
            .ok_or(EngineError::UnknownIngredient { id, recipe_id })
    }

    /// First ingredient whose name matches, case-insensitively
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Ingredient> {
        self.iter().find(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// Iterate ingredients in load order
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Number of distinct ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the catalog holds no ingredients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl FromIterator<Ingredient> for IngredientCatalog {
    fn from_iter<T: IntoIterator<Item = Ingredient>>(iter: T) -> Self {
        Self::from_ingredients(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_order_is_preserved() {
        let catalog = IngredientCatalog::from_ingredients(vec![
            Ingredient::new(3, "Eggs"),
            Ingredient::new(1, "Spaghetti"),
            Ingredient::new(2, "Bacon"),
        ]);

        let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Spaghetti", "Bacon"]);
    }

    #[test]
    fn require_reports_the_offending_recipe() {
        let catalog = IngredientCatalog::from_ingredients(vec![Ingredient::new(1, "Spaghetti")]);

        let err = catalog.require(9, 7).err();
        assert!(matches!(
            err,
            Some(EngineError::UnknownIngredient { id: 9, recipe_id: 7 })
        ));
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let catalog = IngredientCatalog::from_ingredients(vec![
            Ingredient::with_category(4, "Parmesan", "dairy"),
        ]);

        assert_eq!(catalog.find_by_name("parmesan").map(|i| i.id), Some(4));
        assert_eq!(catalog.find_by_name("gruyere"), None);
    }
}
