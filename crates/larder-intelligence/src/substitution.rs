// ABOUTME: Substitution index grouping ingredients by category, plus the suggester
// ABOUTME: Category-mates rank by co-occurrence weight with confidence decaying by rank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Ingredient substitution support.
//!
//! The [`SubstitutionIndex`] is precomputed once per catalog: ingredients
//! group by their `category` field, and every ingredient's substitute
//! candidates are all other ingredients in the same category, in catalog
//! iteration order. Ingredients without a category take no part in
//! substitution.
//!
//! The [`SubstitutionSuggester`] answers the boundary's substitution
//! endpoint: ranked category-mates with a confidence score decreasing by
//! rank, never failing for an unknown ingredient.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt::Write as _;

use larder_core::{IngredientId, RecipeContext, SuggestedSubstitute};

use crate::catalog::IngredientCatalog;
use crate::config::MatchThresholds;
use crate::graph::RelationshipGraph;

/// Confidence floor for low-ranked suggestions
const MIN_CONFIDENCE: f64 = 0.05;

/// Category-based ingredient interchangeability table
#[derive(Debug, Clone, Default)]
pub struct SubstitutionIndex {
    alternatives: HashMap<IngredientId, Vec<IngredientId>>,
}

impl SubstitutionIndex {
    /// Build the index from a catalog
    ///
    /// Grouping follows catalog iteration order, so each ingredient's
    /// alternatives list is deterministic and the greedy matcher's
    /// "first available alternative" pick is reproducible.
    #[must_use]
    pub fn build(catalog: &IngredientCatalog) -> Self {
        let mut categories: HashMap<&str, Vec<IngredientId>> = HashMap::new();
        for ingredient in catalog.iter() {
            if let Some(category) = ingredient.category.as_deref() {
                categories.entry(category).or_default().push(ingredient.id);
            }
        }

        let mut alternatives: HashMap<IngredientId, Vec<IngredientId>> = HashMap::new();
        for members in categories.values() {
            for &id in members {
                let others: Vec<IngredientId> =
                    members.iter().copied().filter(|&other| other != id).collect();
                if !others.is_empty() {
                    alternatives.insert(id, others);
                }
            }
        }
        Self { alternatives }
    }

    /// Substitute candidates for `id`, in catalog order
    ///
    /// Empty for ids that are unknown, uncategorized, or alone in their
    /// category.
    #[must_use]
    pub fn alternatives(&self, id: IngredientId) -> &[IngredientId] {
        self.alternatives.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Number of ingredients with at least one alternative
    #[must_use]
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Whether no ingredient has an alternative
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

/// Ranked substitution suggestions for a single ingredient
///
/// Holds only borrows of the engine's immutable snapshot; construction is
/// free and queries are read-only.
#[derive(Debug, Clone)]
pub struct SubstitutionSuggester<'a> {
    catalog: &'a IngredientCatalog,
    index: &'a SubstitutionIndex,
    graph: Option<&'a RelationshipGraph>,
    thresholds: MatchThresholds,
}

impl<'a> SubstitutionSuggester<'a> {
    /// Create a suggester over the catalog and its substitution index
    #[must_use]
    pub fn new(catalog: &'a IngredientCatalog, index: &'a SubstitutionIndex) -> Self {
        Self {
            catalog,
            index,
            graph: None,
            thresholds: MatchThresholds::default(),
        }
    }

    /// Re-rank candidates by co-occurrence weight in the relationship graph
    #[must_use]
    pub fn with_graph(mut self, graph: &'a RelationshipGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Override the confidence curve
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: MatchThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Suggest substitutes for the named ingredient
    ///
    /// The ingredient resolves by case-insensitive name; unknown names
    /// yield an empty list, never an error. Candidates are the
    /// ingredient's category-mates, re-ranked by co-occurrence weight when
    /// a graph is attached, with confidence decaying geometrically by
    /// rank.
    #[must_use]
    pub fn suggest(&self, ingredient: &str, context: &RecipeContext) -> Vec<SuggestedSubstitute> {
        let Some(target) = self.catalog.find_by_name(ingredient) else {
            return Vec::new();
        };

        let mut candidates: Vec<_> = self
            .index
            .alternatives(target.id)
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .collect();
        if let Some(graph) = self.graph {
            // Stable sort keeps catalog order among equally-weighted candidates.
            candidates.sort_by_key(|c| Reverse(graph.weight(target.id, c.id).unwrap_or(0)));
        }

        let category = target.category.as_deref().unwrap_or("ingredient");
        candidates
            .into_iter()
            .enumerate()
            .map(|(rank, candidate)| {
                let steps = i32::try_from(rank).unwrap_or(i32::MAX);
                let confidence = (self.thresholds.base_confidence
                    * self.thresholds.confidence_decay.powi(steps))
                .max(MIN_CONFIDENCE);

                let mut reason = format!("Same {category} category as {}", target.name);
                if let Some(cuisine) = context.cuisine.as_deref() {
                    let _ = write!(reason, ", suited to {cuisine} cooking");
                } else if let Some(dish) = context.dish_type.as_deref() {
                    let _ = write!(reason, ", suited to {dish}");
                }

                SuggestedSubstitute {
                    substitute: candidate.clone(),
                    confidence,
                    reason,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::Ingredient;

    fn dairy_catalog() -> IngredientCatalog {
        IngredientCatalog::from_ingredients(vec![
            Ingredient::with_category(4, "Parmesan", "dairy"),
            Ingredient::with_category(5, "Cheddar", "dairy"),
            Ingredient::with_category(6, "Gruyere", "dairy"),
            Ingredient::new(1, "Spaghetti"),
        ])
    }

    #[test]
    fn alternatives_follow_catalog_order() {
        let catalog = dairy_catalog();
        let index = SubstitutionIndex::build(&catalog);

        assert_eq!(index.alternatives(4), &[5, 6]);
        assert_eq!(index.alternatives(5), &[4, 6]);
        // Uncategorized ingredients take no part in substitution.
        assert_eq!(index.alternatives(1), &[] as &[IngredientId]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn confidence_decreases_with_rank() {
        let catalog = dairy_catalog();
        let index = SubstitutionIndex::build(&catalog);
        let suggester = SubstitutionSuggester::new(&catalog, &index);

        let suggestions = suggester.suggest("Parmesan", &RecipeContext::default());
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].confidence > suggestions[1].confidence);
        assert!(suggestions.iter().all(|s| (0.0..=1.0).contains(&s.confidence)));
        assert_eq!(suggestions[0].substitute.name, "Cheddar");
    }

    #[test]
    fn unknown_ingredient_yields_empty_not_error() {
        let catalog = dairy_catalog();
        let index = SubstitutionIndex::build(&catalog);
        let suggester = SubstitutionSuggester::new(&catalog, &index);

        assert!(suggester.suggest("Dragonfruit", &RecipeContext::default()).is_empty());
    }

    #[test]
    fn context_shapes_the_reason() {
        let catalog = dairy_catalog();
        let index = SubstitutionIndex::build(&catalog);
        let suggester = SubstitutionSuggester::new(&catalog, &index);

        let context = RecipeContext {
            cuisine: Some("italian".into()),
            dish_type: None,
        };
        let suggestions = suggester.suggest("Parmesan", &context);
        assert!(suggestions[0].reason.contains("italian"));
        assert!(suggestions[0].reason.contains("dairy"));
    }
}
