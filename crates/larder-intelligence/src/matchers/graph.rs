// ABOUTME: Graph matcher surfacing commonly-paired ingredient combinations
// ABOUTME: Ranks recipes by the strongest clique contained in their requirement set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Relationship-graph strategy.
//!
//! Works over a prebuilt, frozen [`RelationshipGraph`]. The strategy's
//! signature surface is `common_combinations`: maximal cliques of the
//! induced available-ingredient subgraph, i.e. which of the user's
//! ingredients are historically used together, independent of any single
//! recipe's full requirement list. Ranked matches use those combinations
//! as the primary ranking signal.

use std::collections::HashSet;

use larder_core::{EngineResult, IngredientId, Recipe, RecipeMatch};

use crate::catalog::IngredientCatalog;
use crate::config::MatchingConfig;
use crate::graph::RelationshipGraph;

use super::{match_score, resolve_missing};

/// Matcher over the ingredient relationship graph
#[derive(Debug, Clone, Copy)]
pub struct GraphMatcher<'a> {
    graph: &'a RelationshipGraph,
    catalog: &'a IngredientCatalog,
    config: &'a MatchingConfig,
}

impl<'a> GraphMatcher<'a> {
    /// Create a matcher over a prebuilt graph
    #[must_use]
    pub const fn new(
        graph: &'a RelationshipGraph,
        catalog: &'a IngredientCatalog,
        config: &'a MatchingConfig,
    ) -> Self {
        Self {
            graph,
            catalog,
            config,
        }
    }

    /// Combinations of available ingredients historically used together
    ///
    /// Maximal cliques of the induced available-ingredient subgraph, kept
    /// at the configured minimum size (default 2), sorted by size
    /// descending with ascending member order breaking ties.
    #[must_use]
    pub fn common_combinations(&self, available: &[IngredientId]) -> Vec<Vec<IngredientId>> {
        let subgraph = self.graph.induced_subgraph(available);
        let mut combinations: Vec<Vec<IngredientId>> = subgraph
            .maximal_cliques()
            .into_iter()
            .filter(|clique| clique.len() >= self.config.limits.min_combination_size)
            .collect();
        combinations.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        combinations
    }

    /// Find up to `k` matches ranked by combination support
    ///
    /// Every recipe with a positive match score qualifies; recipes whose
    /// requirement set contains a large common combination rank first,
    /// then higher match score, then fewer missing ingredients.
    ///
    /// # Errors
    ///
    /// Returns [`larder_core::EngineError::UnknownIngredient`] when a
    /// recipe references an id absent from the catalog.
    pub fn find_recipes(
        &self,
        available: &HashSet<IngredientId>,
        corpus: &[Recipe],
        k: usize,
    ) -> EngineResult<Vec<RecipeMatch>> {
        let available_ids: Vec<IngredientId> = {
            let mut ids: Vec<IngredientId> = available.iter().copied().collect();
            ids.sort_unstable();
            ids
        };
        let combinations = self.common_combinations(&available_ids);

        let mut ranked: Vec<(usize, RecipeMatch)> = Vec::new();
        for recipe in corpus {
            let ordered = recipe.requirement_ids();
            let Some(score) = match_score(available, &ordered) else {
                continue;
            };
            if score <= 0.0 {
                continue;
            }
            let required: HashSet<IngredientId> = ordered.iter().copied().collect();
            let support = combinations
                .iter()
                .filter(|combo| combo.iter().all(|id| required.contains(id)))
                .map(|combo| combo.len())
                .max()
                .unwrap_or(0);
            let missing = resolve_missing(self.catalog, recipe, &ordered, available)?;
            ranked.push((
                support,
                RecipeMatch {
                    recipe: recipe.clone(),
                    match_score: score,
                    missing_ingredients: missing,
                    substitutions: Vec::new(),
                },
            ));
        }

        ranked.sort_by(|(support_a, a), (support_b, b)| {
            support_b
                .cmp(support_a)
                .then_with(|| b.match_score.total_cmp(&a.match_score))
                .then_with(|| a.missing_ingredients.len().cmp(&b.missing_ingredients.len()))
        });
        Ok(ranked
            .into_iter()
            .take(k)
            .map(|(_, matched)| matched)
            .collect())
    }
}
