// ABOUTME: Greedy single-pass matcher emitting substitution suggestions
// ABOUTME: Parallel corpus scoring; ranks by score then substitution count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Greedy single-pass scorer.
//!
//! No backtracking and no disjointness constraint: every recipe with a
//! positive match score becomes a match. For each missing ingredient the
//! substitution index is consulted and the first alternative currently in
//! the available set (index order) is proposed as the substitute. The pick
//! order is intentional simplicity, not a similarity ranking.

use std::collections::HashSet;

use rayon::prelude::*;

use larder_core::{EngineResult, IngredientId, Recipe, RecipeMatch, Substitution};

use crate::catalog::IngredientCatalog;
use crate::config::MatchingConfig;
use crate::substitution::SubstitutionIndex;

use super::{match_score, resolve_missing};

/// Single-pass matcher with substitution suggestions
#[derive(Debug, Clone, Copy)]
pub struct GreedyMatcher<'a> {
    catalog: &'a IngredientCatalog,
    index: &'a SubstitutionIndex,
    config: &'a MatchingConfig,
}

impl<'a> GreedyMatcher<'a> {
    /// Create a matcher over the catalog, substitution index, and config
    #[must_use]
    pub const fn new(
        catalog: &'a IngredientCatalog,
        index: &'a SubstitutionIndex,
        config: &'a MatchingConfig,
    ) -> Self {
        Self {
            catalog,
            index,
            config,
        }
    }

    /// Greedily find up to `k` best matches for the available set
    ///
    /// Scoring the corpus is CPU-bound and embarrassingly parallel; the
    /// collected order stays corpus order, so ranking is deterministic.
    /// Results sort by match score descending, then substitution count
    /// descending.
    ///
    /// # Errors
    ///
    /// Returns [`larder_core::EngineError::UnknownIngredient`] when a
    /// recipe references an id absent from the catalog.
    pub fn find_recipes_greedy(
        &self,
        available: &HashSet<IngredientId>,
        corpus: &[Recipe],
        k: usize,
    ) -> EngineResult<Vec<RecipeMatch>> {
        let mut matches: Vec<RecipeMatch> = corpus
            .par_iter()
            .filter_map(|recipe| self.match_recipe(recipe, available).transpose())
            .collect::<EngineResult<Vec<_>>>()?;

        matches.sort_by(|a, b| {
            b.match_score
                .total_cmp(&a.match_score)
                .then_with(|| b.substitutions.len().cmp(&a.substitutions.len()))
        });
        matches.truncate(k);
        Ok(matches)
    }

    /// Score one recipe; `None` when it is unscorable or scores too low
    fn match_recipe(
        &self,
        recipe: &Recipe,
        available: &HashSet<IngredientId>,
    ) -> EngineResult<Option<RecipeMatch>> {
        let ordered = recipe.requirement_ids();
        let Some(score) = match_score(available, &ordered) else {
            return Ok(None);
        };
        if score <= self.config.thresholds.min_greedy_score {
            return Ok(None);
        }

        let missing = resolve_missing(self.catalog, recipe, &ordered, available)?;
        let mut substitutions = Vec::new();
        for ingredient in &missing {
            let Some(substitute_id) = self
                .index
                .alternatives(ingredient.id)
                .iter()
                .copied()
                .find(|id| available.contains(id))
            else {
                continue;
            };
            let substitute = self.catalog.require(substitute_id, recipe.id)?;
            let category = ingredient.category.as_deref().unwrap_or("ingredient");
            substitutions.push(Substitution {
                missing_ingredient_id: ingredient.id,
                substitute_ingredient_name: substitute.name.clone(),
                reason: format!("Similar {category}"),
            });
        }

        Ok(Some(RecipeMatch {
            recipe: recipe.clone(),
            match_score: score,
            missing_ingredients: missing,
            substitutions,
        }))
    }
}
