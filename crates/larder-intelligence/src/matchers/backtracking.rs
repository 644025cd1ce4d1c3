// ABOUTME: Backtracking matcher selecting a non-overlapping recipe subset
// ABOUTME: Value-returning DFS with explicit state; first max-size solution wins ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Exhaustive constrained search.
//!
//! Chooses a subset of recipes, no two sharing any required ingredient id,
//! maximizing the count of chosen recipes, restricted to recipes whose
//! match score meets the eligibility threshold. The search is a DFS over
//! recipes in corpus order, include-branch first; a chosen set replaces
//! the best only when strictly larger, so the first solution of maximal
//! size wins ties.
//!
//! The recursion carries explicit immutable state (candidate index plus
//! used-id set) and returns its best selection as a value, so re-entry
//! never observes partial state and the search is referentially
//! transparent.

use std::collections::HashSet;

use larder_core::{EngineResult, Ingredient, IngredientId, Recipe, RecipeMatch};

use crate::catalog::IngredientCatalog;
use crate::config::MatchingConfig;

use super::{match_score, resolve_missing};

/// One scored recipe entering the search
struct Candidate<'a> {
    recipe: &'a Recipe,
    required: HashSet<IngredientId>,
    score: f64,
    missing: Vec<Ingredient>,
    eligible: bool,
}

/// Outcome of searching a suffix of the candidate list
enum Selection {
    /// The include branch was blocked; no leaf reached this way
    Blocked,
    /// Best chosen candidate indices for the suffix (possibly empty)
    Chosen(Vec<usize>),
}

impl Selection {
    /// Prefer `first` unless `second` is strictly larger (first-found wins)
    fn better_of(first: Self, second: Self) -> Self {
        match (first, second) {
            (Self::Blocked, second) => second,
            (first, Self::Blocked) => first,
            (Self::Chosen(a), Self::Chosen(b)) => {
                if b.len() > a.len() {
                    Self::Chosen(b)
                } else {
                    Self::Chosen(a)
                }
            }
        }
    }
}

/// Exhaustive matcher over pairwise-disjoint recipe requirement sets
#[derive(Debug, Clone, Copy)]
pub struct BacktrackingMatcher<'a> {
    catalog: &'a IngredientCatalog,
    config: &'a MatchingConfig,
}

impl<'a> BacktrackingMatcher<'a> {
    /// Create a matcher over the given catalog and configuration
    #[must_use]
    pub const fn new(catalog: &'a IngredientCatalog, config: &'a MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Find up to `k` best recipes with pairwise-disjoint requirement sets
    ///
    /// Only recipes meeting the eligibility threshold can be chosen.
    /// Results sort by match score descending, then fewer missing
    /// ingredients first. An empty corpus or no eligible recipe yields an
    /// empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`larder_core::EngineError::UnknownIngredient`] when a
    /// recipe references an id absent from the catalog.
    pub fn find_best_recipes(
        &self,
        available: &HashSet<IngredientId>,
        corpus: &[Recipe],
        k: usize,
    ) -> EngineResult<Vec<RecipeMatch>> {
        let limit = self.config.limits.max_backtracking_recipes;
        let corpus = if corpus.len() > limit {
            tracing::warn!(
                recipes = corpus.len(),
                limit,
                "corpus exceeds backtracking search limit, truncating"
            );
            &corpus[..limit]
        } else {
            corpus
        };

        let candidates = self.scored_candidates(available, corpus)?;
        let chosen = match search(&candidates, 0, &HashSet::new()) {
            Selection::Chosen(indices) => indices,
            Selection::Blocked => Vec::new(),
        };

        let mut matches: Vec<RecipeMatch> = chosen
            .into_iter()
            .map(|i| {
                let candidate = &candidates[i];
                RecipeMatch {
                    recipe: candidate.recipe.clone(),
                    match_score: candidate.score,
                    missing_ingredients: candidate.missing.clone(),
                    substitutions: Vec::new(),
                }
            })
            .collect();
        matches.sort_by(|a, b| {
            b.match_score
                .total_cmp(&a.match_score)
                .then_with(|| a.missing_ingredients.len().cmp(&b.missing_ingredients.len()))
        });
        matches.truncate(k);
        Ok(matches)
    }

    /// Score every recipe once up front; the available set never changes
    /// during the search, so missing ingredients are fixed here too.
    fn scored_candidates<'c>(
        &self,
        available: &HashSet<IngredientId>,
        corpus: &'c [Recipe],
    ) -> EngineResult<Vec<Candidate<'c>>> {
        let threshold = self.config.thresholds.eligibility_threshold;
        let mut candidates = Vec::with_capacity(corpus.len());
        for recipe in corpus {
            let ordered = recipe.requirement_ids();
            let Some(score) = match_score(available, &ordered) else {
                continue; // empty requirement set is excluded, not an error
            };
            let missing = resolve_missing(self.catalog, recipe, &ordered, available)?;
            candidates.push(Candidate {
                recipe,
                required: ordered.into_iter().collect(),
                score,
                missing,
                eligible: score >= threshold,
            });
        }
        Ok(candidates)
    }
}

/// DFS over the candidate suffix starting at `index`
///
/// `used` is the union of requirement sets already chosen on this path.
fn search(candidates: &[Candidate<'_>], index: usize, used: &HashSet<IngredientId>) -> Selection {
    if index == candidates.len() {
        return Selection::Chosen(Vec::new());
    }

    let candidate = &candidates[index];
    let include = if candidate.eligible && used.is_disjoint(&candidate.required) {
        let merged: HashSet<IngredientId> = used.union(&candidate.required).copied().collect();
        match search(candidates, index + 1, &merged) {
            Selection::Chosen(mut rest) => {
                rest.insert(0, index);
                Selection::Chosen(rest)
            }
            Selection::Blocked => Selection::Blocked,
        }
    } else {
        Selection::Blocked
    };
    let skip = search(candidates, index + 1, used);

    Selection::better_of(include, skip)
}
