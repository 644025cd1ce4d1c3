// ABOUTME: Matching strategies and the engine facade dispatching between them
// ABOUTME: Closed MatchingAlgorithm enum replaces string-keyed strategy lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! The three matching strategies and the engine facade.
//!
//! [`MatchingEngine`] owns an immutable snapshot of catalog, corpus,
//! substitution index, and prebuilt relationship graph; construction is
//! the only write (build-then-freeze), after which any number of queries
//! may run concurrently on `&self`.

/// Exhaustive non-overlapping subset search
pub mod backtracking;

/// Co-occurrence graph strategy
pub mod graph;

/// Single-pass scorer with substitution suggestions
pub mod greedy;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use larder_core::{
    EngineResult, Ingredient, IngredientId, Recipe, RecipeContext, RecipeMatch,
    SuggestedSubstitute,
};

use crate::catalog::IngredientCatalog;
use crate::config::MatchingConfig;
use crate::graph::RelationshipGraph;
use crate::substitution::{SubstitutionIndex, SubstitutionSuggester};

pub use backtracking::BacktrackingMatcher;
pub use graph::GraphMatcher;
pub use greedy::GreedyMatcher;

/// Strategy selector for recipe matching
///
/// A closed set: unrecognized names fall back to [`Self::Graph`] rather
/// than failing, matching the boundary contract.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchingAlgorithm {
    /// Relationship-graph strategy (the default)
    #[default]
    Graph,
    /// Exhaustive constrained search over non-overlapping recipes
    Backtracking,
    /// Single-pass scorer with substitution suggestions
    Greedy,
}

impl MatchingAlgorithm {
    /// Parse an algorithm name, falling back to `Graph` for unknown values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "backtracking" => Self::Backtracking,
            "greedy" => Self::Greedy,
            _ => Self::Graph,
        }
    }
}

/// Match score of a recipe's requirement set against the available set
///
/// `|available ∩ required| / |required|`. Returns `None` for an empty
/// requirement set: such recipes are excluded from scoring rather than
/// dividing by zero.
#[must_use]
pub fn match_score(available: &HashSet<IngredientId>, required: &[IngredientId]) -> Option<f64> {
    if required.is_empty() {
        return None;
    }
    let overlap = required.iter().filter(|id| available.contains(id)).count();
    Some(overlap as f64 / required.len() as f64)
}

/// Resolve a recipe's missing ingredients through the catalog
///
/// Missing ids keep recipe order. Fails fast on ids the catalog does not
/// know (data-integrity fault).
pub(crate) fn resolve_missing(
    catalog: &IngredientCatalog,
    recipe: &Recipe,
    required: &[IngredientId],
    available: &HashSet<IngredientId>,
) -> EngineResult<Vec<Ingredient>> {
    required
        .iter()
        .filter(|id| !available.contains(id))
        .map(|&id| catalog.require(id, recipe.id).cloned())
        .collect()
}

/// Immutable matching snapshot: catalog, corpus, index, and graph
///
/// Construction builds the substitution index and relationship graph once;
/// everything afterwards is a read-only query.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    catalog: IngredientCatalog,
    corpus: Vec<Recipe>,
    index: SubstitutionIndex,
    graph: RelationshipGraph,
    config: MatchingConfig,
}

impl MatchingEngine {
    /// Build an engine over a catalog and recipe corpus with defaults
    #[must_use]
    pub fn new(catalog: IngredientCatalog, corpus: Vec<Recipe>) -> Self {
        Self::with_config(catalog, corpus, MatchingConfig::default())
    }

    /// Build an engine with custom configuration
    #[must_use]
    pub fn with_config(
        catalog: IngredientCatalog,
        corpus: Vec<Recipe>,
        config: MatchingConfig,
    ) -> Self {
        let index = SubstitutionIndex::build(&catalog);
        let graph = RelationshipGraph::build(&corpus);
        tracing::info!(
            recipes = corpus.len(),
            ingredients = catalog.len(),
            graph_nodes = graph.node_count(),
            graph_edges = graph.edge_count(),
            substitutable = index.len(),
            "matching engine ready"
        );
        Self {
            catalog,
            corpus,
            index,
            graph,
            config,
        }
    }

    /// The ingredient catalog backing this engine
    #[must_use]
    pub const fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    /// The frozen relationship graph
    #[must_use]
    pub const fn graph(&self) -> &RelationshipGraph {
        &self.graph
    }

    /// The precomputed substitution index
    #[must_use]
    pub const fn substitution_index(&self) -> &SubstitutionIndex {
        &self.index
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Run the selected strategy and return at most `k` ranked matches
    ///
    /// # Errors
    ///
    /// Returns [`larder_core::EngineError::UnknownIngredient`] when a
    /// corpus recipe references an id absent from the catalog.
    pub fn find_matches(
        &self,
        algorithm: MatchingAlgorithm,
        available: &[IngredientId],
        k: usize,
    ) -> EngineResult<Vec<RecipeMatch>> {
        let available: HashSet<IngredientId> = available.iter().copied().collect();
        match algorithm {
            MatchingAlgorithm::Backtracking => {
                BacktrackingMatcher::new(&self.catalog, &self.config)
                    .find_best_recipes(&available, &self.corpus, k)
            }
            MatchingAlgorithm::Greedy => {
                GreedyMatcher::new(&self.catalog, &self.index, &self.config)
                    .find_recipes_greedy(&available, &self.corpus, k)
            }
            MatchingAlgorithm::Graph => GraphMatcher::new(&self.graph, &self.catalog, &self.config)
                .find_recipes(&available, &self.corpus, k),
        }
    }

    /// Ingredient combinations historically used together, longest first
    #[must_use]
    pub fn common_combinations(&self, available: &[IngredientId]) -> Vec<Vec<IngredientId>> {
        GraphMatcher::new(&self.graph, &self.catalog, &self.config).common_combinations(available)
    }

    /// Ranked substitution suggestions for a single ingredient name
    #[must_use]
    pub fn suggest_substitutions(
        &self,
        ingredient: &str,
        context: &RecipeContext,
    ) -> Vec<SuggestedSubstitute> {
        SubstitutionSuggester::new(&self.catalog, &self.index)
            .with_graph(&self.graph)
            .with_thresholds(self.config.thresholds.clone())
            .suggest(ingredient, context)
    }
}
