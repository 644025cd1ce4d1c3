// ABOUTME: Ingredient relationship graph built from recipe co-occurrence
// ABOUTME: Undirected weighted adjacency with Bron-Kerbosch maximal clique enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Ingredient relationship graph.
//!
//! Nodes are ingredient ids appearing in at least one recipe; an edge
//! connects two ingredients that co-occur in some recipe, weighted by the
//! co-occurrence count across the corpus. Built once per corpus snapshot
//! (build-then-freeze); every query method takes `&self` and is safe to
//! call concurrently.
//!
//! Maximal clique enumeration is worst-case exponential in subgraph size.
//! Callers restrict it to the induced subgraph of the user's available
//! ingredients, which keeps the input bounded by pantry size in practice.

use std::collections::{BTreeMap, BTreeSet};

use larder_core::{IngredientId, Recipe};

/// Undirected weighted graph over ingredient ids
///
/// Adjacency is ordered (`BTreeMap`) so clique enumeration and every
/// iteration-dependent query is deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    adjacency: BTreeMap<IngredientId, BTreeMap<IngredientId, u32>>,
}

impl RelationshipGraph {
    /// Build the graph from a recipe corpus
    ///
    /// For every recipe, every unordered pair of distinct ingredients in
    /// its requirement set increments that pair's edge weight by one.
    /// Ingredients appearing alone in a recipe still become nodes.
    #[must_use]
    pub fn build(corpus: &[Recipe]) -> Self {
        let mut graph = Self::default();
        for recipe in corpus {
            let ids = recipe.requirement_ids();
            for (i, &a) in ids.iter().enumerate() {
                graph.adjacency.entry(a).or_default();
                for &b in &ids[i + 1..] {
                    graph.bump_edge(a, b);
                }
            }
        }
        graph
    }

    fn bump_edge(&mut self, a: IngredientId, b: IngredientId) {
        *self.adjacency.entry(a).or_default().entry(b).or_insert(0) += 1;
        *self.adjacency.entry(b).or_default().entry(a).or_insert(0) += 1;
    }

    /// Co-occurrence weight of the edge between `a` and `b`, if present
    #[must_use]
    pub fn weight(&self, a: IngredientId, b: IngredientId) -> Option<u32> {
        self.adjacency.get(&a).and_then(|n| n.get(&b)).copied()
    }

    /// Whether `id` appears in at least one recipe
    #[must_use]
    pub fn contains_node(&self, id: IngredientId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Neighbors of `id` in ascending id order
    pub fn neighbors(&self, id: IngredientId) -> impl Iterator<Item = IngredientId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|n| n.keys().copied())
    }

    /// Induced subgraph on `nodes`
    ///
    /// Keeps only listed nodes already present in the graph, and only the
    /// edges with both endpoints kept.
    #[must_use]
    pub fn induced_subgraph(&self, nodes: &[IngredientId]) -> Self {
        let keep: BTreeSet<IngredientId> = nodes.iter().copied().collect();
        let adjacency = self
            .adjacency
            .iter()
            .filter(|(node, _)| keep.contains(*node))
            .map(|(&node, neighbors)| {
                let kept: BTreeMap<IngredientId, u32> = neighbors
                    .iter()
                    .filter(|(other, _)| keep.contains(*other))
                    .map(|(&other, &w)| (other, w))
                    .collect();
                (node, kept)
            })
            .collect();
        Self { adjacency }
    }

    /// Enumerate all maximal cliques (Bron-Kerbosch with pivoting)
    ///
    /// Each clique is returned with members in ascending id order; the
    /// enumeration itself is deterministic because adjacency is ordered.
    #[must_use]
    pub fn maximal_cliques(&self) -> Vec<Vec<IngredientId>> {
        let mut cliques = Vec::new();
        let candidates: BTreeSet<IngredientId> = self.adjacency.keys().copied().collect();
        self.bron_kerbosch(&[], candidates, BTreeSet::new(), &mut cliques);
        cliques
    }

    fn neighbor_set(&self, id: IngredientId) -> BTreeSet<IngredientId> {
        self.neighbors(id).collect()
    }

    fn bron_kerbosch(
        &self,
        current: &[IngredientId],
        mut candidates: BTreeSet<IngredientId>,
        mut excluded: BTreeSet<IngredientId>,
        cliques: &mut Vec<Vec<IngredientId>>,
    ) {
        if candidates.is_empty() && excluded.is_empty() {
            if !current.is_empty() {
                let mut clique = current.to_vec();
                clique.sort_unstable();
                cliques.push(clique);
            }
            return;
        }
        // Pivot on the vertex with the most candidate neighbors; only
        // non-neighbors of the pivot need to be branched on.
        let Some(pivot) = candidates
            .iter()
            .chain(excluded.iter())
            .copied()
            .max_by_key(|&v| self.neighbors(v).filter(|n| candidates.contains(n)).count())
        else {
            return;
        };
        let pivot_neighbors = self.neighbor_set(pivot);
        let branch: Vec<IngredientId> = candidates
            .iter()
            .copied()
            .filter(|v| !pivot_neighbors.contains(v))
            .collect();

        for v in branch {
            let neighbors = self.neighbor_set(v);
            let mut next = current.to_vec();
            next.push(v);
            self.bron_kerbosch(
                &next,
                candidates.intersection(&neighbors).copied().collect(),
                excluded.intersection(&neighbors).copied().collect(),
                cliques,
            );
            candidates.remove(&v);
            excluded.insert(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::Ingredient;

    fn recipe(id: i64, ingredient_ids: &[IngredientId]) -> Recipe {
        Recipe {
            id,
            title: format!("Recipe {id}"),
            instructions: String::new(),
            prep_time_minutes: 10,
            all_ingredients: ingredient_ids
                .iter()
                .map(|&i| Ingredient::new(i, format!("Ingredient {i}")))
                .collect(),
        }
    }

    #[test]
    fn edge_weights_count_co_occurrences() {
        let corpus = vec![recipe(1, &[1, 2, 3]), recipe(2, &[1, 2]), recipe(3, &[4])];
        let graph = RelationshipGraph::build(&corpus);

        assert_eq!(graph.weight(1, 2), Some(2));
        assert_eq!(graph.weight(2, 1), Some(2));
        assert_eq!(graph.weight(1, 3), Some(1));
        assert_eq!(graph.weight(1, 4), None);
        assert!(graph.contains_node(4));
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn maximal_cliques_on_a_triangle_plus_tail() {
        // 1-2-3 triangle, 3-4 tail
        let corpus = vec![recipe(1, &[1, 2, 3]), recipe(2, &[3, 4])];
        let graph = RelationshipGraph::build(&corpus);

        let cliques = graph.maximal_cliques();
        assert!(cliques.contains(&vec![1, 2, 3]));
        assert!(cliques.contains(&vec![3, 4]));
        assert_eq!(cliques.len(), 2);
    }

    #[test]
    fn induced_subgraph_drops_outside_edges() {
        let corpus = vec![recipe(1, &[1, 2, 3])];
        let graph = RelationshipGraph::build(&corpus);

        let sub = graph.induced_subgraph(&[1, 2, 99]);
        assert_eq!(sub.node_count(), 2);
        assert_eq!(sub.weight(1, 2), Some(1));
        assert_eq!(sub.weight(1, 3), None);
    }

    #[test]
    fn clique_enumeration_is_deterministic() {
        let corpus = vec![
            recipe(1, &[1, 2, 3]),
            recipe(2, &[2, 3, 4]),
            recipe(3, &[4, 5]),
        ];
        let graph = RelationshipGraph::build(&corpus);

        assert_eq!(graph.maximal_cliques(), graph.maximal_cliques());
    }
}
