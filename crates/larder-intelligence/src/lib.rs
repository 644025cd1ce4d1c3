// ABOUTME: Recipe matching engine with backtracking, graph, and greedy strategies
// ABOUTME: Pure synchronous algorithms over an immutable catalog/corpus snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

#![deny(unsafe_code)]

//! # Larder Intelligence
//!
//! The matching engine behind Larder's recipe suggestions. Given the
//! ingredients a user has on hand, an immutable recipe corpus, and the
//! ingredient catalog, it produces a ranked list of best-fit recipes with
//! missing-ingredient and substitution annotations.
//!
//! Three interchangeable strategies are supported:
//!
//! - **Backtracking** ([`matchers::BacktrackingMatcher`]): exhaustive
//!   constrained search for a non-overlapping recipe subset maximizing
//!   coverage
//! - **Graph** ([`matchers::GraphMatcher`]): mines co-occurrence structure
//!   among ingredients to surface commonly-paired combinations
//! - **Greedy** ([`matchers::GreedyMatcher`]): single-pass scorer that also
//!   emits substitution suggestions
//!
//! All queries are read-only computations over an immutable snapshot; once
//! a [`matchers::MatchingEngine`] is constructed (build-then-freeze), any
//! number of queries may run concurrently without coordination.

/// Ingredient catalog: id-to-record lookup preserving load order
pub mod catalog;

/// Engine configuration (thresholds and limits)
pub mod config;

/// Ingredient relationship graph and maximal clique enumeration
pub mod graph;

/// The three matching strategies and the engine facade
pub mod matchers;

/// Boundary service contracts and input validation
pub mod service;

/// Substitution index and suggester
pub mod substitution;

pub use catalog::IngredientCatalog;
pub use config::MatchingConfig;
pub use graph::RelationshipGraph;
pub use matchers::{MatchingAlgorithm, MatchingEngine};
pub use substitution::{SubstitutionIndex, SubstitutionSuggester};
