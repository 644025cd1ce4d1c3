// ABOUTME: Matching engine configuration for thresholds and search limits
// ABOUTME: Configures eligibility scoring, suggester confidence, and search bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Matching Engine Configuration
//!
//! Provides configuration for the recipe matching strategies: score
//! thresholds for recipe eligibility, the suggester confidence curve, and
//! bounds on the exponential searches (backtracking, clique enumeration).

use serde::{Deserialize, Serialize};

/// Default maximum number of matches returned per query
pub const DEFAULT_K: usize = 5;

/// Matching engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Score thresholds for recipe eligibility and suggester confidence
    pub thresholds: MatchThresholds,
    /// Limits on result counts and search size
    pub limits: MatchingLimits,
}

/// Score thresholds used by the matching strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// Minimum match score for a recipe to enter the backtracking search
    pub eligibility_threshold: f64,
    /// Greedy strategy keeps recipes scoring strictly above this value
    pub min_greedy_score: f64,
    /// Confidence assigned to the suggester's top-ranked candidate
    pub base_confidence: f64,
    /// Geometric decay applied to confidence per candidate rank
    pub confidence_decay: f64,
}

/// Limits on result counts and search size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingLimits {
    /// Maximum matches returned when the caller does not specify `k`
    pub default_k: usize,
    /// Backtracking search considers at most this many recipes
    pub max_backtracking_recipes: usize,
    /// Smallest ingredient combination the graph strategy reports
    pub min_combination_size: usize,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            eligibility_threshold: 0.5,
            min_greedy_score: 0.0,
            base_confidence: 0.9,
            confidence_decay: 0.8,
        }
    }
}

impl Default for MatchingLimits {
    fn default() -> Self {
        Self {
            default_k: DEFAULT_K,
            max_backtracking_recipes: 32,
            min_combination_size: 2,
        }
    }
}
