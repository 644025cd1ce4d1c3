// ABOUTME: Integration tests for the service boundary of the matching engine
// ABOUTME: Covers request validation, serde defaults, and response shapes
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Tests for the service layer:
//! - empty inputs are rejected before the engine runs
//! - unrecognized algorithm names fall back to the graph strategy
//! - serde defaults match the documented request contract
//! - responses serialize with the expected field names

mod common;

use common::{carbonara, pantry_catalog, BACON, SPAGHETTI};
use larder_core::{RequestError, ServiceError};
use larder_intelligence::{
    service::{
        suggest_recipes, suggest_substitutions, SubstitutionsRequest, SuggestionsRequest,
    },
    MatchingAlgorithm, MatchingEngine,
};

fn engine() -> MatchingEngine {
    MatchingEngine::new(pantry_catalog(), vec![carbonara()])
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
fn empty_ingredient_list_is_rejected() {
    let request = SuggestionsRequest {
        ingredients: Vec::new(),
        algorithm: "graph".to_owned(),
        k: 5,
    };

    let error = suggest_recipes(&engine(), &request).unwrap_err();
    match error {
        ServiceError::Request(ref inner) => {
            assert!(matches!(inner, RequestError::NoIngredientsProvided));
            assert_eq!(inner.to_string(), "No ingredients provided");
        }
        ServiceError::Engine(_) => panic!("expected a request error"),
    }
    assert_eq!(error.http_status(), 400);
}

#[test]
fn blank_ingredient_name_is_rejected() {
    for name in ["", "   ", "\t\n"] {
        let request = SubstitutionsRequest {
            ingredient: name.to_owned(),
            recipe_context: larder_core::RecipeContext::default(),
        };

        let error = suggest_substitutions(&engine(), &request).unwrap_err();
        assert_eq!(error.to_string(), "No ingredient provided");
        assert_eq!(error.http_status(), 400);
    }
}

#[test]
fn unknown_catalog_ingredient_is_not_an_error() {
    let request = SubstitutionsRequest {
        ingredient: "Saffron".to_owned(),
        recipe_context: larder_core::RecipeContext::default(),
    };

    let response = suggest_substitutions(&engine(), &request).unwrap();
    assert_eq!(response.ingredient, "Saffron");
    assert!(response.substitutions.is_empty());
}

// ============================================================================
// Algorithm dispatch
// ============================================================================

#[test]
fn unrecognized_algorithm_falls_back_to_graph() {
    let request = SuggestionsRequest {
        ingredients: vec![SPAGHETTI, BACON],
        algorithm: "quantum".to_owned(),
        k: 5,
    };

    let response = suggest_recipes(&engine(), &request).unwrap();
    assert_eq!(response.algorithm_used, MatchingAlgorithm::Graph);
}

#[test]
fn requested_algorithm_is_echoed_back() {
    for (name, expected) in [
        ("backtracking", MatchingAlgorithm::Backtracking),
        ("greedy", MatchingAlgorithm::Greedy),
        ("GRAPH", MatchingAlgorithm::Graph),
    ] {
        let request = SuggestionsRequest {
            ingredients: vec![SPAGHETTI, BACON],
            algorithm: name.to_owned(),
            k: 5,
        };

        let response = suggest_recipes(&engine(), &request).unwrap();
        assert_eq!(response.algorithm_used, expected, "for {name}");
    }
}

// ============================================================================
// Serde contract
// ============================================================================

#[test]
fn suggestions_request_defaults_apply() {
    let request: SuggestionsRequest =
        serde_json::from_str(r#"{"ingredients": [1, 2, 3]}"#).unwrap();

    assert_eq!(request.ingredients, vec![1, 2, 3]);
    assert_eq!(request.algorithm, "graph");
    assert_eq!(request.k, 5);
}

#[test]
fn substitutions_request_context_defaults_to_empty() {
    let request: SubstitutionsRequest =
        serde_json::from_str(r#"{"ingredient": "Parmesan"}"#).unwrap();

    assert_eq!(request.ingredient, "Parmesan");
    assert!(request.recipe_context.cuisine.is_none());
    assert!(request.recipe_context.dish_type.is_none());
}

#[test]
fn suggestions_response_serializes_the_strategy_name() {
    let request = SuggestionsRequest {
        ingredients: vec![SPAGHETTI, BACON],
        algorithm: "greedy".to_owned(),
        k: 5,
    };

    let response = suggest_recipes(&engine(), &request).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["algorithm_used"], "greedy");
    assert!(json["suggestions"].is_array());
}

#[test]
fn recipe_match_serializes_with_score_and_missing_fields() {
    let request = SuggestionsRequest {
        ingredients: vec![SPAGHETTI, BACON],
        algorithm: "greedy".to_owned(),
        k: 5,
    };

    let response = suggest_recipes(&engine(), &request).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    let first = &json["suggestions"][0];
    assert_eq!(first["recipe"]["title"], "Spaghetti Carbonara");
    assert_eq!(first["match_score"], 0.5);
    assert_eq!(first["missing_ingredients"].as_array().unwrap().len(), 2);
    assert!(first["substitutions"].is_array());
}
