// ABOUTME: Configuration module for the larder-intelligence crate
// ABOUTME: Re-exports matching engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

/// Matching engine configuration (thresholds and limits)
pub mod matching;

pub use matching::{MatchThresholds, MatchingConfig, MatchingLimits};
