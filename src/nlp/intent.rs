//! Intent classification by ordered pattern matching

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Question categories the system recognizes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Compare average rainfall between states
    CompareRainfall,
    /// Top-N crops by production in a state
    TopCrops,
    /// Highest or lowest producing district for a crop
    HighestDistrict,
    /// Year-over-year production of a crop
    ProductionTrend,
    /// Policy argument comparing two crops (recognized, not answered)
    PolicySupport,
}

impl Intent {
    /// Wire name of the intent
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::CompareRainfall => "compare_rainfall",
            Intent::TopCrops => "top_crops",
            Intent::HighestDistrict => "highest_district",
            Intent::ProductionTrend => "production_trend",
            Intent::PolicySupport => "policy_support",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intent patterns in priority order. The first match wins, so a question
/// mentioning both "compare ... rainfall" and "production" is a rainfall
/// comparison. Patterns run against the lower-cased question.
pub const DEFAULT_INTENT_PATTERNS: &[(Intent, &str)] = &[
    (Intent::CompareRainfall, r"compare.*rainfall.*(\w+).*and.*(\w+)"),
    (Intent::TopCrops, r"top.*\d+.*crops?.*in.*(\w+)"),
    (Intent::HighestDistrict, r"(highest|lowest).*production.*(\w+).*in.*(\w+)"),
    (Intent::ProductionTrend, r"(trend|production).*(\w+).*in.*(\w+)"),
    (Intent::PolicySupport, r"support.*policy.*(\w+).*over.*(\w+)"),
];

/// A compiled pattern tagged with the intent it signals
#[derive(Debug, Clone)]
pub struct IntentPattern {
    intent: Intent,
    regex: Regex,
}

impl IntentPattern {
    pub fn new(intent: Intent, pattern: &str) -> Result<Self> {
        Ok(Self {
            intent,
            regex: Regex::new(pattern)?,
        })
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// Capture groups of the first match, or `None` if the pattern does not match
    pub fn captures(&self, text: &str) -> Option<Vec<String>> {
        let caps = self.regex.captures(text)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect(),
        )
    }
}

/// Result of a successful classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentMatch {
    pub intent: Intent,
    /// Raw capture groups, kept for diagnostics
    pub captures: Vec<String>,
}

/// Intent classifier trait
pub trait IntentClassifier: Send + Sync {
    /// Classifies a lower-cased question; `None` when nothing matches
    fn classify(&self, normalized: &str) -> Option<IntentMatch>;
}

/// Evaluates an ordered list of patterns and stops at the first match
#[derive(Debug, Clone)]
pub struct PatternIntentClassifier {
    patterns: Vec<IntentPattern>,
}

impl PatternIntentClassifier {
    /// Creates a classifier over [`DEFAULT_INTENT_PATTERNS`]
    pub fn new() -> Result<Self> {
        Self::from_patterns(DEFAULT_INTENT_PATTERNS)
    }

    /// Creates a classifier over a custom priority list
    pub fn from_patterns(patterns: &[(Intent, &str)]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|(intent, pattern)| IntentPattern::new(*intent, pattern))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[IntentPattern] {
        &self.patterns
    }
}

impl IntentClassifier for PatternIntentClassifier {
    fn classify(&self, normalized: &str) -> Option<IntentMatch> {
        self.patterns.iter().find_map(|pattern| {
            pattern.captures(normalized).map(|captures| IntentMatch {
                intent: pattern.intent(),
                captures,
            })
        })
    }
}
