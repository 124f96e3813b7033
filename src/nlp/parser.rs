//! Question parsing: intent plus entities plus parameters

use serde::Serialize;
use tracing::debug;

use super::entity::{DefaultEntityExtractor, Entities, EntityExtractor};
use super::intent::{Intent, IntentClassifier, PatternIntentClassifier};
use crate::error::Result;

/// Optional numeric parameters found in the question
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parameters {
    /// First integer literal in the question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Structured form of a question
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedQuestion {
    /// Original question text
    pub text: String,
    /// Lower-cased text used for matching
    pub normalized: String,
    /// Detected intent, `None` when no pattern matched
    pub intent: Option<Intent>,
    pub entities: Entities,
    pub parameters: Parameters,
}

impl ParsedQuestion {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            normalized: text.to_lowercase(),
            text,
            ..Default::default()
        }
    }

    /// Whether an intent pattern matched
    pub fn is_understood(&self) -> bool {
        self.intent.is_some()
    }
}

/// Maps raw question text to a [`ParsedQuestion`]
pub struct QuestionParser {
    classifier: Box<dyn IntentClassifier>,
    extractor: Box<dyn EntityExtractor>,
}

impl QuestionParser {
    /// Parser with the default pattern list and vocabulary
    pub fn new() -> Result<Self> {
        Ok(Self::with_components(
            Box::new(PatternIntentClassifier::new()?),
            Box::new(DefaultEntityExtractor::new()?),
        ))
    }

    pub fn with_components(
        classifier: Box<dyn IntentClassifier>,
        extractor: Box<dyn EntityExtractor>,
    ) -> Self {
        Self {
            classifier,
            extractor,
        }
    }

    pub fn parse(&self, question: &str) -> ParsedQuestion {
        let mut parsed = ParsedQuestion::new(question);

        // entity extraction runs whether or not an intent matched
        parsed.entities = self.extractor.extract(question);

        if let Some(matched) = self.classifier.classify(&parsed.normalized) {
            parsed.intent = Some(matched.intent);
            parsed.entities.matches = matched.captures;
        }

        parsed.parameters.count = self
            .extractor
            .numbers(question)
            .first()
            .map(|&n| usize::try_from(n).unwrap_or(usize::MAX));

        debug!(
            intent = ?parsed.intent,
            states = ?parsed.entities.states,
            crops = ?parsed.entities.crops,
            years = ?parsed.entities.years,
            count = ?parsed.parameters.count,
            "Parsed question"
        );

        parsed
    }
}
