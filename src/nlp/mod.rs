//! Natural language question understanding
//!
//! Pattern-based only: an ordered list of intent regexes plus fixed
//! state and crop vocabularies.

pub mod entity;
pub mod intent;
pub mod parser;

pub use entity::{DefaultEntityExtractor, Entities, EntityExtractor, Vocabulary, CROPS, STATES};
pub use intent::{
    Intent, IntentClassifier, IntentMatch, IntentPattern, PatternIntentClassifier,
    DEFAULT_INTENT_PATTERNS,
};
pub use parser::{Parameters, ParsedQuestion, QuestionParser};
