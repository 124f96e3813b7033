//! Entity extraction: states, crops, years and numbers

use regex::Regex;
use serde::Serialize;

use crate::data::Year;
use crate::error::Result;

/// States the parser recognizes, in reporting order
pub const STATES: &[&str] = &[
    "Maharashtra",
    "Punjab",
    "Karnataka",
    "Tamil Nadu",
    "Uttar Pradesh",
];

/// Crops the parser recognizes, in reporting order
pub const CROPS: &[&str] = &["Rice", "Wheat", "Cotton", "Sugarcane", "Coffee"];

/// Fixed name lists matched against questions
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    pub states: Vec<String>,
    pub crops: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            states: STATES.iter().map(|s| s.to_string()).collect(),
            crops: CROPS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Entities found in a question
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Entities {
    /// Recognized states, in vocabulary order
    pub states: Vec<String>,
    /// Recognized crops, in vocabulary order
    pub crops: Vec<String>,
    /// 20xx years, in order of appearance
    pub years: Vec<Year>,
    /// Raw intent pattern captures
    pub matches: Vec<String>,
}

impl Entities {
    pub fn first_state(&self) -> Option<&str> {
        self.states.first().map(String::as_str)
    }

    pub fn first_crop(&self) -> Option<&str> {
        self.crops.first().map(String::as_str)
    }
}

/// Entity extractor trait
pub trait EntityExtractor: Send + Sync {
    /// Extracts vocabulary entities and years from a question
    fn extract(&self, question: &str) -> Entities;

    /// Extracts every plain integer literal, in order of appearance.
    /// Literals too large for `u64` saturate to `u64::MAX`.
    fn numbers(&self, question: &str) -> Vec<u64>;
}

/// Substring vocabulary matching plus regex year/number extraction
#[derive(Debug, Clone)]
pub struct DefaultEntityExtractor {
    vocabulary: Vocabulary,
    year_pattern: Regex,
    number_pattern: Regex,
}

impl DefaultEntityExtractor {
    /// Creates an extractor over the default vocabulary
    pub fn new() -> Result<Self> {
        Self::with_vocabulary(Vocabulary::default())
    }

    pub fn with_vocabulary(vocabulary: Vocabulary) -> Result<Self> {
        Ok(Self {
            vocabulary,
            year_pattern: Regex::new(r"\b(20\d{2})\b")?,
            number_pattern: Regex::new(r"\b(\d+)\b")?,
        })
    }

    /// Vocabulary entries whose lower-cased form occurs anywhere in the text
    fn match_vocabulary(names: &[String], lowered: &str) -> Vec<String> {
        names
            .iter()
            .filter(|name| lowered.contains(&name.to_lowercase()))
            .cloned()
            .collect()
    }

    fn extract_years(&self, question: &str) -> Vec<Year> {
        self.year_pattern
            .captures_iter(question)
            .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
            .collect()
    }
}

impl EntityExtractor for DefaultEntityExtractor {
    fn extract(&self, question: &str) -> Entities {
        let lowered = question.to_lowercase();

        Entities {
            states: Self::match_vocabulary(&self.vocabulary.states, &lowered),
            crops: Self::match_vocabulary(&self.vocabulary.crops, &lowered),
            years: self.extract_years(question),
            matches: Vec::new(),
        }
    }

    fn numbers(&self, question: &str) -> Vec<u64> {
        self.number_pattern
            .captures_iter(question)
            .filter_map(|caps| caps.get(1))
            // digit-only, so overflow is the only parse failure
            .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> DefaultEntityExtractor {
        DefaultEntityExtractor::new().unwrap()
    }

    #[test]
    fn test_vocabulary_order_not_mention_order() {
        let entities = extractor().extract("Compare rainfall in Punjab and Maharashtra");
        assert_eq!(entities.states, vec!["Maharashtra", "Punjab"]);
    }

    #[test]
    fn test_multi_word_and_case_insensitive() {
        let entities = extractor().extract("SUGARCANE output in tamil nadu vs Uttar Pradesh");
        assert_eq!(entities.states, vec!["Tamil Nadu", "Uttar Pradesh"]);
        assert_eq!(entities.crops, vec!["Sugarcane"]);
    }

    #[test]
    fn test_substring_matching() {
        // "riced" still contains "rice"
        let entities = extractor().extract("riced cottonseed");
        assert_eq!(entities.crops, vec!["Rice", "Cotton"]);
    }

    #[test]
    fn test_years_in_text_order() {
        let entities = extractor().extract("Rainfall in 2023, 2019 and 2021 but not 1999 or 20234");
        assert_eq!(entities.years, vec![2023, 2019, 2021]);
    }

    #[test]
    fn test_numbers() {
        let numbers = extractor().numbers("top 5 crops of 2022 in Punjab");
        assert_eq!(numbers, vec![5, 2022]);
        assert!(extractor().numbers("no digits here").is_empty());
    }

    #[test]
    fn test_oversized_number_saturates() {
        let numbers = extractor().numbers("top 99999999999999999999 crops, then 3");
        assert_eq!(numbers, vec![u64::MAX, 3]);
    }

    #[test]
    fn test_empty_question() {
        let entities = extractor().extract("");
        assert_eq!(entities, Entities::default());
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = Vocabulary {
            states: vec!["Kerala".to_string()],
            crops: vec!["Coconut".to_string()],
        };
        let extractor = DefaultEntityExtractor::with_vocabulary(vocabulary).unwrap();
        let entities = extractor.extract("coconut in kerala");
        assert_eq!(entities.first_state(), Some("Kerala"));
        assert_eq!(entities.first_crop(), Some("Coconut"));
    }
}
