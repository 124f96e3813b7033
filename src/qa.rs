//! Question answering orchestration
//!
//! Parses a question, checks the intent's minimum entities and routes to the
//! matching [`AnswerGenerator`] operation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::answer::{Answer, AnswerGenerator, ComparisonType, DEFAULT_RAINFALL_YEARS};
use crate::data::{DataProvider, DataStore, Year};
use crate::error::Result;
use crate::nlp::{Intent, ParsedQuestion, QuestionParser};

/// Returned when no intent pattern matches
pub const UNPARSEABLE_ANSWER: &str = "I couldn't understand your question. Please try rephrasing.";

/// Returned when an intent matched but its entities are missing, and for
/// intents without a handler
pub const INSUFFICIENT_ANSWER: &str = "I couldn't find enough information to answer your question.";

/// Example questions, one per answerable intent
pub const SAMPLE_QUESTIONS: &[&str] = &[
    "Compare the average annual rainfall in Maharashtra and Punjab for the last 4 years",
    "List the top 3 most produced crops in Maharashtra",
    "Which district has the highest production of Rice in Maharashtra?",
    "Analyze the production trend of Rice in Punjab over the last decade",
];

/// Defaults applied when a question leaves a parameter out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerDefaults {
    /// Years compared when a rainfall question names none
    pub rainfall_years: Vec<Year>,
    /// Number of crops listed when a question gives no count
    pub top_crops_count: usize,
    /// Year used to rank crops
    pub top_crops_year: Year,
}

impl Default for AnswerDefaults {
    fn default() -> Self {
        Self {
            rainfall_years: DEFAULT_RAINFALL_YEARS.to_vec(),
            top_crops_count: 3,
            top_crops_year: 2023,
        }
    }
}

/// The question answering system. Built once per process and shared by
/// reference with every request handler.
pub struct QaSystem {
    parser: QuestionParser,
    generator: AnswerGenerator,
    defaults: AnswerDefaults,
}

impl QaSystem {
    /// System over an already-populated store with default parameters
    pub fn new(store: Arc<DataStore>) -> Result<Self> {
        Self::with_defaults(store, AnswerDefaults::default())
    }

    pub fn with_defaults(store: Arc<DataStore>, defaults: AnswerDefaults) -> Result<Self> {
        Ok(Self {
            parser: QuestionParser::new()?,
            generator: AnswerGenerator::new(store),
            defaults,
        })
    }

    /// Loads the store from `provider`, then builds the system
    pub async fn initialize(provider: &dyn DataProvider, defaults: AnswerDefaults) -> Result<Self> {
        info!("Initializing Agricultural & Climate Data Q&A System");
        let store = DataStore::load(provider).await?;
        let system = Self::with_defaults(Arc::new(store), defaults)?;
        info!("System ready");
        Ok(system)
    }

    pub fn parse(&self, question: &str) -> ParsedQuestion {
        self.parser.parse(question)
    }

    pub fn defaults(&self) -> &AnswerDefaults {
        &self.defaults
    }

    /// Answers a free-text question. Never fails: unknown questions and
    /// missing data produce fixed fallback answers.
    pub fn answer(&self, question: &str) -> Answer {
        self.answer_parsed(&self.parse(question))
    }

    /// Answers a question that has already been through [`QaSystem::parse`]
    pub fn answer_parsed(&self, parsed: &ParsedQuestion) -> Answer {
        let Some(intent) = parsed.intent else {
            info!("No intent pattern matched");
            return Answer::text(UNPARSEABLE_ANSWER);
        };

        debug!(%intent, "Routing question");

        match self.route(intent, parsed) {
            Some(answer) => answer,
            None => {
                info!(%intent, "Not enough information to answer");
                Answer::text(INSUFFICIENT_ANSWER)
            }
        }
    }

    /// Dispatches to a handler when the intent's minimum entities are present
    fn route(&self, intent: Intent, parsed: &ParsedQuestion) -> Option<Answer> {
        let entities = &parsed.entities;

        match intent {
            Intent::CompareRainfall if entities.states.len() >= 2 => {
                let years = if entities.years.is_empty() {
                    &self.defaults.rainfall_years
                } else {
                    &entities.years
                };
                Some(self.generator.compare_rainfall(entities.states.as_slice(), years))
            }
            Intent::TopCrops => {
                let state = entities.first_state()?;
                let count = parsed
                    .parameters
                    .count
                    .unwrap_or(self.defaults.top_crops_count);
                Some(
                    self.generator
                        .get_top_crops(state, count, self.defaults.top_crops_year),
                )
            }
            Intent::HighestDistrict => {
                let state = entities.first_state()?;
                let crop = entities.first_crop()?;
                let comparison = ComparisonType::from_question(&parsed.text);
                Some(
                    self.generator
                        .analyze_district_production(state, crop, comparison),
                )
            }
            Intent::ProductionTrend => {
                let state = entities.first_state()?;
                let crop = entities.first_crop()?;
                Some(self.generator.analyze_production_trend(state, crop))
            }
            // recognized, but there is no handler for policy questions
            Intent::PolicySupport => None,
            Intent::CompareRainfall => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::AnswerData;
    use crate::data::StaticSeedProvider;

    fn system() -> QaSystem {
        QaSystem::new(Arc::new(DataStore::seeded())).unwrap()
    }

    #[test]
    fn test_unparseable_question() {
        let answer = system().answer("hello there");
        assert_eq!(answer.answer, UNPARSEABLE_ANSWER);
        assert!(answer.sources.is_empty());
        assert!(!answer.has_data());
    }

    #[test]
    fn test_answer_parsed_matches_answer() {
        let system = system();
        let question = "Which district has the highest production of Wheat in Punjab?";

        let parsed = system.parse(question);
        assert_eq!(parsed.intent, Some(Intent::HighestDistrict));
        assert_eq!(system.answer_parsed(&parsed), system.answer(question));
    }

    #[test]
    fn test_unparseable_long_question() {
        let question = "hello there ".repeat(500);
        let answer = system().answer(&question);
        assert_eq!(answer.answer, UNPARSEABLE_ANSWER);
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn test_compare_rainfall_needs_two_states() {
        let answer = system().answer("Compare rainfall in Punjab and nowhere else");
        assert_eq!(answer.answer, INSUFFICIENT_ANSWER);
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn test_compare_rainfall_uses_question_years() {
        let answer = system().answer("Compare rainfall in Punjab and Karnataka for 2021 and 2022");
        assert!(answer.answer.starts_with("Rainfall Comparison (2021-2022):"));
        let AnswerData::RainfallComparison(rows) = &answer.data else {
            panic!("expected rainfall data");
        };
        assert_eq!(rows[0].state, "Punjab");
        assert_eq!(rows[0].average, 690.0);
        assert_eq!(rows[1].state, "Karnataka");
        assert_eq!(rows[1].average, 990.0);
    }

    #[test]
    fn test_top_crops_count_from_question() {
        let answer = system().answer("Show the top 2 crops in Punjab");
        let AnswerData::TopCrops(rows) = &answer.data else {
            panic!("expected crop data");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].crop, "Wheat");
    }

    #[test]
    fn test_top_crops_without_state() {
        let answer = system().answer("top 3 crops in the country");
        assert_eq!(answer.answer, INSUFFICIENT_ANSWER);
    }

    #[test]
    fn test_district_lowest() {
        let answer = system().answer("Which district has the lowest production of Wheat in Punjab?");
        assert!(answer.answer.ends_with("Lowest: Amritsar with 780"));
    }

    #[test]
    fn test_trend_needs_crop() {
        let answer = system().answer("Production trend in Punjab");
        assert_eq!(answer.answer, INSUFFICIENT_ANSWER);
    }

    #[test]
    fn test_policy_support_is_not_answered() {
        let answer =
            system().answer("Give three arguments to support a policy for Rice over Wheat in Punjab");
        assert_eq!(answer.answer, INSUFFICIENT_ANSWER);
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = AnswerDefaults {
            rainfall_years: vec![2022, 2023],
            top_crops_count: 1,
            top_crops_year: 2020,
        };
        let system = QaSystem::with_defaults(Arc::new(DataStore::seeded()), defaults).unwrap();

        let answer = system.answer("Compare rainfall between Maharashtra and Punjab");
        assert!(answer.answer.starts_with("Rainfall Comparison (2022-2023):"));
        assert_eq!(system.defaults().top_crops_count, 1);
    }

    #[tokio::test]
    async fn test_initialize_from_provider() {
        let system = QaSystem::initialize(&StaticSeedProvider::new(), AnswerDefaults::default())
            .await
            .unwrap();
        let answer = system.answer("Production trend of Wheat in Punjab");
        assert!(answer.answer.starts_with("Wheat Production Trend in Punjab:"));
    }
}
