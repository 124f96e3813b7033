//! Answer records and the generator that builds them from the data store

pub mod format;
pub mod generator;

pub use generator::{AnswerGenerator, ComparisonType, DEFAULT_RAINFALL_YEARS};

use serde::Serialize;

use crate::data::{Year, YearSeries};

/// Textual answer plus structured data and citations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub answer: String,
    #[serde(skip_serializing_if = "AnswerData::is_empty")]
    pub data: AnswerData,
    pub sources: Vec<String>,
}

impl Answer {
    /// Answer with text only
    pub fn text(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            data: AnswerData::Empty,
            sources: Vec::new(),
        }
    }

    /// Answer with text and citations but no data
    pub fn with_sources(answer: impl Into<String>, sources: &[&str]) -> Self {
        Self {
            answer: answer.into(),
            data: AnswerData::Empty,
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_data(mut self, data: AnswerData) -> Self {
        self.data = data;
        self
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Structured payload of an answer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerData {
    RainfallComparison(Vec<RainfallSummary>),
    TopCrops(Vec<CropProduction>),
    Districts(Vec<DistrictProduction>),
    Trend(TrendSummary),
    Empty,
}

impl AnswerData {
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerData::RainfallComparison(rows) => rows.is_empty(),
            AnswerData::TopCrops(rows) => rows.is_empty(),
            AnswerData::Districts(rows) => rows.is_empty(),
            AnswerData::Trend(_) => false,
            AnswerData::Empty => true,
        }
    }
}

/// Average and per-year rainfall for one state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainfallSummary {
    pub state: String,
    pub average: f64,
    pub yearly: YearSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropProduction {
    pub crop: String,
    pub production: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictProduction {
    pub district: String,
    pub production: f64,
}

/// Production series of one crop with rainfall alongside
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub years: Vec<Year>,
    pub production: Vec<f64>,
    /// Rainfall for the same years, `None` where the state has no reading
    pub rainfall: Vec<Option<f64>>,
    /// Percentage change first -> last year; `None` when the first year is zero
    pub growth_rate: Option<f64>,
    /// `growth_rate / (years - 1)`; `None` with fewer than two years
    pub average_annual_growth: Option<f64>,
}
