//! Answer generation against the data store
//!
//! Every operation is a pure read. Missing data never produces an error;
//! it produces a "no data" answer that still carries the operation's sources.

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

use super::format::{format_percent, format_plain, format_quantity, round_half_away};
use super::{
    Answer, AnswerData, CropProduction, DistrictProduction, RainfallSummary, TrendSummary,
};
use crate::data::{DataStore, Year, YearSeries};

/// Years compared when a rainfall question names none
pub const DEFAULT_RAINFALL_YEARS: &[Year] = &[2020, 2021, 2022, 2023];

const RAINFALL_SOURCES: &[&str] = &[
    "India Meteorological Department - Rainfall Statistics",
    "data.gov.in/rainfall_india",
];

const TOP_CROPS_SOURCES: &[&str] = &[
    "Ministry of Agriculture & Farmers Welfare - Crop Production Statistics",
    "data.gov.in/agricultural_statistics",
];

const DISTRICT_SOURCES: &[&str] = &[
    "Ministry of Agriculture - District-wise Production Data",
    "data.gov.in/district_agriculture_data",
];

const TREND_SOURCES: &[&str] = &[
    "Ministry of Agriculture - Historical Production Data",
    "IMD - Climate Data",
    "data.gov.in/crop_statistics_timeseries",
];

/// Which end of the district ranking to highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonType {
    Highest,
    Lowest,
}

impl ComparisonType {
    /// `Highest` if the question mentions "highest", otherwise `Lowest`
    pub fn from_question(question: &str) -> Self {
        if question.to_lowercase().contains("highest") {
            ComparisonType::Highest
        } else {
            ComparisonType::Lowest
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonType::Highest => "Highest",
            ComparisonType::Lowest => "Lowest",
        }
    }
}

/// Builds answers from a shared, read-only [`DataStore`]
#[derive(Debug, Clone)]
pub struct AnswerGenerator {
    store: Arc<DataStore>,
}

impl AnswerGenerator {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    /// Average rainfall per state over `years` (default years when empty).
    ///
    /// Years are compared in ascending order, each once. A year missing from
    /// a state's record counts as 0 mm. States without any climate record
    /// are left out of the answer.
    pub fn compare_rainfall<S: AsRef<str>>(&self, states: &[S], years: &[Year]) -> Answer {
        let years: Vec<Year> = if years.is_empty() {
            DEFAULT_RAINFALL_YEARS.to_vec()
        } else {
            years.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
        };

        let mut summaries = Vec::new();
        for state in states {
            let state = state.as_ref();
            if self.store.climate(state).is_none() {
                warn!(state, "No climate record, state left out of rainfall comparison");
                continue;
            }

            let yearly: YearSeries = years
                .iter()
                .map(|&year| (year, self.store.rainfall_or_zero(state, year)))
                .collect();
            let total: f64 = years
                .iter()
                .map(|&year| self.store.rainfall_or_zero(state, year))
                .sum();

            summaries.push(RainfallSummary {
                state: state.to_string(),
                average: total / years.len() as f64,
                yearly,
            });
        }

        let mut lines = vec![format!(
            "Rainfall Comparison ({}-{}):",
            years[0],
            years[years.len() - 1]
        )];
        for summary in &summaries {
            lines.push(format!(
                "\n{}: Average {}mm per year",
                summary.state,
                round_half_away(summary.average)
            ));
        }

        Answer::with_sources(lines.join("\n"), RAINFALL_SOURCES)
            .with_data(AnswerData::RainfallComparison(summaries))
    }

    /// The `count` highest-producing crops of a state in `year`.
    ///
    /// Crops without a figure for `year` rank as 0. Ties keep the order in
    /// which crops appear in the state's record.
    pub fn get_top_crops(&self, state: &str, count: usize, year: Year) -> Answer {
        let Some(record) = self.store.agriculture(state) else {
            return Answer::with_sources(format!("No data available for {}", state), TOP_CROPS_SOURCES);
        };

        let mut ranking: Vec<CropProduction> = record
            .crops
            .keys()
            .map(|crop| CropProduction {
                crop: crop.to_string(),
                production: self.store.production_or_zero(state, crop, year),
            })
            .collect();

        // sort_by is stable
        ranking.sort_by(|a, b| b.production.total_cmp(&a.production));
        ranking.truncate(count);

        let mut lines = vec![format!(
            "Top {} crops in {} ({} production in '000 tonnes):",
            count, state, year
        )];
        for (rank, entry) in ranking.iter().enumerate() {
            lines.push(format!(
                "{}. {}: {}",
                rank + 1,
                entry.crop,
                format_quantity(entry.production)
            ));
        }

        Answer::with_sources(lines.join("\n"), TOP_CROPS_SOURCES)
            .with_data(AnswerData::TopCrops(ranking))
    }

    /// Districts of a state ranked by production of `crop`, with the
    /// extreme (first after sorting) highlighted.
    pub fn analyze_district_production(
        &self,
        state: &str,
        crop: &str,
        comparison: ComparisonType,
    ) -> Answer {
        let districts = match self.store.agriculture(state) {
            Some(record) if !record.districts.is_empty() => &record.districts,
            _ => {
                return Answer::with_sources(
                    format!("No district data available for {}", state),
                    DISTRICT_SOURCES,
                )
            }
        };

        let mut ranking: Vec<DistrictProduction> = districts
            .iter()
            .filter_map(|(district, crops)| {
                crops.get(crop).map(|&production| DistrictProduction {
                    district: district.to_string(),
                    production,
                })
            })
            .collect();

        if ranking.is_empty() {
            return Answer::with_sources(
                format!("No data for {} in {} districts", crop, state),
                DISTRICT_SOURCES,
            );
        }

        match comparison {
            ComparisonType::Highest => {
                ranking.sort_by(|a, b| b.production.total_cmp(&a.production))
            }
            ComparisonType::Lowest => ranking.sort_by(|a, b| a.production.total_cmp(&b.production)),
        }

        let mut lines = vec![
            format!("{} production in {} districts (2023, '000 tonnes):", crop, state),
            String::new(),
        ];
        for entry in &ranking {
            lines.push(format!(
                "{}: {}",
                entry.district,
                format_quantity(entry.production)
            ));
        }

        let target = &ranking[0];
        lines.push(format!(
            "\n{}: {} with {}",
            comparison.label(),
            target.district,
            format_quantity(target.production)
        ));

        Answer::with_sources(lines.join("\n"), DISTRICT_SOURCES)
            .with_data(AnswerData::Districts(ranking))
    }

    /// Production of `crop` in `state` for every available year, annotated
    /// with that year's rainfall, plus overall and average annual growth.
    pub fn analyze_production_trend(&self, state: &str, crop: &str) -> Answer {
        if self.store.agriculture(state).is_none() {
            return Answer::with_sources(format!("No data available for {}", state), TREND_SOURCES);
        }

        let series = match self.store.crop_series(state, crop) {
            Some(series) if !series.is_empty() => series,
            _ => {
                return Answer::with_sources(
                    format!("No data for {} in {}", crop, state),
                    TREND_SOURCES,
                )
            }
        };

        let years: Vec<Year> = series.keys().copied().collect();
        let production: Vec<f64> = series.values().copied().collect();
        let rainfall: Vec<Option<f64>> = years
            .iter()
            .map(|&year| self.store.rainfall(state, year))
            .collect();

        let first = production[0];
        let last = production[production.len() - 1];
        let growth_rate = if first == 0.0 {
            None
        } else {
            Some((last - first) / first * 100.0)
        };
        let average_annual_growth = match growth_rate {
            Some(growth) if years.len() > 1 => Some(growth / (years.len() - 1) as f64),
            _ => None,
        };

        debug!(
            state,
            crop,
            years = years.len(),
            growth_rate = ?growth_rate,
            "Computed production trend"
        );

        let mut lines = vec![format!("{} Production Trend in {}:", crop, state), String::new()];
        for ((year, amount), rain) in years.iter().zip(&production).zip(&rainfall) {
            let rain = match rain {
                Some(mm) => format!("{}mm", format_plain(*mm)),
                None => "N/A".to_string(),
            };
            lines.push(format!(
                "{}: {} ('000 tonnes) | Rainfall: {}",
                year,
                format_quantity(*amount),
                rain
            ));
        }

        lines.push(format!(
            "\nOverall growth: {} ({}-{})",
            format_percent(growth_rate),
            years[0],
            years[years.len() - 1]
        ));
        lines.push(format!(
            "Average annual growth: {}",
            format_percent(average_annual_growth)
        ));

        Answer::with_sources(lines.join("\n"), TREND_SOURCES).with_data(AnswerData::Trend(
            TrendSummary {
                years,
                production,
                rainfall,
                growth_rate,
                average_annual_growth,
            },
        ))
    }
}
