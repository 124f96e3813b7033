//! Read-only in-memory store of agricultural and climate records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use super::provider::DataProvider;
use super::table::OrderedTable;
use crate::error::Result;

/// Calendar year. Serialized as a string key (`"2020"`) in JSON documents.
pub type Year = i32;

/// Per-year values ordered chronologically
pub type YearSeries = BTreeMap<Year, f64>;

/// Production statistics for one state ('000 tonnes)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgricultureRecord {
    /// Crop name -> year -> production
    #[serde(default)]
    pub crops: OrderedTable<YearSeries>,
    /// District name -> crop name -> production
    #[serde(default)]
    pub districts: OrderedTable<OrderedTable<f64>>,
}

/// Climate statistics for one state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateRecord {
    /// Year -> rainfall in millimetres
    #[serde(default)]
    pub rainfall: YearSeries,
    /// Year -> mean temperature in degrees Celsius
    #[serde(default)]
    pub temperature: YearSeries,
}

/// State name -> agriculture record
pub type AgricultureData = BTreeMap<String, AgricultureRecord>;

/// State name -> climate record
pub type ClimateData = BTreeMap<String, ClimateRecord>;

/// Holds both datasets. Populated once, never mutated afterwards.
///
/// Lookups return `Option`; the only places that default a missing value to
/// zero are [`DataStore::production_or_zero`] and [`DataStore::rainfall_or_zero`].
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    agriculture: AgricultureData,
    climate: ClimateData,
}

impl DataStore {
    /// Creates a store from already-fetched data
    pub fn new(agriculture: AgricultureData, climate: ClimateData) -> Self {
        Self {
            agriculture,
            climate,
        }
    }

    /// Fetches both datasets from a provider
    pub async fn load(provider: &dyn DataProvider) -> Result<Self> {
        info!(provider = provider.name(), "Fetching agricultural data");
        let agriculture = provider.fetch_agriculture().await?;

        info!(provider = provider.name(), "Fetching climate data");
        let climate = provider.fetch_climate().await?;

        info!(
            agriculture_states = agriculture.len(),
            climate_states = climate.len(),
            "Data store ready"
        );

        Ok(Self::new(agriculture, climate))
    }

    /// Store populated with the built-in seed data
    pub fn seeded() -> Self {
        Self::new(super::seed::agriculture(), super::seed::climate())
    }

    pub fn agriculture(&self, state: &str) -> Option<&AgricultureRecord> {
        self.agriculture.get(state)
    }

    pub fn climate(&self, state: &str) -> Option<&ClimateRecord> {
        self.climate.get(state)
    }

    /// Year series for a crop in a state
    pub fn crop_series(&self, state: &str, crop: &str) -> Option<&YearSeries> {
        self.agriculture(state)?.crops.get(crop)
    }

    pub fn production(&self, state: &str, crop: &str, year: Year) -> Option<f64> {
        self.crop_series(state, crop)?.get(&year).copied()
    }

    /// Production for a crop/year, 0 when the year is absent
    pub fn production_or_zero(&self, state: &str, crop: &str, year: Year) -> f64 {
        self.production(state, crop, year).unwrap_or(0.0)
    }

    pub fn rainfall(&self, state: &str, year: Year) -> Option<f64> {
        self.climate(state)?.rainfall.get(&year).copied()
    }

    /// Rainfall for a year, 0 when the year is absent
    pub fn rainfall_or_zero(&self, state: &str, year: Year) -> f64 {
        self.rainfall(state, year).unwrap_or(0.0)
    }

    pub fn temperature(&self, state: &str, year: Year) -> Option<f64> {
        self.climate(state)?.temperature.get(&year).copied()
    }
}
